/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;
use crate::path::*;

use itertools::*;

use std::fmt::Write;

///
/// Writes a single point out as a tuple of its components
///
fn point_to_string<Point: Coordinate>(point: &Point) -> String {
    let components = (0..Point::len()).map(|idx| format!("{}", point.get(idx))).join(", ");

    format!("({})", components)
}

///
/// Creates a string describing a point buffer, one segment per line
///
/// The first line is the starting anchor, and each following line is the handles and end point of a segment.
///
pub fn buffer_to_string<Point: Coordinate>(buffer: &PointBuffer<Point>) -> String {
    let mut result = String::new();

    match buffer.shape() {
        PathShape::Empty => {
            write!(result, "<empty>").ok();
        }

        PathShape::Point(point) => {
            write!(result, "point {}", point_to_string(&point)).ok();
        }

        PathShape::Chain(chain) => {
            write!(result, "start {}", point_to_string(&chain.points()[0])).ok();

            for curve in chain.segments() {
                let (cp1, cp2) = curve.control_points;
                write!(
                    result,
                    "\n  curve {} {} -> {}",
                    point_to_string(&cp1),
                    point_to_string(&cp2),
                    point_to_string(&curve.end_point)
                )
                .ok();
            }
        }
    }

    result
}
