/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::line::*;
use crate::bezier::*;

///
/// Returns the handles that make a cubic bezier curve trace a straight line
///
/// The handles sit one third and two thirds of the way along the line, which also gives the curve a
/// constant speed.
///
#[inline]
pub fn line_handles<L: Line>(line: &L) -> (L::Point, L::Point) {
    (line.point_at_pos(1.0 / 3.0), line.point_at_pos(2.0 / 3.0))
}

///
/// Changes a line to a bezier curve
///
pub fn line_to_bezier<Curve: BezierCurveFactory>(line: &impl Line<Point = Curve::Point>) -> Curve {
    let (start, end) = line.points();
    let handles = line_handles(line);

    Curve::from_points(start, handles, end)
}
