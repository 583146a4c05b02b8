/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::subdivide::*;
use crate::geo::*;

///
/// Returns the control points of the section of a cubic bezier curve between `t_min` and `t_max`
///
/// The curve is subdivided twice: once at `t_min` (keeping the part after it) and once at the point where
/// `t_max` lands on that remainder (keeping the part before it). Evaluating the result at 0 gives the point
/// at `t_min` on the original curve, and at 1 gives the point at `t_max`. `split_cubic(.., 0.0, 1.0)` returns
/// the original control points.
///
pub fn split_cubic<Point: Coordinate>(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    t_min: f64,
    t_max: f64,
) -> (Point, Point, Point, Point) {
    if t_min >= 1.0 {
        // Everything after t=1 is the end point
        return (p3, p3, p3, p3);
    }

    let (_, after_min) = subdivide4(t_min, p0, p1, p2, p3);

    // Where t_max lies on the curve that starts at t_min
    let t_max = (t_max - t_min) / (1.0 - t_min);
    let (section, _) = subdivide4(t_max, after_min.0, after_min.1, after_min.2, after_min.3);

    section
}
