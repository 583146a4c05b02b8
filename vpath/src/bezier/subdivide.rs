/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::basis::*;
use crate::geo::*;

///
/// Subdivides a cubic bezier curve at a particular point, returning the control points of the two halves
///
/// The first curve covers `0..t` of the original and the second covers `t..1`.
///
#[inline]
pub fn subdivide4<Point: Coordinate>(
    t: f64,
    w1: Point,
    w2: Point,
    w3: Point,
    w4: Point,
) -> ((Point, Point, Point, Point), (Point, Point, Point, Point)) {
    // Same calculation as de Casteljau's algorithm, but the intermediate points are the control points of the halves
    let wn1 = lerp(w1, w2, t);
    let wn2 = lerp(w2, w3, t);
    let wn3 = lerp(w3, w4, t);

    let wnn1 = lerp(wn1, wn2, t);
    let wnn2 = lerp(wn2, wn3, t);

    let p = lerp(wnn1, wnn2, t);

    ((w1, wn1, wnn1, p), (p, wnn2, wn3, w4))
}
