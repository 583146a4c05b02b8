/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Computes the value of the cubic bezier basis function at `t` using the expanded polynomial
///
#[inline]
pub fn basis<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let t_squared = t * t;
    let t_cubed = t_squared * t;

    let one_minus_t = 1.0 - t;
    let one_minus_t_squared = one_minus_t * one_minus_t;
    let one_minus_t_cubed = one_minus_t_squared * one_minus_t;

    w1 * one_minus_t_cubed + w2 * (3.0 * one_minus_t_squared * t) + w3 * (3.0 * one_minus_t * t_squared) + w4 * t_cubed
}

///
/// Finds the point at `t` on a cubic bezier curve using de Casteljau's algorithm
///
/// This only uses affine combinations of the control points, so it stays well-behaved for `t` values that
/// are slightly outside of the range 0..1
///
#[inline]
pub fn de_casteljau4<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let wn1 = lerp(w1, w2, t);
    let wn2 = lerp(w2, w3, t);
    let wn3 = lerp(w3, w4, t);

    let wnn1 = lerp(wn1, wn2, t);
    let wnn2 = lerp(wn2, wn3, t);

    lerp(wnn1, wnn2, t)
}

///
/// Returns a function that evaluates the cubic bezier curve with the specified control points
///
/// ```
/// # use flo_vpath::*;
/// # use flo_vpath::bezier::*;
/// let curve = evaluate_cubic(Coord2(0.0, 0.0), Coord2(0.0, 1.0), Coord2(1.0, 1.0), Coord2(1.0, 0.0));
///
/// assert!(curve(0.0) == Coord2(0.0, 0.0));
/// assert!(curve(1.0) == Coord2(1.0, 0.0));
/// ```
///
pub fn evaluate_cubic<Point: Coordinate>(p0: Point, p1: Point, p2: Point, p3: Point) -> impl Fn(f64) -> Point {
    move |t| de_casteljau4(t, p0, p1, p2, p3)
}

///
/// Weighted blend of two points (`p1*(1-t) + p2*t`)
///
/// `t == 0` and `t == 1` return exactly `p1` and `p2`, so subdividing a curve at either end reproduces its
/// control points.
///
#[inline]
pub(crate) fn lerp<Point: Coordinate>(p1: Point, p2: Point, t: f64) -> Point {
    p1 * (1.0 - t) + p2 * t
}
