/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Linearly interpolates between two coordinates (`from + alpha*(to - from)`)
///
/// Works for anything that implements `Coordinate`, so the same function is used for points, colours and
/// plain scalars such as stroke widths.
///
#[inline]
pub fn interpolate<Point: Coordinate>(from: Point, to: Point, alpha: f64) -> Point {
    from + (to - from) * alpha
}

///
/// Interpolates each point in one slice with the corresponding point in another
///
/// Returns `None` if the slices are different lengths.
///
pub fn interpolate_points<Point: Coordinate>(from: &[Point], to: &[Point], alpha: f64) -> Option<Vec<Point>> {
    if from.len() != to.len() {
        return None;
    }

    Some(
        from.iter()
            .zip(to.iter())
            .map(|(from, to)| interpolate(*from, *to, alpha))
            .collect(),
    )
}
