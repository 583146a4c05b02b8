/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::fit_mode::*;
use super::point_buffer::*;
use super::smooth::*;
use crate::geo::*;
use crate::line::*;

use itertools::*;

///
/// Computes the handles that join each pair of anchor points with a straight line
///
pub fn corner_handles<Point: Coordinate>(anchors: &[Point]) -> (Vec<Point>, Vec<Point>) {
    anchors
        .iter()
        .tuple_windows()
        .map(|(start, end)| line_handles(&(*start, *end)))
        .unzip()
}

///
/// Generates a point buffer that passes through a list of anchor points
///
/// An empty list of anchors produces an empty buffer and a single anchor produces a buffer containing just that
/// point. Use `close_points()` first if the path should finish where it started.
///
pub fn fit_points<Point: Coordinate>(anchors: &[Point], mode: FitMode) -> PointBuffer<Point> {
    match anchors.len() {
        0 => PointBuffer::empty(),
        1 => PointBuffer::from_point(anchors[0]),

        _ => {
            let (handles1, handles2) = match mode {
                FitMode::Corners => corner_handles(anchors),
                FitMode::Smooth => smooth_handles(anchors),
            };

            let mut points = Vec::with_capacity(anchors.len() * 3 - 2);
            points.push(anchors[0]);

            for ((cp1, cp2), end_point) in handles1.into_iter().zip(handles2).zip(anchors[1..].iter()) {
                points.push(cp1);
                points.push(cp2);
                points.push(*end_point);
            }

            PointBuffer::from_points_unchecked(points)
        }
    }
}

///
/// Returns a copy of a list of points that ends where it started, adding a copy of the first point if needed
///
pub fn close_points<Point: Coordinate>(points: &[Point]) -> Vec<Point> {
    let mut closed = points.to_vec();

    if points.len() > 1 && !points_are_closed(points) {
        closed.push(points[0]);
    }

    closed
}
