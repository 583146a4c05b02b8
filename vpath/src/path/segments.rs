/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::point_buffer::*;
use crate::bezier::*;

///
/// Iterates over the curves making up a point buffer
///
/// Curves are read from the buffer as they're requested. Cloning the iterator (or calling `segments()` again)
/// starts another pass over the same curves.
///
#[derive(Clone)]
pub struct SegmentIterator<'a, Point> {
    points: &'a [Point],
    next_index: usize,
}

impl<'a, Point: Coordinate> SegmentIterator<'a, Point> {
    pub(crate) fn new(buffer: &'a PointBuffer<Point>) -> SegmentIterator<'a, Point> {
        SegmentIterator {
            points: buffer.points(),
            next_index: 0,
        }
    }
}

impl<'a, Point: Coordinate> Iterator for SegmentIterator<'a, Point> {
    type Item = Curve<Point>;

    fn next(&mut self) -> Option<Curve<Point>> {
        let idx = self.next_index;

        if idx + 3 < self.points.len() {
            self.next_index += 3;

            Some(Curve::from_points(
                self.points[idx],
                (self.points[idx + 1], self.points[idx + 2]),
                self.points[idx + 3],
            ))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.points.len().saturating_sub(self.next_index + 1) / 3;
        (remaining, Some(remaining))
    }
}

impl<'a, Point: Coordinate> ExactSizeIterator for SegmentIterator<'a, Point> {}
