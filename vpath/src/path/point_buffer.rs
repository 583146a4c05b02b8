/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;
use super::segments::*;
use crate::bezier::*;
use crate::consts::*;

///
/// The points making up a chain of cubic bezier curves
///
/// The buffer starts with an anchor point, followed by two handles and an anchor point for each curve. Every
/// point at an index divisible by 3 is an anchor, and a buffer always contains `3k+1` points for `k` curves,
/// or is empty.
///
#[derive(Clone, PartialEq, Debug)]
pub struct PointBuffer<Point> {
    points: Vec<Point>,
}

///
/// What kind of path a point buffer represents
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathShape<'a, Point> {
    /// A buffer with no points at all
    Empty,

    /// A buffer containing a single point and no curves
    Point(Point),

    /// A buffer containing one or more curves
    Chain(&'a PointBuffer<Point>),
}

///
/// True if a list of points starts and ends in the same place
///
pub fn points_are_closed<Point: Coordinate>(points: &[Point]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => first.is_near_to(last, CLOSED_PATH_DISTANCE),
        _ => false,
    }
}

///
/// Finds the segment and the position within it that correspond to a proportion along a path
///
/// `t == 1.0` is the end of the final segment rather than the start of a segment beyond it, and proportions
/// slightly outside of 0..1 evaluate the first or last segment slightly outside of its range.
///
pub(crate) fn segment_position(num_segments: usize, t: f64) -> (usize, f64) {
    let scaled = t * (num_segments as f64);
    let floor = scaled.floor();

    let index = if floor <= 0.0 {
        0
    } else if floor >= (num_segments - 1) as f64 {
        num_segments - 1
    } else {
        floor as usize
    };

    (index, scaled - (index as f64))
}

impl<Point: Coordinate> PointBuffer<Point> {
    ///
    /// Creates a buffer containing no points
    ///
    pub fn empty() -> PointBuffer<Point> {
        PointBuffer { points: vec![] }
    }

    ///
    /// Creates a buffer containing a single point
    ///
    pub fn from_point(point: Point) -> PointBuffer<Point> {
        PointBuffer {
            points: vec![point],
        }
    }

    ///
    /// Creates a buffer describing `num_segments` curves that all collapse to the same point
    ///
    pub fn repeated(point: Point, num_segments: usize) -> PointBuffer<Point> {
        PointBuffer {
            points: vec![point; num_segments * 3 + 1],
        }
    }

    ///
    /// Creates a buffer from a list of points, which must be empty or contain `3k+1` points
    ///
    pub fn from_points(points: Vec<Point>) -> Result<PointBuffer<Point>, PathError> {
        if points.is_empty() || points.len() % 3 == 1 {
            Ok(PointBuffer { points })
        } else {
            Err(PathError::InvalidPointCount(points.len()))
        }
    }

    ///
    /// Creates a buffer from a list of points that's already known to have a valid length
    ///
    pub(crate) fn from_points_unchecked(points: Vec<Point>) -> PointBuffer<Point> {
        test_assert!(points.is_empty() || points.len() % 3 == 1);

        PointBuffer { points }
    }

    ///
    /// Creates a buffer by interleaving a list of anchor points with the handles of the curves between them
    ///
    /// There must be one fewer of each kind of handle than there are anchors.
    ///
    pub fn from_anchors_and_handles(
        anchors: &[Point],
        handles1: &[Point],
        handles2: &[Point],
    ) -> Result<PointBuffer<Point>, PathError> {
        if anchors.is_empty() || handles1.len() + 1 != anchors.len() || handles2.len() + 1 != anchors.len() {
            return Err(PathError::MismatchedHandles {
                anchors: anchors.len(),
                handles1: handles1.len(),
                handles2: handles2.len(),
            });
        }

        let mut points = Vec::with_capacity(anchors.len() * 3 - 2);
        points.push(anchors[0]);

        for ((cp1, cp2), end_point) in handles1.iter().zip(handles2.iter()).zip(anchors[1..].iter()) {
            points.push(*cp1);
            points.push(*cp2);
            points.push(*end_point);
        }

        Ok(PointBuffer::from_points_unchecked(points))
    }

    ///
    /// The points in this buffer
    ///
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    ///
    /// Takes the points out of this buffer
    ///
    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    ///
    /// Classifies this buffer as an empty path, a single point or a chain of curves
    ///
    pub fn shape(&self) -> PathShape<'_, Point> {
        match self.points.len() {
            0 => PathShape::Empty,
            1 => PathShape::Point(self.points[0]),
            _ => PathShape::Chain(self),
        }
    }

    ///
    /// The number of anchor points in this buffer (one more than the number of curves, or 0 for an empty buffer)
    ///
    #[inline]
    pub fn num_anchors(&self) -> usize {
        if self.points.is_empty() {
            0
        } else {
            (self.points.len() - 1) / 3 + 1
        }
    }

    ///
    /// The number of curves in this buffer
    ///
    #[inline]
    pub fn num_segments(&self) -> usize {
        if self.points.is_empty() {
            0
        } else {
            (self.points.len() - 1) / 3
        }
    }

    ///
    /// The first point in this buffer
    ///
    #[inline]
    pub fn start_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    ///
    /// The last point in this buffer
    ///
    #[inline]
    pub fn end_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    ///
    /// Returns the curve starting at the `n`th anchor point, or `None` if there's no such curve
    ///
    pub fn nth_segment(&self, n: usize) -> Option<Curve<Point>> {
        if n >= self.num_segments() {
            return None;
        }

        let idx = n * 3;
        Some(Curve::from_points(
            self.points[idx],
            (self.points[idx + 1], self.points[idx + 2]),
            self.points[idx + 3],
        ))
    }

    ///
    /// Returns an iterator over the curves in this buffer
    ///
    #[inline]
    pub fn segments(&self) -> SegmentIterator<'_, Point> {
        SegmentIterator::new(self)
    }

    ///
    /// Iterates over the anchor points in this buffer
    ///
    pub fn anchors(&self) -> impl '_ + Iterator<Item = Point> {
        self.points.iter().step_by(3).copied()
    }

    ///
    /// Splits this buffer into its anchor points, its first handles and its second handles
    ///
    /// The list of anchors contains one more point than either of the lists of handles.
    ///
    pub fn anchors_and_handles(&self) -> (Vec<Point>, Vec<Point>, Vec<Point>) {
        let stride = |offset: usize| self.points.iter().skip(offset).step_by(3).copied().collect::<Vec<_>>();

        (stride(0), stride(1), stride(2))
    }

    ///
    /// True if the first and last points of this buffer are at the same position
    ///
    #[inline]
    pub fn is_closed(&self) -> bool {
        points_are_closed(&self.points)
    }

    ///
    /// Returns the point at a proportion `t` (from 0 to 1) along this path
    ///
    /// Every curve covers an equal share of the range, regardless of its length.
    ///
    pub fn sample_at_proportion(&self, t: f64) -> Result<Point, PathError> {
        let num_segments = self.num_segments();
        if num_segments == 0 {
            return Err(PathError::NoSegments);
        }

        let (index, local_t) = segment_position(num_segments, t);
        let idx = index * 3;
        let curve = evaluate_cubic(
            self.points[idx],
            self.points[idx + 1],
            self.points[idx + 2],
            self.points[idx + 3],
        );

        Ok(curve(local_t))
    }
}

impl<Point: Coordinate> Default for PointBuffer<Point> {
    fn default() -> PointBuffer<Point> {
        PointBuffer::empty()
    }
}

impl<Point: Coordinate> Geo for PointBuffer<Point> {
    type Point = Point;
}

impl<Point: Coordinate> HasBoundingBox for PointBuffer<Point> {
    fn bounding_box(&self) -> Option<Bounds<Point>> {
        Bounds::bounds_for_points(self.points.iter().copied())
    }
}
