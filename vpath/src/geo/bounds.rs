/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate::*;
use super::geo::*;

///
/// An axis-aligned bounding box
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bounds<Point> {
    min: Point,
    max: Point,
}

impl<Point: Coordinate> Geo for Bounds<Point> {
    type Point = Point;
}

impl<Point: Coordinate> Bounds<Point> {
    ///
    /// Creates a bounding box from two corners (the components are sorted so either order works)
    ///
    pub fn from_min_max(p1: Point, p2: Point) -> Bounds<Point> {
        Bounds {
            min: Point::from_smallest_components(p1, p2),
            max: Point::from_biggest_components(p1, p2),
        }
    }

    ///
    /// Returns the bounding box enclosing a set of points, or `None` if there are no points
    ///
    pub fn bounds_for_points<PointIter: IntoIterator<Item = Point>>(points: PointIter) -> Option<Bounds<Point>> {
        let mut points = points.into_iter();
        let first = points.next()?;

        Some(points.fold(Bounds { min: first, max: first }, |bounds, point| Bounds {
            min: Point::from_smallest_components(bounds.min, point),
            max: Point::from_biggest_components(bounds.max, point),
        }))
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point {
        self.max
    }

    ///
    /// The point in the middle of this bounding box
    ///
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    ///
    /// True if this bounding box overlaps another
    ///
    pub fn overlaps(&self, other: &Bounds<Point>) -> bool {
        (0..Point::len()).all(|idx| self.min.get(idx) <= other.max.get(idx) && other.min.get(idx) <= self.max.get(idx))
    }
}
