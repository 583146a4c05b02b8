/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::bezier::interpolate;
use crate::geo::*;

///
/// Represents a straight line
///
pub trait Line: Geo {
    ///
    /// Creates a new line from points
    ///
    fn from_points(p1: Self::Point, p2: Self::Point) -> Self;

    ///
    /// Returns the two end points of this line
    ///
    fn points(&self) -> (Self::Point, Self::Point);

    ///
    /// Given a value from 0 to 1, finds the corresponding point on this line
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Self::Point {
        let (from, to) = self.points();
        interpolate(from, to, t)
    }
}

impl<Point: Coordinate> Geo for (Point, Point) {
    type Point = Point;
}

impl<Point: Coordinate> Line for (Point, Point) {
    #[inline]
    fn from_points(p1: Point, p2: Point) -> (Point, Point) {
        (p1, p2)
    }

    #[inline]
    fn points(&self) -> (Point, Point) {
        *self
    }
}
