/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::basis::*;
use super::section::*;
use super::subdivide::*;
use crate::geo::*;

///
/// Trait implemented by things representing a cubic bezier curve
///
pub trait BezierCurve: Geo + Clone + Sized {
    ///
    /// The start point of this curve
    ///
    fn start_point(&self) -> Self::Point;

    ///
    /// The end point of this curve
    ///
    fn end_point(&self) -> Self::Point;

    ///
    /// The control points in this curve
    ///
    fn control_points(&self) -> (Self::Point, Self::Point);

    ///
    /// All four points of this curve, in order
    ///
    #[inline]
    fn all_points(&self) -> (Self::Point, Self::Point, Self::Point, Self::Point) {
        let (cp1, cp2) = self.control_points();
        (self.start_point(), cp1, cp2, self.end_point())
    }

    ///
    /// Given a value t from 0 to 1, returns a point on this curve
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Self::Point {
        let (w1, w2, w3, w4) = self.all_points();
        de_casteljau4(t, w1, w2, w3, w4)
    }

    ///
    /// Subdivides this curve into two at the specified position
    ///
    fn subdivide<Curve: BezierCurveFactory<Point = Self::Point>>(&self, t: f64) -> (Curve, Curve) {
        let (w1, w2, w3, w4) = self.all_points();
        let (first, second) = subdivide4(t, w1, w2, w3, w4);

        (
            Curve::from_points(first.0, (first.1, first.2), first.3),
            Curve::from_points(second.0, (second.1, second.2), second.3),
        )
    }

    ///
    /// Returns the section of this curve between two `t` values
    ///
    fn section<Curve: BezierCurveFactory<Point = Self::Point>>(&self, t_min: f64, t_max: f64) -> Curve {
        let (w1, w2, w3, w4) = self.all_points();
        let (p0, p1, p2, p3) = split_cubic(w1, w2, w3, w4, t_min, t_max);

        Curve::from_points(p0, (p1, p2), p3)
    }
}

///
/// Trait implemented by bezier curves that can be created from a set of points
///
pub trait BezierCurveFactory: BezierCurve {
    ///
    /// Creates a new bezier curve of the same type from some points
    ///
    fn from_points(start: Self::Point, control_points: (Self::Point, Self::Point), end: Self::Point) -> Self;

    ///
    /// Creates a new bezier curve of this type from an equivalent curve of another type
    ///
    fn from_curve<Curve: BezierCurve<Point = Self::Point>>(curve: &Curve) -> Self {
        Self::from_points(curve.start_point(), curve.control_points(), curve.end_point())
    }
}

///
/// Represents a cubic bezier curve
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Curve<Coord> {
    pub start_point: Coord,
    pub end_point: Coord,
    pub control_points: (Coord, Coord),
}

impl<Coord: Coordinate> Geo for Curve<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate> BezierCurveFactory for Curve<Coord> {
    #[inline]
    fn from_points(start: Coord, control_points: (Coord, Coord), end: Coord) -> Self {
        Curve {
            start_point: start,
            end_point: end,
            control_points,
        }
    }
}

impl<Coord: Coordinate> BezierCurve for Curve<Coord> {
    #[inline]
    fn start_point(&self) -> Coord {
        self.start_point
    }

    #[inline]
    fn end_point(&self) -> Coord {
        self.end_point
    }

    #[inline]
    fn control_points(&self) -> (Coord, Coord) {
        self.control_points
    }
}
