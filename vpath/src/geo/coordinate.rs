/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::Debug;
use std::ops::*;

///
/// Represents a value that can be used as a coordinate in a path
///
/// Coordinates have a fixed number of components (`len()`) and support the vector operations needed to
/// evaluate and subdivide bezier curves: addition, subtraction and scaling by a scalar.
///
pub trait Coordinate:
    Sized + Copy + Debug + PartialEq + Add<Self, Output = Self> + Sub<Self, Output = Self> + Mul<f64, Output = Self>
{
    ///
    /// Creates a new coordinate from the specified set of components
    ///
    fn from_components(components: &[f64]) -> Self;

    ///
    /// Returns the origin coordinate
    ///
    fn origin() -> Self;

    ///
    /// The number of components in this coordinate
    ///
    fn len() -> usize;

    ///
    /// Retrieves the component at the specified index
    ///
    fn get(&self, index: usize) -> f64;

    ///
    /// Returns a point made up of the biggest components of the two points
    ///
    fn from_biggest_components(p1: Self, p2: Self) -> Self {
        let components = (0..Self::len())
            .map(|idx| f64::max(p1.get(idx), p2.get(idx)))
            .collect::<Vec<_>>();

        Self::from_components(&components)
    }

    ///
    /// Returns a point made up of the smallest components of the two points
    ///
    fn from_smallest_components(p1: Self, p2: Self) -> Self {
        let components = (0..Self::len())
            .map(|idx| f64::min(p1.get(idx), p2.get(idx)))
            .collect::<Vec<_>>();

        Self::from_components(&components)
    }

    ///
    /// Computes the dot product of this coordinate with another
    ///
    fn dot(&self, target: &Self) -> f64 {
        (0..Self::len())
            .map(|idx| self.get(idx) * target.get(idx))
            .sum()
    }

    ///
    /// Returns the length of the vector from the origin to this coordinate
    ///
    #[inline]
    fn magnitude(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }

    ///
    /// Computes the distance between this coordinate and another of the same type
    ///
    fn distance_to(&self, target: &Self) -> f64 {
        (*self - *target).magnitude()
    }

    ///
    /// True if this coordinate is within `max_distance` of another
    ///
    #[inline]
    fn is_near_to(&self, target: &Self, max_distance: f64) -> bool {
        self.distance_to(target) <= max_distance
    }
}
