/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Traits for basic geometric definitions
//!
//! Paths in this crate are generic over their point type: anything implementing `Coordinate` can be
//! used as the point type of a path. `Coord2` and `Coord3` are supplied for 2D and 3D paths, and `f64`
//! implements `Coordinate` too so that scalars can be interpolated with the same functions as points.
//!
//! The `Geo` trait is implemented by types that have a particular type of coordinate, such as curves
//! and paths. `Bounds` describes an axis-aligned bounding box.
//!

mod bounds;
mod coord1;
mod coord2;
mod coord3;
mod coordinate;
mod geo;
mod has_bounds;

pub use self::bounds::*;
pub use self::coord1::*;
pub use self::coord2::*;
pub use self::coord3::*;
pub use self::coordinate::*;
pub use self::geo::*;
pub use self::has_bounds::*;
