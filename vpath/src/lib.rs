/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_vpath
//!
//! `flo_vpath` represents drawable shapes as chains of cubic bezier curves that share their end points, and
//! provides the operations needed to animate one shape turning into another.
//!
//! ```
//! # use flo_vpath::*;
//! #
//! let mut path = PathGeometry::<Coord3>::new();
//! path.set_anchor_points(&[Coord3(0.0, 0.0, 0.0), Coord3(1.0, 0.0, 0.0), Coord3(1.0, 1.0, 0.0)], FitMode::Corners);
//!
//! assert!(path.num_segments() == 3);
//! assert!(path.is_closed());
//! assert!(path.sample_at_proportion(0.0) == Ok(Coord3(0.0, 0.0, 0.0)));
//! ```
//!
//! The crate is organised in layers:
//!
//! * `bezier` evaluates and subdivides individual cubic curves
//! * `path` describes the point buffers that chain curves together, and the algorithms that fit curves to
//!   a set of points, resample a path to a different number of curves and extract part of a path
//! * `style` describes how a path is drawn, and how those styles are blended when morphing
//!
//! Paths are generic over the type of point they use: `Coord2` and `Coord3` are supplied for 2D and 3D
//! paths, and any type implementing `Coordinate` can be used.
//!

#![allow(clippy::new_without_default)]

#[macro_use]
mod test_assert;

pub mod bezier;
pub mod consts;
pub mod debug;
pub mod geo;
pub mod line;
pub mod path;
pub mod style;

pub use self::bezier::{BezierCurve, BezierCurveFactory, Curve};
pub use self::geo::*;
pub use self::path::*;
pub use self::style::*;
