/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Routines for evaluating and subdividing single cubic bezier curves
//!
//! ```
//! # use flo_vpath::*;
//! # use flo_vpath::bezier::*;
//! #
//! let curve       = Curve::from_points(Coord2(1.0, 2.0), (Coord2(2.0, 0.0), Coord2(3.0, 5.0)), Coord2(4.0, 2.0));
//!
//! let mid_point   = curve.point_at_pos(0.5);
//! let middle      = curve.section::<Curve<_>>(0.25, 0.75);
//! let (lhs, rhs)  = curve.subdivide::<Curve<_>>(0.5);
//! ```
//!
//! The functions here are stateless: `evaluate_cubic()` returns a function that finds the point at a
//! particular `t` value on a curve defined by four control points, and `split_cubic()` returns the control
//! points of the section of a curve between two `t` values.
//!
//! Anything that implements the `BezierCurve` trait can be queried with these functions. `Curve` is the basic
//! implementation, and is what a `PointBuffer` returns when asked for one of its segments.
//!

mod basis;
mod curve;
mod interpolate;
mod section;
mod subdivide;

pub use basis::*;
pub use curve::*;
pub use interpolate::*;
pub use section::*;
pub use subdivide::*;

pub use super::geo::*;
