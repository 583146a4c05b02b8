/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Paths made from chained cubic bezier curves
//!
//! ```
//! # use flo_vpath::*;
//! #
//! let mut square = PathGeometry::<Coord3>::new();
//! square.set_anchor_points(&[Coord3(0.0, 0.0, 0.0), Coord3(1.0, 0.0, 0.0), Coord3(1.0, 1.0, 0.0), Coord3(0.0, 1.0, 0.0)], FitMode::Corners);
//!
//! let mut triangle = PathGeometry::<Coord3>::new();
//! triangle.set_anchor_points(&[Coord3(0.0, 0.0, 0.0), Coord3(1.0, 0.0, 0.0), Coord3(0.5, 1.0, 0.0)], FitMode::Smooth);
//!
//! // Morphing needs both paths to have the same number of curves
//! triangle.align_with(&mut square).unwrap();
//!
//! let mut frame = square.clone();
//! frame.interpolate(&triangle, &square, 0.5).unwrap();
//!
//! // Drawing a path on progressively uses a partial copy of it
//! let mut half_drawn = PathGeometry::new();
//! half_drawn.become_partial(&square, 0.0, 0.5).unwrap();
//! ```
//!
//! A path's points are stored in a `PointBuffer`: an anchor point followed by a (handle, handle, anchor)
//! triple for every curve, so a buffer always has `3k+1` points for `k` curves. Buffers with zero or one
//! points are degenerate paths: `PointBuffer::shape()` classifies a buffer as a `PathShape` so that the
//! algorithms here can match on the kind of path they're working with.
//!
//! `PathGeometry` owns a buffer along with the style used to draw it and any subpaths (the disjoint parts
//! of a path with several contours, such as a letter with a hole in it).
//!
//! The operations used when morphing one shape into another are `align_to_segment_count()`, which
//! resamples a path so it has more curves without changing its shape, and `extract_partial()`, which
//! returns the part of a path between two proportions of its length. Both always create a new buffer.
//!

mod align;
mod error;
mod fit;
mod fit_mode;
mod geometry;
mod options;
mod partial;
mod point_buffer;
mod segments;
mod smooth;
mod visitor;

pub use self::align::*;
pub use self::error::*;
pub use self::fit::*;
pub use self::fit_mode::*;
pub use self::geometry::*;
pub use self::options::*;
pub use self::partial::*;
pub use self::point_buffer::*;
pub use self::segments::*;
pub use self::smooth::*;
pub use self::visitor::*;
