/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Straight lines
//!
//! A line is anything that implements the `Line` trait: a `(Point, Point)` tuple is the simplest example.
//! `line_to_bezier()` converts a line into a cubic bezier curve that traces the same straight segment,
//! which is how paths made of sharp corners are represented.
//!

mod line;
mod to_curve;

pub use self::line::*;
pub use self::to_curve::*;
