/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Stroke and fill styles for paths
//!
//! Every path has a `PathStyle`: a stroke colour and width, and a fill colour and opacity. Colours are stored
//! as `Rgb` components so that they can be interpolated along with the points of a path, and `Color` is used
//! to describe them when setting or reading them back.
//!
//! Style changes are described by a `StyleUpdate`, which is applied to a path and all of its subpaths at once.
//!

mod color;
mod path_style;
mod rgb;
mod style_update;

pub use self::color::*;
pub use self::path_style::*;
pub use self::rgb::*;
pub use self::style_update::*;
