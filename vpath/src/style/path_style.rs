/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::rgb::*;
use crate::bezier::interpolate;
use crate::consts::*;

use serde_derive::{Deserialize, Serialize};

///
/// The attributes used to draw a path
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PathStyle {
    pub stroke_rgb: Rgb,
    pub stroke_width: f64,
    pub fill_rgb: Rgb,
    pub fill_opacity: f64,
}

impl Default for PathStyle {
    fn default() -> PathStyle {
        PathStyle {
            stroke_rgb: Rgb::WHITE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill_rgb: Rgb::BLACK,
            fill_opacity: 0.0,
        }
    }
}

impl PathStyle {
    ///
    /// Blends two styles: every attribute is linearly interpolated, with colours interpolated component by component
    ///
    pub fn interpolate(from: &PathStyle, to: &PathStyle, alpha: f64) -> PathStyle {
        PathStyle {
            stroke_rgb: interpolate(from.stroke_rgb, to.stroke_rgb, alpha),
            stroke_width: interpolate(from.stroke_width, to.stroke_width, alpha),
            fill_rgb: interpolate(from.fill_rgb, to.fill_rgb, alpha),
            fill_opacity: interpolate(from.fill_opacity, to.fill_opacity, alpha),
        }
    }
}
