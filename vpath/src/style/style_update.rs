/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::color::*;
use super::path_style::*;
use super::rgb::*;

///
/// A change to some of the attributes of a path style
///
/// Attributes that are `None` are left as they are.
///
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct StyleUpdate {
    pub stroke_rgb: Option<Rgb>,
    pub stroke_width: Option<f64>,
    pub fill_rgb: Option<Rgb>,
    pub fill_opacity: Option<f64>,
}

impl StyleUpdate {
    ///
    /// An update that doesn't change anything
    ///
    pub fn new() -> StyleUpdate {
        StyleUpdate::default()
    }

    ///
    /// Sets the fill opacity and optionally the fill colour
    ///
    pub fn fill(self, color: Option<Color>, opacity: f64) -> StyleUpdate {
        StyleUpdate {
            fill_rgb: color.map(|color| color.to_rgb()).or(self.fill_rgb),
            fill_opacity: Some(opacity),
            ..self
        }
    }

    ///
    /// Sets the stroke colour and width, if they're specified
    ///
    pub fn stroke(self, color: Option<Color>, width: Option<f64>) -> StyleUpdate {
        StyleUpdate {
            stroke_rgb: color.map(|color| color.to_rgb()).or(self.stroke_rgb),
            stroke_width: width.or(self.stroke_width),
            ..self
        }
    }

    ///
    /// Sets the fill and stroke colour to the same colour, without changing the opacity or width
    ///
    pub fn color(self, color: Color) -> StyleUpdate {
        let rgb = color.to_rgb();

        StyleUpdate {
            stroke_rgb: Some(rgb),
            fill_rgb: Some(rgb),
            ..self
        }
    }

    ///
    /// Changes a style according to this update
    ///
    pub fn apply(&self, style: &mut PathStyle) {
        if let Some(stroke_rgb) = self.stroke_rgb {
            style.stroke_rgb = stroke_rgb;
        }
        if let Some(stroke_width) = self.stroke_width {
            style.stroke_width = stroke_width;
        }
        if let Some(fill_rgb) = self.fill_rgb {
            style.fill_rgb = fill_rgb;
        }
        if let Some(fill_opacity) = self.fill_opacity {
            style.fill_opacity = fill_opacity;
        }
    }
}
