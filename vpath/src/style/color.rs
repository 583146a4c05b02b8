/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::rgb::*;

use hsluv::{hsluv_to_rgb, rgb_to_hsluv};
use serde_derive::{Deserialize, Serialize};

use std::str::FromStr;

///
/// Describes a colour
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Color {
    /// Red, green and blue components from 0 to 1
    Rgb(f64, f64, f64),

    /// Hue (in degrees), saturation and lightness (both from 0 to 100) in the HSLuv colour space
    Hsluv(f64, f64, f64),
}

///
/// Errors that can occur when reading a colour from a string
///
#[derive(Clone, PartialEq, Debug)]
pub enum ColorError {
    /// The string isn't the name of a known colour
    UnknownName(String),

    /// The string starts with '#' but isn't a valid hex colour
    InvalidHex(String),
}

impl Color {
    ///
    /// Returns the red, green and blue components of this colour
    ///
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Color::Rgb(r, g, b) => Rgb(*r, *g, *b),
            Color::Hsluv(h, s, l) => {
                let (r, g, b) = hsluv_to_rgb((*h, *s, *l));
                Rgb(r, g, b)
            }
        }
    }

    ///
    /// Returns the hue, saturation and lightness of this colour in the HSLuv colour space
    ///
    pub fn to_hsluv_components(&self) -> (f64, f64, f64) {
        match self {
            Color::Hsluv(h, s, l) => (*h, *s, *l),
            Color::Rgb(r, g, b) => rgb_to_hsluv((*r, *g, *b)),
        }
    }

    ///
    /// Formats this colour as a `#rrggbb` string
    ///
    pub fn to_hex(&self) -> String {
        let Rgb(r, g, b) = self.to_rgb().clamped();
        let byte = |component: f64| (component * 255.0).round() as u8;

        format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Color {
        rgb_to_color(rgb)
    }
}

///
/// Returns the hex string for one of the named colours
///
fn named_color_hex(name: &str) -> Option<&'static str> {
    let hex = match name.to_ascii_lowercase().as_str() {
        "white" => "#ffffff",
        "black" => "#000000",
        "grey" | "gray" => "#888888",
        "light_grey" | "light_gray" => "#bbbbbb",
        "dark_grey" | "dark_gray" => "#444444",
        "blue" => "#58c4dd",
        "teal" => "#5cd0b3",
        "green" => "#83c167",
        "yellow" => "#ffff00",
        "gold" => "#f0ac5f",
        "red" => "#fc6255",
        "maroon" => "#c55f73",
        "purple" => "#9a72ac",
        "pink" => "#d147bd",
        "orange" => "#ff862f",

        _ => return None,
    };

    Some(hex)
}

///
/// Parses a `#rrggbb` or `#rgb` string
///
fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let component = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

    match digits.len() {
        6 => Ok(Rgb::from_bytes(
            component(&digits[0..2])?,
            component(&digits[2..4])?,
            component(&digits[4..6])?,
        )),

        3 => {
            let expand = |digit: &str| component(&digit.repeat(2));
            Ok(Rgb::from_bytes(
                expand(&digits[0..1])?,
                expand(&digits[1..2])?,
                expand(&digits[2..3])?,
            ))
        }

        _ => Err(invalid()),
    }
}

///
/// Converts a colour name or a hex string to its red, green and blue components
///
pub fn color_to_rgb(name_or_hex: &str) -> Result<Rgb, ColorError> {
    let name_or_hex = name_or_hex.trim();

    if name_or_hex.starts_with('#') {
        parse_hex(name_or_hex)
    } else if let Some(hex) = named_color_hex(name_or_hex) {
        parse_hex(hex)
    } else {
        Err(ColorError::UnknownName(name_or_hex.to_string()))
    }
}

///
/// Converts a set of red, green and blue components back to a colour
///
#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(name_or_hex: &str) -> Result<Color, ColorError> {
        color_to_rgb(name_or_hex).map(rgb_to_color)
    }
}
