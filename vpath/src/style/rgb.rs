/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

use serde_derive::{Deserialize, Serialize};

use std::ops::*;

///
/// The red, green and blue components of a colour, each from 0 to 1
///
/// This is a `Coordinate` so colours can be interpolated in component space with the same functions that are
/// used for points.
///
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Rgb(pub f64, pub f64, pub f64);

impl Rgb {
    pub const WHITE: Rgb = Rgb(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);

    ///
    /// Converts a set of 8-bit components to an RGB colour
    ///
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Rgb {
        Rgb((r as f64) / 255.0, (g as f64) / 255.0, (b as f64) / 255.0)
    }

    ///
    /// Returns this colour with every component clamped to the range 0..1
    ///
    pub fn clamped(&self) -> Rgb {
        let clamp = |component: f64| component.max(0.0).min(1.0);
        Rgb(clamp(self.0), clamp(self.1), clamp(self.2))
    }
}

impl Coordinate for Rgb {
    #[inline]
    fn from_components(components: &[f64]) -> Rgb {
        Rgb(components[0], components[1], components[2])
    }

    #[inline]
    fn origin() -> Rgb {
        Rgb::BLACK
    }

    #[inline]
    fn len() -> usize {
        3
    }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        match index {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => panic!("Rgb only has three components"),
        }
    }
}

impl Add<Rgb> for Rgb {
    type Output = Rgb;

    #[inline]
    fn add(self, rhs: Rgb) -> Rgb {
        Rgb(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl Sub<Rgb> for Rgb {
    type Output = Rgb;

    #[inline]
    fn sub(self, rhs: Rgb) -> Rgb {
        Rgb(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

impl Mul<f64> for Rgb {
    type Output = Rgb;

    #[inline]
    fn mul(self, rhs: f64) -> Rgb {
        Rgb(self.0 * rhs, self.1 * rhs, self.2 * rhs)
    }
}
