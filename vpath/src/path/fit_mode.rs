/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;

use serde_derive::{Deserialize, Serialize};

use std::str::FromStr;

///
/// How a path is generated from a set of anchor points
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum FitMode {
    /// Handles are chosen so that the curve passes smoothly through every anchor point
    Smooth,

    /// Each pair of anchor points is joined by a straight line, leaving sharp corners at the anchors
    Corners,
}

impl Default for FitMode {
    fn default() -> FitMode {
        FitMode::Smooth
    }
}

impl FromStr for FitMode {
    type Err = PathError;

    fn from_str(name: &str) -> Result<FitMode, PathError> {
        match name {
            "smooth" => Ok(FitMode::Smooth),
            "corners" => Ok(FitMode::Corners),
            _ => Err(PathError::UnknownFitMode),
        }
    }
}
