/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::style::*;

use serde_derive::{Deserialize, Serialize};

///
/// Settings used when creating a new path
///
/// Missing fields take their default values when deserializing, so a configuration only needs to mention the
/// settings it changes.
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOptions {
    /// When generating a path from anchor points, join the last point back to the first
    pub close_new_points: bool,

    /// Hint to the renderer that the path should be drawn as a closed shape
    pub mark_paths_closed: bool,

    /// The path is part of a larger path with several contours, and is not drawn on its own
    pub is_subpath: bool,

    /// The initial style of the path
    pub style: PathStyle,
}

impl Default for PathOptions {
    fn default() -> PathOptions {
        PathOptions {
            close_new_points: true,
            mark_paths_closed: false,
            is_subpath: false,
            style: PathStyle::default(),
        }
    }
}

impl PathOptions {
    ///
    /// Options for a subpath of a path that was created with these options
    ///
    pub fn subpath(&self) -> PathOptions {
        PathOptions {
            is_subpath: true,
            ..*self
        }
    }
}
