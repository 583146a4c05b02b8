/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// A path whose first and last points are closer than this is considered to be closed
pub const CLOSED_PATH_DISTANCE: f64 = 0.01;

/// Stroke width assigned to new paths
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;
