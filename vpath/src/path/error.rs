/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Errors that can occur while building or manipulating a path
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PathError {
    /// There must be exactly one fewer of each kind of handle than there are anchor points
    MismatchedHandles {
        anchors: usize,
        handles1: usize,
        handles2: usize,
    },

    /// A path buffer must contain 3k+1 points (or no points at all), and control points must be added in groups of 3
    InvalidPointCount(usize),

    /// Paths can only be aligned to a number of segments at least as large as their own
    TargetTooSmall { segments: usize, target: usize },

    /// The path has no segments, so there's no curve to sample
    NoSegments,

    /// The range passed to a partial extraction is not a valid range
    InvalidRange { start: f64, end: f64 },

    /// Point-wise interpolation needs two buffers of the same length
    MismatchedLengths { from: usize, to: usize },

    /// A fitting mode name was not recognised
    UnknownFitMode,
}
