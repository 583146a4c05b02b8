/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bounds::*;
use super::geo::*;

///
/// Trait implemented by types that have a bounding box associated with them
///
pub trait HasBoundingBox: Geo {
    ///
    /// Returns the bounding box that encloses this item, or `None` if it has no points at all
    ///
    fn bounding_box(&self) -> Option<Bounds<Self::Point>>;
}
