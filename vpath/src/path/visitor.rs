/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::geometry::*;
use crate::geo::*;
use crate::style::*;

///
/// Trait implemented by operations that can be applied to every path in a family (a path and its subpaths)
///
pub trait PathVisitor<Point: Coordinate> {
    ///
    /// Applies this operation to a single path
    ///
    fn visit_path(&mut self, path: &mut PathGeometry<Point>);
}

impl<Point: Coordinate> PathVisitor<Point> for StyleUpdate {
    fn visit_path(&mut self, path: &mut PathGeometry<Point>) {
        self.apply(path.style_mut());
    }
}

///
/// Visitor that calls a function for every path it visits
///
pub struct VisitWith<TFn>(pub TFn);

impl<Point: Coordinate, TFn: FnMut(&mut PathGeometry<Point>)> PathVisitor<Point> for VisitWith<TFn> {
    fn visit_path(&mut self, path: &mut PathGeometry<Point>) {
        (self.0)(path)
    }
}
