/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::align::*;
use super::error::*;
use super::fit::*;
use super::fit_mode::*;
use super::options::*;
use super::partial::*;
use super::point_buffer::*;
use super::segments::*;
use super::visitor::*;
use crate::bezier::*;
use crate::style::*;

use log::*;

use std::iter;

///
/// A path made up of a chain of cubic bezier curves, along with the style used to draw it
///
/// A path is built by calling `set_anchor_points()` with the points it should pass through, and can then be
/// resampled with `align_to_segment_count()` or replaced with part of another path with `become_partial()`.
/// These operations always build a new point buffer.
///
/// Paths with several disjoint contours keep the extra contours as subpaths (see `add_subpath()`). Style
/// changes apply to a path and all of its subpaths.
///
#[derive(Clone, PartialEq, Debug)]
pub struct PathGeometry<Point> {
    /// The curves making up the primary contour of this path
    points: PointBuffer<Point>,

    /// How this path is drawn
    style: PathStyle,

    /// True if paths generated from anchor points should be closed
    close_new_points: bool,

    /// True if the renderer should treat this path as closed
    mark_paths_closed: bool,

    /// True if this is a subpath of another path
    is_subpath: bool,

    /// The other contours that belong to this path
    subpaths: Vec<PathGeometry<Point>>,
}

impl<Point: Coordinate> Default for PathGeometry<Point> {
    fn default() -> PathGeometry<Point> {
        PathGeometry::new()
    }
}

impl<Point: Coordinate> Geo for PathGeometry<Point> {
    type Point = Point;
}

impl<Point: Coordinate> PathGeometry<Point> {
    ///
    /// Creates a new, empty, path with the default options
    ///
    pub fn new() -> PathGeometry<Point> {
        PathGeometry::with_options(PathOptions::default())
    }

    ///
    /// Creates a new, empty, path
    ///
    pub fn with_options(options: PathOptions) -> PathGeometry<Point> {
        PathGeometry {
            points: PointBuffer::empty(),
            style: options.style,
            close_new_points: options.close_new_points,
            mark_paths_closed: options.mark_paths_closed,
            is_subpath: options.is_subpath,
            subpaths: vec![],
        }
    }

    ///
    /// Creates a path that's a single point, drawn in black
    ///
    pub fn point(location: Point) -> PathGeometry<Point> {
        let mut point = PathGeometry::with_options(PathOptions {
            style: PathStyle {
                stroke_rgb: Rgb::BLACK,
                ..PathStyle::default()
            },
            ..PathOptions::default()
        });
        point.points = PointBuffer::from_point(location);

        point
    }

    ///
    /// The options that this path was created with (or that a copy of it should be created with)
    ///
    pub fn options(&self) -> PathOptions {
        PathOptions {
            close_new_points: self.close_new_points,
            mark_paths_closed: self.mark_paths_closed,
            is_subpath: self.is_subpath,
            style: self.style,
        }
    }

    ///
    /// The points that make up the primary contour of this path
    ///
    #[inline]
    pub fn points(&self) -> &PointBuffer<Point> {
        &self.points
    }

    #[inline]
    pub fn is_subpath(&self) -> bool {
        self.is_subpath
    }

    #[inline]
    pub fn close_new_points(&self) -> bool {
        self.close_new_points
    }

    ///
    /// Sets whether or not paths generated by `set_anchor_points()` should be closed
    ///
    pub fn set_close_new_points(&mut self, close_new_points: bool) -> &mut Self {
        self.close_new_points = close_new_points;
        self
    }

    #[inline]
    pub fn mark_paths_closed(&self) -> bool {
        self.mark_paths_closed
    }

    ///
    /// Replaces the points in this path
    ///
    pub fn set_points(&mut self, points: Vec<Point>) -> Result<&mut Self, PathError> {
        self.points = PointBuffer::from_points(points)?;
        Ok(self)
    }

    ///
    /// Moves the start of this path to a new point, creating the point if the path is empty
    ///
    pub fn start_at(&mut self, point: Point) -> &mut Self {
        let mut points = self.points.points().to_vec();

        match points.first_mut() {
            Some(first) => *first = point,
            None => points.push(point),
        }

        self.points = PointBuffer::from_points_unchecked(points);
        self
    }

    ///
    /// Adds curves to the end of this path: the control points are a list of (handle, handle, anchor) triples
    ///
    /// The path must already have a start point (see `start_at()`).
    ///
    pub fn add_control_points(&mut self, control_points: &[Point]) -> Result<&mut Self, PathError> {
        if control_points.len() % 3 != 0 || (self.points.is_empty() && !control_points.is_empty()) {
            warn!("Cannot add {} control points to a path with {} points", control_points.len(), self.points.len());
            return Err(PathError::InvalidPointCount(self.points.len() + control_points.len()));
        }

        let mut points = self.points.points().to_vec();
        points.extend_from_slice(control_points);
        self.points = PointBuffer::from_points_unchecked(points);

        Ok(self)
    }

    ///
    /// Replaces the points in this path with curves through the specified anchors
    ///
    pub fn set_anchors_and_handles(
        &mut self,
        anchors: &[Point],
        handles1: &[Point],
        handles2: &[Point],
    ) -> Result<&mut Self, PathError> {
        self.points = PointBuffer::from_anchors_and_handles(anchors, handles1, handles2).map_err(|err| {
            warn!("Could not set anchors and handles: {:?}", err);
            err
        })?;

        Ok(self)
    }

    ///
    /// Replaces the points in this path with straight lines between the specified points
    ///
    /// A list of fewer than two points leaves the path unchanged.
    ///
    pub fn set_points_as_corners(&mut self, points: &[Point]) -> &mut Self {
        if points.len() > 1 {
            self.points = fit_points(points, FitMode::Corners);
        }
        self
    }

    ///
    /// Replaces the points in this path with a smooth curve through the specified points
    ///
    /// A list of fewer than two points leaves the path unchanged.
    ///
    pub fn set_points_smoothly(&mut self, points: &[Point]) -> &mut Self {
        if points.len() > 1 {
            self.points = fit_points(points, FitMode::Smooth);
        }
        self
    }

    ///
    /// Replaces the points in this path with curves through a list of anchor points
    ///
    /// If `close_new_points` is set and the points don't already finish where they start, the path is joined
    /// back up to the first point. An empty list leaves the path unchanged, and a single point replaces the
    /// path with that point.
    ///
    pub fn set_anchor_points(&mut self, anchors: &[Point], mode: FitMode) -> &mut Self {
        let anchors = if self.close_new_points {
            close_points(anchors)
        } else {
            anchors.to_vec()
        };

        if !anchors.is_empty() {
            debug!("Fitting {} anchor points ({:?})", anchors.len(), mode);
            self.points = fit_points(&anchors, mode);
        }

        self
    }

    ///
    /// Regenerates this path from its anchor points using a different fitting mode (the existing handles are discarded)
    ///
    pub fn change_mode(&mut self, mode: FitMode) -> &mut Self {
        let anchors = self.points.anchors().collect::<Vec<_>>();
        self.set_anchor_points(&anchors, mode)
    }

    ///
    /// Changes this path so it passes smoothly through its anchor points
    ///
    pub fn make_smooth(&mut self) -> &mut Self {
        self.change_mode(FitMode::Smooth)
    }

    ///
    /// Changes this path so it's made of straight lines between its anchor points
    ///
    pub fn make_jagged(&mut self) -> &mut Self {
        self.change_mode(FitMode::Corners)
    }

    ///
    /// Adds a separate contour to this path
    ///
    /// The points are stored as they are, so they must make up a valid point buffer. The new subpath has the
    /// same style as this path.
    ///
    pub fn add_subpath(&mut self, points: Vec<Point>) -> Result<&mut Self, PathError> {
        let mut subpath = PathGeometry::with_options(self.options().subpath());
        subpath.points = PointBuffer::from_points(points)?;

        self.subpaths.push(subpath);
        Ok(self)
    }

    ///
    /// The subpaths owned by this path
    ///
    #[inline]
    pub fn subpaths(&self) -> &[PathGeometry<Point>] {
        &self.subpaths
    }

    ///
    /// Iterates over this path and all of the subpaths it owns (depth first, starting with this path)
    ///
    pub fn family(&self) -> impl '_ + Iterator<Item = &PathGeometry<Point>> {
        let mut remaining = vec![self];

        iter::from_fn(move || {
            let next = remaining.pop()?;
            remaining.extend(next.subpaths.iter().rev());

            Some(next)
        })
    }

    ///
    /// Applies a visitor to this path and all of the subpaths it owns
    ///
    pub fn visit_family<Visitor: PathVisitor<Point>>(&mut self, visitor: &mut Visitor) {
        visitor.visit_path(self);

        for subpath in self.subpaths.iter_mut() {
            subpath.visit_family(visitor);
        }
    }

    ///
    /// The number of anchor points in this path
    ///
    #[inline]
    pub fn num_anchors(&self) -> usize {
        self.points.num_anchors()
    }

    ///
    /// The number of curves in this path
    ///
    #[inline]
    pub fn num_segments(&self) -> usize {
        self.points.num_segments()
    }

    ///
    /// The `n`th curve in this path
    ///
    #[inline]
    pub fn nth_segment(&self, n: usize) -> Option<Curve<Point>> {
        self.points.nth_segment(n)
    }

    ///
    /// Iterates over the curves in this path
    ///
    #[inline]
    pub fn segments(&self) -> SegmentIterator<'_, Point> {
        self.points.segments()
    }

    ///
    /// Returns the anchor points, first handles and second handles of this path
    ///
    #[inline]
    pub fn anchors_and_handles(&self) -> (Vec<Point>, Vec<Point>, Vec<Point>) {
        self.points.anchors_and_handles()
    }

    ///
    /// True if this path finishes where it starts
    ///
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.points.is_closed()
    }

    ///
    /// Returns the point at a proportion (from 0 to 1) of the way along this path
    ///
    #[inline]
    pub fn sample_at_proportion(&self, t: f64) -> Result<Point, PathError> {
        self.points.sample_at_proportion(t)
    }

    ///
    /// Resamples this path so that it has exactly `target_segments` curves without changing its shape
    ///
    pub fn align_to_segment_count(&mut self, target_segments: usize) -> Result<&mut Self, PathError> {
        self.points = align_to_segment_count(&self.points, target_segments)?;
        Ok(self)
    }

    ///
    /// Resamples whichever of this path or another path has fewer curves so that both have the same number
    ///
    pub fn align_with(&mut self, other: &mut PathGeometry<Point>) -> Result<(), PathError> {
        let our_segments = self.num_segments();
        let their_segments = other.num_segments();

        if our_segments < their_segments || (our_segments == their_segments && self.points.len() < other.points.len()) {
            self.align_to_segment_count(their_segments)?;
        } else {
            other.align_to_segment_count(our_segments)?;
        }

        Ok(())
    }

    ///
    /// Replaces the points in this path with the part of another path between two proportions of its length
    ///
    pub fn become_partial(&mut self, source: &PathGeometry<Point>, start: f64, end: f64) -> Result<&mut Self, PathError> {
        self.points = extract_partial(&source.points, start, end)?;
        Ok(self)
    }

    ///
    /// Sets this path to a blend of two other paths with the same number of points (and blends their styles too)
    ///
    pub fn interpolate(&mut self, from: &PathGeometry<Point>, to: &PathGeometry<Point>, alpha: f64) -> Result<&mut Self, PathError> {
        let points = interpolate_points(from.points.points(), to.points.points(), alpha).ok_or(PathError::MismatchedLengths {
            from: from.points.len(),
            to: to.points.len(),
        })?;

        self.points = PointBuffer::from_points_unchecked(points);
        self.interpolate_style(&from.style, &to.style, alpha);

        Ok(self)
    }

    ///
    /// The style of this path
    ///
    #[inline]
    pub fn style(&self) -> &PathStyle {
        &self.style
    }

    ///
    /// Updates the style of this path only (use `update_style()` to update the subpaths as well)
    ///
    #[inline]
    pub fn style_mut(&mut self) -> &mut PathStyle {
        &mut self.style
    }

    ///
    /// Applies a style update to this path and all of its subpaths
    ///
    pub fn update_style(&mut self, mut update: StyleUpdate) -> &mut Self {
        self.visit_family(&mut update);
        self
    }

    ///
    /// Sets the fill opacity (and the fill colour, if one is specified) of this path and its subpaths
    ///
    pub fn set_fill(&mut self, color: Option<Color>, opacity: f64) -> &mut Self {
        self.update_style(StyleUpdate::new().fill(color, opacity))
    }

    ///
    /// Sets the stroke colour and width of this path and its subpaths (leaving out anything that's `None`)
    ///
    pub fn set_stroke(&mut self, color: Option<Color>, width: Option<f64>) -> &mut Self {
        self.update_style(StyleUpdate::new().stroke(color, width))
    }

    ///
    /// Sets the fill and stroke colour of this path and its subpaths
    ///
    pub fn highlight(&mut self, color: Color) -> &mut Self {
        self.update_style(StyleUpdate::new().color(color))
    }

    ///
    /// Sets the style of this path to a blend of two other styles
    ///
    pub fn interpolate_style(&mut self, from: &PathStyle, to: &PathStyle, alpha: f64) -> &mut Self {
        self.style = PathStyle::interpolate(from, to, alpha);
        self
    }

    #[inline]
    pub fn fill_color(&self) -> Color {
        rgb_to_color(self.style.fill_rgb)
    }

    #[inline]
    pub fn fill_opacity(&self) -> f64 {
        self.style.fill_opacity
    }

    #[inline]
    pub fn stroke_color(&self) -> Color {
        rgb_to_color(self.style.stroke_rgb)
    }

    #[inline]
    pub fn stroke_width(&self) -> f64 {
        self.style.stroke_width
    }

    ///
    /// The center of the bounding box of this path and its subpaths
    ///
    pub fn center(&self) -> Option<Point> {
        self.bounding_box().map(|bounds| bounds.center())
    }

    ///
    /// Creates a single-point path at the center of this one (or at the origin if this path has no points)
    ///
    pub fn to_point_path(&self) -> PathGeometry<Point> {
        PathGeometry::point(self.center().unwrap_or_else(Point::origin))
    }
}

impl<Point: Coordinate> HasBoundingBox for PathGeometry<Point> {
    fn bounding_box(&self) -> Option<Bounds<Point>> {
        Bounds::bounds_for_points(self.family().flat_map(|path| path.points.points().iter().copied()))
    }
}
