/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::checks::*;

use flo_vpath::*;

fn unit_square() -> PathGeometry<Coord2> {
    let mut square = PathGeometry::new();
    square.set_anchor_points(
        &[Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0), Coord2(0.0, 1.0)],
        FitMode::Corners,
    );

    square
}

#[test]
fn new_path_has_default_options() {
    let path = PathGeometry::<Coord2>::new();

    assert!(path.points().is_empty());
    assert!(path.close_new_points());
    assert!(!path.mark_paths_closed());
    assert!(!path.is_subpath());
    assert!(path.options() == PathOptions::default());
}

#[test]
fn create_with_options() {
    let options = PathOptions {
        close_new_points: false,
        mark_paths_closed: true,
        ..PathOptions::default()
    };
    let path = PathGeometry::<Coord2>::with_options(options);

    assert!(!path.close_new_points());
    assert!(path.mark_paths_closed());
    assert!(path.options() == options);
}

#[test]
fn point_path() {
    let point = PathGeometry::point(Coord3(1.0, 2.0, 3.0));

    assert!(point.num_anchors() == 1);
    assert!(point.num_segments() == 0);
    assert!(point.stroke_color() == Color::Rgb(0.0, 0.0, 0.0));
}

#[test]
fn interpolate_aligned_paths() {
    let mut square = unit_square();
    let mut wavy = wavy_path();
    square.align_with(&mut wavy).unwrap();

    let mut halfway = PathGeometry::new();
    halfway.interpolate(&square, &wavy, 0.5).unwrap();

    assert!(halfway.points().len() == square.points().len());

    for ((blended, from), to) in halfway.points().points().iter().zip(square.points().points()).zip(wavy.points().points()) {
        assert_near(*blended, (*from + *to) * 0.5);
    }
}

#[test]
fn interpolate_ends_match_sources() {
    let mut square = unit_square();
    let mut wavy = wavy_path();
    square.align_with(&mut wavy).unwrap();

    let mut frame = PathGeometry::new();

    frame.interpolate(&square, &wavy, 0.0).unwrap();
    assert!(frame.points() == square.points());

    frame.interpolate(&square, &wavy, 1.0).unwrap();
    for (blended, to) in frame.points().points().iter().zip(wavy.points().points()) {
        assert_near(*blended, *to);
    }
}

#[test]
fn interpolate_unaligned_paths_is_an_error() {
    let square = unit_square();
    let mut triangle = PathGeometry::new();
    triangle.set_anchor_points(&[Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0)], FitMode::Corners);

    let mut frame = PathGeometry::new();

    assert!(frame.interpolate(&square, &triangle, 0.5) == Err(PathError::MismatchedLengths { from: 13, to: 10 }));
    assert!(frame.interpolate(&square, &PathGeometry::point(Coord2(0.0, 0.0)), 0.5) == Err(PathError::MismatchedLengths { from: 13, to: 1 }));
    assert!(frame.points().is_empty());
}

#[test]
fn interpolate_blends_style() {
    let mut from = unit_square();
    let mut to = unit_square();
    from.set_stroke(Some(Color::Rgb(1.0, 1.0, 1.0)), Some(2.0));
    to.set_stroke(Some(Color::Rgb(0.0, 0.0, 0.0)), Some(6.0));

    let mut frame = PathGeometry::new();
    frame.interpolate(&from, &to, 0.5).unwrap();

    assert!(frame.stroke_width() == 4.0);
    assert!(frame.stroke_color() == Color::Rgb(0.5, 0.5, 0.5));
}

#[test]
fn center_of_square() {
    let square = unit_square();

    assert!(square.center() == Some(Coord2(0.5, 0.5)));
    assert!(PathGeometry::<Coord2>::new().center() == None);
}

#[test]
fn square_to_point() {
    let point = unit_square().to_point_path();

    assert!(point.points().points() == &[Coord2(0.5, 0.5)]);
    assert!(point.stroke_color() == Color::Rgb(0.0, 0.0, 0.0));
}

#[test]
fn segments_of_path() {
    let square = unit_square();
    let segments = square.segments().collect::<Vec<_>>();

    assert!(segments.len() == 4);
    assert!(segments[0].start_point() == Coord2(0.0, 0.0));
    assert!(segments[3].end_point() == Coord2(0.0, 0.0));
    assert!(square.nth_segment(3) == Some(segments[3]));
}
