/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_vpath::*;

use std::str::FromStr;

fn path_with_hole() -> PathGeometry<Coord2> {
    let mut path = PathGeometry::new();
    path.set_anchor_points(
        &[Coord2(0.0, 0.0), Coord2(4.0, 0.0), Coord2(4.0, 4.0), Coord2(0.0, 4.0)],
        FitMode::Corners,
    );
    path.add_subpath(vec![Coord2(1.0, 1.0), Coord2(3.0, 1.0), Coord2(3.0, 3.0), Coord2(1.0, 1.0)])
        .unwrap();

    path
}

#[test]
fn add_subpath() {
    let path = path_with_hole();

    assert!(path.subpaths().len() == 1);
    assert!(path.subpaths()[0].is_subpath());
    assert!(path.subpaths()[0].num_segments() == 1);
    assert!(!path.is_subpath());
}

#[test]
fn subpath_must_be_valid_buffer() {
    let mut path = path_with_hole();

    assert!(path.add_subpath(vec![Coord2(1.0, 1.0), Coord2(2.0, 2.0)]).is_err());
    assert!(path.subpaths().len() == 1);
}

#[test]
fn family_includes_parent_first() {
    let path = path_with_hole();
    let family = path.family().collect::<Vec<_>>();

    assert!(family.len() == 2);
    assert!(!family[0].is_subpath());
    assert!(family[1].is_subpath());
}

#[test]
fn visit_every_path_in_family() {
    let mut path = path_with_hole();
    path.add_subpath(vec![Coord2(2.0, 2.0)]).unwrap();

    let mut num_visited = 0;
    path.visit_family(&mut VisitWith(|_path: &mut PathGeometry<Coord2>| num_visited += 1));

    assert!(num_visited == 3);
}

#[test]
fn fill_applies_to_subpaths() {
    let mut path = path_with_hole();
    path.set_fill(Some(Color::Rgb(1.0, 0.0, 0.0)), 0.5);

    for member in path.family() {
        assert!(member.fill_color() == Color::Rgb(1.0, 0.0, 0.0));
        assert!(member.fill_opacity() == 0.5);
    }
}

#[test]
fn fill_opacity_without_colour() {
    let mut path = path_with_hole();
    path.set_fill(None, 0.75);

    for member in path.family() {
        assert!(member.fill_color() == Color::Rgb(0.0, 0.0, 0.0));
        assert!(member.fill_opacity() == 0.75);
    }
}

#[test]
fn stroke_width_without_colour() {
    let mut path = path_with_hole();
    path.set_stroke(None, Some(2.0));

    for member in path.family() {
        assert!(member.stroke_color() == Color::Rgb(1.0, 1.0, 1.0));
        assert!(member.stroke_width() == 2.0);
    }
}

#[test]
fn highlight_sets_both_colours() {
    let mut path = path_with_hole();
    let red = Color::from_str("red").unwrap();
    path.highlight(red);

    for member in path.family() {
        assert!(member.fill_color() == red);
        assert!(member.stroke_color() == red);
        assert!(member.fill_opacity() == 0.0);
        assert!(member.stroke_width() == 4.0);
    }
}

#[test]
fn style_mut_only_changes_parent() {
    let mut path = path_with_hole();
    path.style_mut().stroke_width = 8.0;

    assert!(path.stroke_width() == 8.0);
    assert!(path.subpaths()[0].stroke_width() == 4.0);
}

#[test]
fn custom_style_update() {
    let mut path = path_with_hole();
    path.update_style(StyleUpdate {
        stroke_width: Some(1.5),
        ..StyleUpdate::new()
    });

    assert!(path.family().all(|member| member.stroke_width() == 1.5));
}

#[test]
fn subpaths_inherit_style() {
    let mut path = PathGeometry::new();
    path.set_stroke(None, Some(3.0));
    path.set_anchor_points(&[Coord2(0.0, 0.0), Coord2(4.0, 0.0)], FitMode::Corners);
    path.add_subpath(vec![Coord2(1.0, 1.0)]).unwrap();

    assert!(path.subpaths()[0].stroke_width() == 3.0);
}
