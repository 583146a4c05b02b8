/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::checks::*;

use flo_vpath::*;

use std::str::FromStr;

#[test]
fn closed_triangle_from_corners() {
    let mut path = PathGeometry::new();
    path.set_anchor_points(&[Coord3(0.0, 0.0, 0.0), Coord3(1.0, 0.0, 0.0), Coord3(1.0, 1.0, 0.0)], FitMode::Corners);

    assert!(path.num_segments() == 3);
    assert!(path.points().len() == 10);
    assert!(path.points().start_point() == path.points().end_point());
    assert!(path.is_closed());
    assert!(path.num_anchors() == 4);
    assert!(path.sample_at_proportion(0.0) == Ok(Coord3(0.0, 0.0, 0.0)));
}

#[test]
fn single_point_in_any_mode() {
    for mode in [FitMode::Smooth, FitMode::Corners].iter() {
        let mut path = PathGeometry::new();
        path.set_anchor_points(&[Coord3(2.0, 2.0, 0.0)], *mode);

        assert!(path.points().points() == &[Coord3(2.0, 2.0, 0.0)]);

        path.align_to_segment_count(4).unwrap();

        assert!(path.points().len() == 13);
        assert!(path.points().points().iter().all(|point| *point == Coord3(2.0, 2.0, 0.0)));
    }
}

#[test]
fn no_points_leaves_path_unchanged() {
    let mut path = PathGeometry::new();
    path.set_anchor_points(&[Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0)], FitMode::Corners);

    let before = path.clone();
    path.set_anchor_points(&[], FitMode::Smooth);

    assert!(path == before);
}

#[test]
fn corners_round_trip() {
    let anchors = (0..5).map(|x| Coord3(x as f64, 2.0 * (x as f64), 1.0)).collect::<Vec<_>>();

    let mut path = PathGeometry::new();
    path.set_close_new_points(false);
    path.set_anchor_points(&anchors, FitMode::Corners);

    assert!(path.num_segments() == 4);

    for (idx, anchor) in anchors.iter().enumerate() {
        let t = (idx as f64) / 4.0;
        assert_near(path.sample_at_proportion(t).unwrap(), *anchor);
    }
}

#[test]
fn corners_are_straight_lines() {
    let mut path = PathGeometry::new();
    path.set_close_new_points(false);
    path.set_anchor_points(&[Coord2(0.0, 0.0), Coord2(3.0, 0.0), Coord2(3.0, 3.0)], FitMode::Corners);

    let (_, handles1, handles2) = path.anchors_and_handles();

    assert_near(handles1[0], Coord2(1.0, 0.0));
    assert_near(handles2[0], Coord2(2.0, 0.0));
    assert_near(handles1[1], Coord2(3.0, 1.0));
    assert_near(handles2[1], Coord2(3.0, 2.0));
}

#[test]
fn already_closed_points_are_not_closed_again() {
    let mut path = PathGeometry::new();
    path.set_anchor_points(
        &[Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0), Coord2(0.0, 0.0)],
        FitMode::Corners,
    );

    assert!(path.num_anchors() == 4);
}

#[test]
fn open_paths_are_not_closed() {
    let mut path = PathGeometry::new();
    path.set_close_new_points(false);
    path.set_anchor_points(&[Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0)], FitMode::Smooth);

    assert!(path.num_anchors() == 3);
    assert!(!path.is_closed());
}

#[test]
fn change_mode_is_idempotent() {
    let mut path = PathGeometry::new();
    path.set_anchor_points(
        &[Coord2(0.0, 0.0), Coord2(2.0, 0.0), Coord2(2.0, 2.0), Coord2(0.0, 2.0)],
        FitMode::Corners,
    );

    let corners = path.clone();

    path.make_smooth();
    let smooth = path.clone();
    path.make_smooth();

    assert!(path == smooth);
    assert!(path.num_anchors() == corners.num_anchors());

    path.make_jagged();
    assert!(path == corners);
}

#[test]
fn change_mode_keeps_anchors() {
    let mut path = PathGeometry::new();
    path.set_anchor_points(
        &[Coord2(0.0, 0.0), Coord2(2.0, 0.0), Coord2(2.0, 2.0), Coord2(0.0, 2.0)],
        FitMode::Corners,
    );

    let (corner_anchors, _, _) = path.anchors_and_handles();
    path.change_mode(FitMode::Smooth);
    let (smooth_anchors, _, _) = path.anchors_and_handles();

    assert!(corner_anchors == smooth_anchors);
}

#[test]
fn set_points_as_corners_ignores_close_flag() {
    let mut path = PathGeometry::new();
    path.set_points_as_corners(&[Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0)]);

    assert!(path.num_segments() == 2);

    path.set_points_smoothly(&[Coord2(5.0, 5.0)]);
    assert!(path.num_segments() == 2);
}

#[test]
fn set_anchors_and_handles() {
    let mut path = PathGeometry::new();
    path.set_anchors_and_handles(
        &[Coord2(0.0, 0.0), Coord2(3.0, 0.0)],
        &[Coord2(1.0, 1.0)],
        &[Coord2(2.0, 1.0)],
    )
    .unwrap();

    assert!(path.points().points() == &[Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 1.0), Coord2(3.0, 0.0)]);
    assert!(path.set_anchors_and_handles(&[Coord2(0.0, 0.0)], &[Coord2(1.0, 1.0)], &[]).is_err());
}

#[test]
fn build_path_from_control_points() {
    let mut path = PathGeometry::new();

    assert!(path.add_control_points(&[Coord2(1.0, 0.0), Coord2(2.0, 0.0), Coord2(3.0, 0.0)]) == Err(PathError::InvalidPointCount(3)));

    path.start_at(Coord2(0.0, 0.0));
    path.add_control_points(&[Coord2(1.0, 0.0), Coord2(2.0, 0.0), Coord2(3.0, 0.0)]).unwrap();

    assert!(path.num_segments() == 1);
    assert!(path.add_control_points(&[Coord2(4.0, 0.0), Coord2(5.0, 0.0)]) == Err(PathError::InvalidPointCount(6)));
    assert!(path.num_segments() == 1);

    path.start_at(Coord2(0.0, 1.0));
    assert!(path.points().start_point() == Some(Coord2(0.0, 1.0)));
    assert!(path.num_segments() == 1);
}

#[test]
fn set_points_checks_length() {
    let mut path = PathGeometry::new();

    assert!(path.set_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0)]).is_err());
    assert!(path.set_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(2.0, 0.0), Coord2(3.0, 0.0)]).is_ok());
    assert!(path.num_segments() == 1);
}

#[test]
fn fit_mode_from_name() {
    assert!(FitMode::from_str("smooth") == Ok(FitMode::Smooth));
    assert!(FitMode::from_str("corners") == Ok(FitMode::Corners));
    assert!(FitMode::from_str("jagged") == Err(PathError::UnknownFitMode));
    assert!(FitMode::default() == FitMode::Smooth);
}
