/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_vpath::*;

fn straight_buffer(num_points: usize) -> PointBuffer<Coord2> {
    PointBuffer::from_points((0..num_points).map(|x| Coord2(x as f64, 0.0)).collect()).unwrap()
}

#[test]
fn rejects_invalid_lengths() {
    for len in [2, 3, 5, 6, 8].iter() {
        assert!(PointBuffer::from_points(vec![Coord2(0.0, 0.0); *len]) == Err(PathError::InvalidPointCount(*len)));
    }
}

#[test]
fn accepts_valid_lengths() {
    for len in [0, 1, 4, 7, 10].iter() {
        let buffer = PointBuffer::from_points(vec![Coord2(0.0, 0.0); *len]).unwrap();
        assert!(buffer.len() == *len);
    }
}

#[test]
fn count_anchors_and_segments() {
    assert!(PointBuffer::<Coord2>::empty().num_anchors() == 0);
    assert!(PointBuffer::<Coord2>::empty().num_segments() == 0);
    assert!(PointBuffer::from_point(Coord2(1.0, 1.0)).num_anchors() == 1);
    assert!(PointBuffer::from_point(Coord2(1.0, 1.0)).num_segments() == 0);
    assert!(straight_buffer(7).num_anchors() == 3);
    assert!(straight_buffer(7).num_segments() == 2);
}

#[test]
fn classify_shapes() {
    assert!(matches!(PointBuffer::<Coord2>::empty().shape(), PathShape::Empty));
    assert!(matches!(PointBuffer::from_point(Coord2(1.0, 2.0)).shape(), PathShape::Point(Coord2(x, y)) if x == 1.0 && y == 2.0));
    assert!(matches!(straight_buffer(4).shape(), PathShape::Chain(chain) if chain.len() == 4));
}

#[test]
fn read_nth_segment() {
    let buffer = straight_buffer(7);
    let segment = buffer.nth_segment(1).unwrap();

    assert!(segment.start_point() == Coord2(3.0, 0.0));
    assert!(segment.control_points() == (Coord2(4.0, 0.0), Coord2(5.0, 0.0)));
    assert!(segment.end_point() == Coord2(6.0, 0.0));
    assert!(buffer.nth_segment(2).is_none());
}

#[test]
fn segments_can_be_iterated_twice() {
    let buffer = straight_buffer(10);
    let segments = buffer.segments();

    assert!(segments.len() == 3);

    let first_pass = segments.clone().collect::<Vec<_>>();
    let second_pass = buffer.segments().collect::<Vec<_>>();

    assert!(first_pass.len() == 3);
    assert!(first_pass == second_pass);
    assert!(first_pass[2] == buffer.nth_segment(2).unwrap());
}

#[test]
fn split_anchors_and_handles() {
    let (anchors, handles1, handles2) = straight_buffer(7).anchors_and_handles();

    assert!(anchors == vec![Coord2(0.0, 0.0), Coord2(3.0, 0.0), Coord2(6.0, 0.0)]);
    assert!(handles1 == vec![Coord2(1.0, 0.0), Coord2(4.0, 0.0)]);
    assert!(handles2 == vec![Coord2(2.0, 0.0), Coord2(5.0, 0.0)]);
}

#[test]
fn interleave_anchors_and_handles() {
    let anchors = vec![Coord2(0.0, 0.0), Coord2(3.0, 0.0), Coord2(6.0, 0.0)];
    let handles1 = vec![Coord2(1.0, 0.0), Coord2(4.0, 0.0)];
    let handles2 = vec![Coord2(2.0, 0.0), Coord2(5.0, 0.0)];

    let buffer = PointBuffer::from_anchors_and_handles(&anchors, &handles1, &handles2).unwrap();

    assert!(buffer == straight_buffer(7));
}

#[test]
fn mismatched_handles_are_rejected() {
    let anchors = vec![Coord2(0.0, 0.0), Coord2(3.0, 0.0), Coord2(6.0, 0.0)];
    let handles1 = vec![Coord2(1.0, 0.0), Coord2(4.0, 0.0)];
    let handles2 = vec![Coord2(2.0, 0.0)];

    assert!(
        PointBuffer::from_anchors_and_handles(&anchors, &handles1, &handles2)
            == Err(PathError::MismatchedHandles {
                anchors: 3,
                handles1: 2,
                handles2: 1
            })
    );
}

#[test]
fn sample_ends_of_path() {
    let buffer = straight_buffer(7);

    assert!(buffer.sample_at_proportion(0.0) == Ok(Coord2(0.0, 0.0)));
    assert!(buffer.sample_at_proportion(1.0) == Ok(Coord2(6.0, 0.0)));
}

#[test]
fn sample_segment_boundary() {
    let buffer = straight_buffer(7);
    let mid_point = buffer.sample_at_proportion(0.5).unwrap();

    assert!(mid_point.distance_to(&Coord2(3.0, 0.0)) < 1e-9);
}

#[test]
fn cannot_sample_without_segments() {
    assert!(PointBuffer::<Coord2>::empty().sample_at_proportion(0.5) == Err(PathError::NoSegments));
    assert!(PointBuffer::from_point(Coord2(1.0, 1.0)).sample_at_proportion(0.5) == Err(PathError::NoSegments));
}

#[test]
fn closed_buffer() {
    let open = straight_buffer(4);
    let closed = PointBuffer::from_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0), Coord2(0.0, 0.0)]).unwrap();

    assert!(!open.is_closed());
    assert!(closed.is_closed());
    assert!(!PointBuffer::<Coord2>::empty().is_closed());
}
