/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::checks::*;

use flo_vpath::bezier::*;
use flo_vpath::line::*;

#[test]
fn handles_are_at_thirds() {
    let line = (Coord2(0.0, 0.0), Coord2(3.0, 6.0));
    let curve = line_to_bezier::<Curve<_>>(&line);
    let (cp1, cp2) = curve.control_points();

    assert_near(cp1, Coord2(1.0, 2.0));
    assert_near(cp2, Coord2(2.0, 4.0));
}

#[test]
fn line_curve_has_constant_speed() {
    let line = (Coord3(0.0, 0.0, 0.0), Coord3(3.0, 6.0, 9.0));
    let curve = line_to_bezier::<Curve<_>>(&line);

    for step in 0..=10 {
        let t = (step as f64) / 10.0;
        assert_near(curve.point_at_pos(t), line.point_at_pos(t));
    }
}
