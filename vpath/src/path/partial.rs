/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;
use super::point_buffer::*;
use crate::bezier::*;

use log::*;

///
/// Creates a new point buffer containing the part of a path between two proportions of its length
///
/// `start` and `end` are proportions as for `sample_at_proportion()`: each curve covers an equal share of the
/// range 0..1. The curves that are entirely inside the range are copied unchanged, and the curves at either end
/// are cut down to the part that's inside the range. If the whole range lies within a single curve, the result
/// is the section of that curve between the two positions.
///
/// Empty buffers and single points are returned unchanged.
///
pub fn extract_partial<Point: Coordinate>(
    source: &PointBuffer<Point>,
    start: f64,
    end: f64,
) -> Result<PointBuffer<Point>, PathError> {
    if !(start <= end) {
        warn!("Invalid range for a partial path: {}..{}", start, end);
        return Err(PathError::InvalidRange { start, end });
    }

    if start <= 0.0 && end >= 1.0 {
        return Ok(source.clone());
    }

    let chain = match source.shape() {
        PathShape::Empty | PathShape::Point(_) => return Ok(source.clone()),
        PathShape::Chain(chain) => chain,
    };

    let start = start.max(0.0).min(1.0);
    let end = end.max(0.0).min(1.0);

    let num_curves = chain.num_segments();
    let (lower_index, start_t) = segment_position(num_curves, start);
    let (mut upper_index, mut end_t) = segment_position(num_curves, end);

    // A range ending exactly on an anchor point finishes at the end of the previous curve
    if end_t <= 0.0 && upper_index > lower_index {
        upper_index -= 1;
        end_t = 1.0;
    }

    trace!(
        "Partial path {}..{}: curves {}..={} ({}..{})",
        start,
        end,
        lower_index,
        upper_index,
        start_t,
        end_t
    );

    let points = chain.points();
    let mut result = points[(lower_index * 3)..(upper_index * 3 + 4)].to_vec();
    let last = result.len() - 4;

    if lower_index == upper_index {
        let (p0, p1, p2, p3) = split_cubic(result[0], result[1], result[2], result[3], start_t, end_t);
        result.copy_from_slice(&[p0, p1, p2, p3]);
    } else {
        let (p0, p1, p2, p3) = split_cubic(result[0], result[1], result[2], result[3], start_t, 1.0);
        result[0..4].copy_from_slice(&[p0, p1, p2, p3]);

        let (p0, p1, p2, p3) = split_cubic(result[last], result[last + 1], result[last + 2], result[last + 3], 0.0, end_t);
        result[last..].copy_from_slice(&[p0, p1, p2, p3]);
    }

    Ok(PointBuffer::from_points_unchecked(result))
}
