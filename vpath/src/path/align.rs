/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;
use super::point_buffer::*;
use crate::bezier::*;

use log::*;
use smallvec::*;

///
/// Works out how many pieces each curve in a path should be divided into to make `target_len` curves in total
///
/// Output curve `j` comes from source curve `floor(j * num_curves / target_len)`, so every source curve
/// receives at least one output curve as long as `target_len >= num_curves`.
///
pub fn bucket_counts(num_curves: usize, target_len: usize) -> SmallVec<[usize; 16]> {
    let mut counts = smallvec![0; num_curves];

    if num_curves == 0 {
        return counts;
    }

    for slot in 0..target_len {
        counts[slot * num_curves / target_len] += 1;
    }

    counts
}

///
/// Creates a new point buffer that traces the same shape as an existing one using exactly `target_segments` curves
///
/// The target must be at least the number of curves already in the buffer. Each curve is divided into equal
/// sections (in terms of its `t` value) to make up the difference. A buffer that's empty or a single point
/// becomes `target_segments` curves that all collapse to that point (or to the origin for an empty buffer).
///
pub fn align_to_segment_count<Point: Coordinate>(
    buffer: &PointBuffer<Point>,
    target_segments: usize,
) -> Result<PointBuffer<Point>, PathError> {
    match buffer.shape() {
        PathShape::Empty => Ok(PointBuffer::repeated(Point::origin(), target_segments)),
        PathShape::Point(point) => Ok(PointBuffer::repeated(point, target_segments)),

        PathShape::Chain(chain) => {
            let num_curves = chain.num_segments();

            if target_segments < num_curves {
                warn!(
                    "Cannot align a path with {} curves to {} curves",
                    num_curves, target_segments
                );
                return Err(PathError::TargetTooSmall {
                    segments: num_curves,
                    target: target_segments,
                });
            }

            let counts = bucket_counts(num_curves, target_segments);
            trace!("Aligning {} curves to {}: {:?}", num_curves, target_segments, counts);

            let mut points = Vec::with_capacity(target_segments * 3 + 1);
            points.push(chain.points()[0]);

            for (curve, count) in chain.segments().zip(counts) {
                let (w1, w2, w3, w4) = curve.all_points();
                let step = 1.0 / (count as f64);

                for section in 0..count {
                    let t_min = (section as f64) * step;
                    let t_max = if section + 1 == count {
                        1.0
                    } else {
                        ((section + 1) as f64) * step
                    };

                    let (_, cp1, cp2, end_point) = split_cubic(w1, w2, w3, w4, t_min, t_max);
                    points.push(cp1);
                    points.push(cp2);
                    points.push(end_point);
                }
            }

            test_assert!(points.len() == target_segments * 3 + 1);

            Ok(PointBuffer::from_points_unchecked(points))
        }
    }
}
