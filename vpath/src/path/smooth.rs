/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! Smooth handles are found by requiring the first and second derivatives of the path to be continuous at
//! every anchor point. With `p1[i]` and `p2[i]` as the handles of curve `i` and `k[i]` as the anchors, that
//! gives `p1[i-1] + 4*p1[i] + p1[i+1] = 4*k[i] + 2*k[i+1]` at every interior anchor and
//! `p2[i] = 2*k[i+1] - p1[i+1]`.
//!
//! Open paths add the 'natural' end conditions (no curvature at the end points), which makes the system
//! tridiagonal. Closed paths apply the continuity conditions at the first anchor as well, which wraps the
//! system around into a cyclic tridiagonal one.
//!

use super::point_buffer::*;
use crate::bezier::*;
use crate::line::*;

///
/// Solves a tridiagonal system where the right-hand side is made up of coordinates
///
/// `below`, `diagonal` and `above` are the three diagonals of the matrix (`below[0]` and `above[n-1]` are not
/// used), and the system is solved with the Thomas algorithm.
///
fn solve_tridiagonal<Point: Coordinate>(below: &[f64], diagonal: &[f64], above: &[f64], rhs: &[Point]) -> Vec<Point> {
    let n = diagonal.len();
    if n == 0 {
        return vec![];
    }

    let mut diagonal = diagonal.to_vec();
    let mut rhs = rhs.to_vec();

    // Forward sweep: eliminate the lower diagonal
    for idx in 1..n {
        let factor = below[idx] / diagonal[idx - 1];
        diagonal[idx] -= factor * above[idx - 1];
        rhs[idx] = rhs[idx] - rhs[idx - 1] * factor;
    }

    // Back substitution
    let mut result = vec![Point::origin(); n];
    result[n - 1] = rhs[n - 1] * (1.0 / diagonal[n - 1]);

    for idx in (0..n - 1).rev() {
        result[idx] = (rhs[idx] - result[idx + 1] * above[idx]) * (1.0 / diagonal[idx]);
    }

    result
}

///
/// Computes the first handles for an open path (anchors[0] != anchors[n])
///
fn open_first_handles<Point: Coordinate>(anchors: &[Point]) -> Vec<Point> {
    let num_curves = anchors.len() - 1;

    let mut below = vec![1.0; num_curves];
    let mut diagonal = vec![4.0; num_curves];
    let above = vec![1.0; num_curves];
    let mut rhs = (0..num_curves)
        .map(|idx| anchors[idx] * 4.0 + anchors[idx + 1] * 2.0)
        .collect::<Vec<_>>();

    // Natural end conditions
    diagonal[0] = 2.0;
    rhs[0] = anchors[0] + anchors[1] * 2.0;

    below[num_curves - 1] = 2.0;
    diagonal[num_curves - 1] = 7.0;
    rhs[num_curves - 1] = anchors[num_curves - 1] * 8.0 + anchors[num_curves];

    solve_tridiagonal(&below, &diagonal, &above, &rhs)
}

///
/// Computes the first handles for a closed path (anchors[0] == anchors[n])
///
fn closed_first_handles<Point: Coordinate>(anchors: &[Point]) -> Vec<Point> {
    let num_curves = anchors.len() - 1;
    let rhs = (0..num_curves)
        .map(|idx| anchors[idx] * 4.0 + anchors[idx + 1] * 2.0)
        .collect::<Vec<_>>();

    if num_curves == 2 {
        // Both off-diagonal entries refer to the same handle: 4*x0 + 2*x1 = r0, 2*x0 + 4*x1 = r1
        return vec![
            (rhs[0] * 4.0 - rhs[1] * 2.0) * (1.0 / 12.0),
            (rhs[1] * 4.0 - rhs[0] * 2.0) * (1.0 / 12.0),
        ];
    }

    // Sherman-Morrison: solve the system with the corner entries folded into the diagonal, then correct it
    let gamma = -4.0;
    let corner_below = 1.0; // Coefficient of x[n-1] in the first equation
    let corner_above = 1.0; // Coefficient of x[0] in the last equation

    let below = vec![1.0; num_curves];
    let above = vec![1.0; num_curves];
    let mut diagonal = vec![4.0; num_curves];
    diagonal[0] -= gamma;
    diagonal[num_curves - 1] -= corner_below * corner_above / gamma;

    let solution = solve_tridiagonal(&below, &diagonal, &above, &rhs);

    let mut correction_rhs = vec![0.0; num_curves];
    correction_rhs[0] = gamma;
    correction_rhs[num_curves - 1] = corner_above;
    let correction = solve_tridiagonal(&below, &diagonal, &above, &correction_rhs);

    let numerator = solution[0] + solution[num_curves - 1] * (corner_below / gamma);
    let denominator = 1.0 + correction[0] + correction[num_curves - 1] * (corner_below / gamma);
    let factor = numerator * (1.0 / denominator);

    solution
        .into_iter()
        .zip(correction)
        .map(|(value, correction)| value - factor * correction)
        .collect()
}

///
/// Computes handles that join a list of anchor points with a smooth curve
///
/// Returns one fewer of each kind of handle than there are anchor points. If the first and last anchors are
/// the same point, the curve is also smooth where it joins back up with itself.
///
pub fn smooth_handles<Point: Coordinate>(anchors: &[Point]) -> (Vec<Point>, Vec<Point>) {
    let num_curves = anchors.len().saturating_sub(1);
    let closed = num_curves >= 2 && points_are_closed(anchors);

    if num_curves == 0 {
        return (vec![], vec![]);
    } else if num_curves == 1 {
        let (cp1, cp2) = line_handles(&(anchors[0], anchors[1]));
        return (vec![cp1], vec![cp2]);
    }

    let handles1 = if closed {
        closed_first_handles(anchors)
    } else {
        open_first_handles(anchors)
    };

    let handles2 = (0..num_curves)
        .map(|idx| {
            if idx + 1 < num_curves {
                anchors[idx + 1] * 2.0 - handles1[idx + 1]
            } else if closed {
                anchors[idx + 1] * 2.0 - handles1[0]
            } else {
                (anchors[idx + 1] + handles1[idx]) * 0.5
            }
        })
        .collect();

    (handles1, handles2)
}
