//! Knot vector utilities for B-spline basis evaluation.

use knotshift_core::{KnotshiftError, Result};

/// Check that `knots` can carry basis functions of `degree`.
///
/// The vector needs at least `degree + 2` finite, non-decreasing values.
pub fn validate_knots(degree: usize, knots: &[f64]) -> Result<()> {
    if knots.len() < degree + 2 {
        return Err(KnotshiftError::DegenerateKnotVector(format!(
            "{} knots supplied, degree {} needs at least {}",
            knots.len(),
            degree,
            degree + 2
        )));
    }
    if let Some(pos) = knots.iter().position(|k| !k.is_finite()) {
        return Err(KnotshiftError::DegenerateKnotVector(format!(
            "knot {} is not finite ({})",
            pos, knots[pos]
        )));
    }
    if let Some(pos) = knots.windows(2).position(|w| w[1] < w[0]) {
        return Err(KnotshiftError::DegenerateKnotVector(format!(
            "knots decrease at index {}: {} > {}",
            pos + 1,
            knots[pos],
            knots[pos + 1]
        )));
    }
    Ok(())
}

/// Number of basis functions `n = m - p` defined over `knots`, where `m + 1`
/// is the knot count. Zero when there are too few knots.
pub fn basis_count(degree: usize, knots: &[f64]) -> usize {
    knots.len().saturating_sub(degree + 1)
}

/// Expand a knot list as reported by CAD kernels into a clamped knot vector.
///
/// Kernels such as openNURBS report `points + degree - 1` knots, leaving out
/// the outermost knot at each end. The basis recurrence needs the full
/// `points + degree + 1` values, so the first and last knot are duplicated once.
pub fn clamped_from_reported(reported: &[f64]) -> Vec<f64> {
    let (first, last) = match (reported.first(), reported.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Vec::new(),
    };
    let mut knots = Vec::with_capacity(reported.len() + 2);
    knots.push(first);
    knots.extend_from_slice(reported);
    knots.push(last);
    knots
}

/// Whether the first and last `degree + 1` knots each coincide.
pub fn is_clamped(degree: usize, knots: &[f64]) -> bool {
    if knots.len() < 2 * (degree + 1) {
        return false;
    }
    let head = &knots[..=degree];
    let tail = &knots[knots.len() - degree - 1..];
    head.iter().all(|&k| k == head[0]) && tail.iter().all(|&k| k == tail[0])
}

/// Valid parameter domain `(knots[p], knots[m - p])`.
///
/// # Panics
/// If `knots` holds fewer than `2 * degree + 1` values.
pub fn domain(degree: usize, knots: &[f64]) -> (f64, f64) {
    (knots[degree], knots[knots.len() - degree - 1])
}
