//! Single B-spline basis function evaluation.

use knotshift_core::{KnotshiftError, Result};

use super::knot::{basis_count, validate_knots};

/// Highest degree whose triangular table lives on the stack; higher degrees
/// allocate a `degree + 1` table on the heap.
pub const INLINE_DEGREE: usize = 32;

/// Evaluate the single basis function `N_{index,degree}(t)` over `knots`.
///
/// This is the triangular table scheme from The NURBS Book (A2.4): only the
/// `degree + 1` lower-degree values feeding the requested function are
/// computed, bottom-up.
///
/// The first basis function is exactly 1 at the left end of the knot vector and
/// the last one exactly 1 at the right end, so clamped curves interpolate their
/// end control points.
///
/// # Arguments
/// * `degree` - Degree of the basis function
/// * `knots` - Non-decreasing knot vector with at least `degree + 2` entries
/// * `index` - Zero-based basis function index, `index < knots.len() - 1 - degree`
/// * `t` - Parameter value
///
/// # Errors
/// `InvalidInput` for a non-finite `t`, `DegenerateKnotVector` for a short,
/// non-finite or decreasing knot vector, `InvalidIndex` for an index past the
/// last basis function.
pub fn basis_function_value(degree: usize, knots: &[f64], index: usize, t: f64) -> Result<f64> {
    if !t.is_finite() {
        return Err(KnotshiftError::InvalidInput(format!(
            "basis parameter is not finite ({t})"
        )));
    }
    validate_knots(degree, knots)?;
    let count = basis_count(degree, knots);
    if index >= count {
        return Err(KnotshiftError::InvalidIndex { index, count });
    }

    let p = degree;
    let i = index;
    let m = knots.len() - 1;

    if (i == 0 && t == knots[0]) || (i == count - 1 && t == knots[m]) {
        return Ok(1.0);
    }
    if t < knots[i] || t >= knots[i + p + 1] {
        return Ok(0.0);
    }

    let mut inline = [0.0_f64; INLINE_DEGREE + 1];
    let mut heap = Vec::new();
    let n: &mut [f64] = if p <= INLINE_DEGREE {
        &mut inline[..=p]
    } else {
        heap.resize(p + 1, 0.0);
        &mut heap
    };

    // Degree zero
    for (j, slot) in n.iter_mut().enumerate() {
        if t >= knots[i + j] && t < knots[i + j + 1] {
            *slot = 1.0;
        }
    }

    for k in 1..=p {
        // A zero lower-degree value short-circuits the division, which also
        // covers zero-length spans at repeated knots.
        let mut saved = if n[0] == 0.0 {
            0.0
        } else {
            ((t - knots[i]) * n[0]) / (knots[i + k] - knots[i])
        };

        for j in 0..=(p - k) {
            let left = knots[i + j + 1];
            let right = knots[i + j + k + 1];
            if n[j + 1] == 0.0 {
                n[j] = saved;
                saved = 0.0;
            } else {
                let temp = n[j + 1] / (right - left);
                n[j] = saved + (right - t) * temp;
                saved = (t - left) * temp;
            }
        }
    }

    Ok(n[0])
}

/// Evaluate the tensor-product basis value `N_i(u) * N_j(v)` of a surface.
#[allow(clippy::too_many_arguments)]
pub fn tensor_basis_value(
    degree_u: usize,
    knots_u: &[f64],
    i: usize,
    degree_v: usize,
    knots_v: &[f64],
    j: usize,
    u: f64,
    v: f64,
) -> Result<f64> {
    let bu = basis_function_value(degree_u, knots_u, i, u)?;
    let bv = basis_function_value(degree_v, knots_v, j, v)?;
    Ok(bu * bv)
}
