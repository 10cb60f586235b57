use approx::assert_abs_diff_eq;
use knotshift_core::KnotshiftError;
use knotshift_geometry::nurbs::{basis_count, basis_function_value, domain};
use rayon::prelude::*;

fn sample(lo: f64, hi: f64, steps: usize) -> Vec<f64> {
    (0..=steps)
        .map(|s| lo + (hi - lo) * s as f64 / steps as f64)
        .collect()
}

fn all_values(degree: usize, knots: &[f64], t: f64) -> Vec<f64> {
    (0..basis_count(degree, knots))
        .map(|i| basis_function_value(degree, knots, i, t).unwrap())
        .collect()
}

fn clamped_vectors() -> Vec<(usize, Vec<f64>)> {
    vec![
        (1, vec![0.0, 0.0, 1.0, 2.0, 2.0]),
        (2, vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0]),
        (3, vec![0.0, 0.0, 0.0, 0.0, 0.2, 0.5, 0.5, 0.9, 1.0, 1.0, 1.0, 1.0]),
        (5, vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
        (7, vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
    ]
}

#[test]
fn test_partition_of_unity_clamped() {
    for (degree, knots) in clamped_vectors() {
        let (lo, hi) = domain(degree, &knots);
        for t in sample(lo, hi, 40) {
            let sum: f64 = all_values(degree, &knots, t).iter().sum();
            assert!(
                (sum - 1.0).abs() < 1e-12,
                "Partition of unity failed for degree {} at t={}: sum={}",
                degree,
                t,
                sum
            );
        }
    }
}

#[test]
fn test_partition_of_unity_unclamped_interior() {
    let knots: Vec<f64> = (0..8).map(|k| k as f64).collect();
    let degree = 2;
    // Only [knots[p], knots[m - p]) is covered by a full set of functions.
    for t in sample(2.0, 4.99, 30) {
        let sum: f64 = all_values(degree, &knots, t).iter().sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_non_negative_and_bounded() {
    for (degree, knots) in clamped_vectors() {
        for t in sample(knots[0], knots[knots.len() - 1], 57) {
            for (i, value) in all_values(degree, &knots, t).into_iter().enumerate() {
                assert!(
                    (0.0..=1.0 + 1e-12).contains(&value),
                    "N_{},{}({}) = {} out of range",
                    i,
                    degree,
                    t,
                    value
                );
            }
        }
    }
}

#[test]
fn test_compact_support() {
    let degree = 3;
    let knots = vec![0.0, 0.0, 0.0, 0.0, 0.2, 0.5, 0.5, 0.9, 1.0, 1.0, 1.0, 1.0];
    for i in 0..basis_count(degree, &knots) {
        let (start, end) = (knots[i], knots[i + degree + 1]);
        for t in sample(-0.5, 1.5, 80) {
            if t < start || t >= end {
                let value = basis_function_value(degree, &knots, i, t).unwrap();
                let at_clamped_end = (i == 0 && t == knots[0])
                    || (i == basis_count(degree, &knots) - 1 && t == knots[knots.len() - 1]);
                if !at_clamped_end {
                    assert_eq!(value, 0.0, "N_{},{}({}) outside support", i, degree, t);
                }
            }
        }
    }
}

#[test]
fn test_endpoint_values() {
    for (degree, knots) in clamped_vectors() {
        let n = basis_count(degree, &knots);
        let last = knots[knots.len() - 1];
        assert_eq!(basis_function_value(degree, &knots, 0, knots[0]).unwrap(), 1.0);
        assert_eq!(basis_function_value(degree, &knots, n - 1, last).unwrap(), 1.0);
    }
}

#[test]
fn test_one_past_last_index_fails() {
    for (degree, knots) in clamped_vectors() {
        let n = basis_count(degree, &knots);
        let err = basis_function_value(degree, &knots, n, 0.5).unwrap_err();
        assert_eq!(err, KnotshiftError::InvalidIndex { index: n, count: n });
    }
}

#[test]
fn test_degenerate_knot_vectors_fail() {
    let too_short = basis_function_value(3, &[0.0, 0.0, 1.0, 1.0], 0, 0.5).unwrap_err();
    assert!(matches!(too_short, KnotshiftError::DegenerateKnotVector(_)));

    let decreasing = basis_function_value(1, &[0.0, 0.0, 1.0, 0.5, 2.0, 2.0], 1, 0.5).unwrap_err();
    assert!(matches!(decreasing, KnotshiftError::DegenerateKnotVector(_)));
}

#[test]
fn test_interior_knot_of_full_multiplicity() {
    // Quadratic with a C^-1 break at 1.0
    let degree = 2;
    let knots = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0];
    assert_eq!(basis_count(degree, &knots), 6);

    for t in [0.0, 0.5, 0.999, 1.0, 1.001, 1.5, 2.0] {
        let values = all_values(degree, &knots, t);
        let sum: f64 = values.iter().sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
        assert!(values.iter().all(|v| v.is_finite() && *v >= 0.0));
    }

    let at_break = all_values(degree, &knots, 1.0);
    assert_eq!(at_break, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    let left = all_values(degree, &knots, 0.5);
    assert_abs_diff_eq!(left[0], 0.25, epsilon = 1e-15);
    assert_abs_diff_eq!(left[1], 0.5, epsilon = 1e-15);
    assert_abs_diff_eq!(left[2], 0.25, epsilon = 1e-15);
}

#[test]
fn test_concurrent_evaluation_matches_sequential() {
    let degree = 3;
    let knots = vec![0.0, 0.0, 0.0, 0.0, 0.2, 0.5, 0.5, 0.9, 1.0, 1.0, 1.0, 1.0];
    let params = sample(0.0, 1.0, 500);

    let sequential: Vec<f64> = params
        .iter()
        .map(|&t| basis_function_value(degree, &knots, 4, t).unwrap())
        .collect();
    let parallel: Vec<f64> = params
        .par_iter()
        .map(|&t| basis_function_value(degree, &knots, 4, t).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
}
