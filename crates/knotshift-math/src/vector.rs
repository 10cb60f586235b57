//! Point and vector helpers used when relating control points to surface points.

use crate::{Point3, Vector3};

/// Vector pointing from `from` to `to`.
pub fn vector_between(from: Point3, to: Point3) -> Vector3 {
    to - from
}

/// Euclidean distance between two points.
pub fn distance(a: Point3, b: Point3) -> f64 {
    (b - a).length()
}

/// Unit vector in the direction of `v`, or `None` when `v` is shorter than `min_length`
/// or not finite.
pub fn unitize(v: Vector3, min_length: f64) -> Option<Vector3> {
    let len = v.length();
    if !len.is_finite() || len <= min_length {
        None
    } else {
        Some(v / len)
    }
}
