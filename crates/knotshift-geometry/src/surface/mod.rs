//! Access to host B-spline surfaces.
//!
//! Surface geometry lives in the host CAD kernel. This crate only reads it
//! through [`SplineSurface`] and writes control points back.

mod info;

use knotshift_core::Result;
use knotshift_math::Point3;
use serde::{Deserialize, Serialize};

pub use info::SurfaceInfo;

/// Parametric direction of a tensor-product surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    U,
    V,
}

/// A tensor-product B-spline surface owned by the host kernel.
pub trait SplineSurface: Send + Sync {
    /// Polynomial degree in `dir`.
    fn degree(&self, dir: Direction) -> usize;

    /// Parameter domain `(min, max)` in `dir`.
    fn domain(&self, dir: Direction) -> (f64, f64);

    /// Knots in `dir` as the kernel reports them, without the outermost
    /// duplicate at each end (`point_count + degree - 1` values).
    fn reported_knots(&self, dir: Direction) -> Vec<f64>;

    /// Number of control points in `dir`.
    fn point_count(&self, dir: Direction) -> usize;

    /// Control point at row `i` (u-direction) and column `j` (v-direction).
    fn control_point(&self, i: usize, j: usize) -> Option<Point3>;

    /// Parameters `(u, v)` of the surface point closest to `point`.
    fn closest_parameters(&self, point: Point3) -> Option<(f64, f64)>;

    /// Surface point at `(u, v)`.
    fn evaluate(&self, u: f64, v: f64) -> Option<Point3>;

    /// Move the control point at `(i, j)` to `location`.
    fn set_control_point(&mut self, i: usize, j: usize, location: Point3) -> Result<()>;
}
