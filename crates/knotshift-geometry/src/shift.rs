//! Control point shifting by a desired surface displacement.
//!
//! Moving control point `P_ij` by `d` moves the surface point at `(u, v)` by
//! `N_i(u) * N_j(v) * d`. To shift the surface point closest to `P_ij` by a
//! given distance the control point has to travel that distance divided by the
//! tensor-product basis value.

use knotshift_core::traits::Validate;
use knotshift_core::{KnotshiftError, Result, Tolerance};
use knotshift_math::{distance, unitize, vector_between, Point3, Vector3};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::nurbs::{clamped_from_reported, tensor_basis_value};
use crate::surface::{Direction, SplineSurface, SurfaceInfo};

/// Options for [`plan_shift`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftOptions {
    /// Desired displacement of the surface point, along the direction from the
    /// control point towards the surface.
    pub distance: f64,
    /// Tolerance for matching the selected location against the control net.
    #[serde(default = "Tolerance::point_match")]
    pub point_match: Tolerance,
    /// Basis values at or below this are rejected.
    #[serde(default = "ShiftOptions::default_min_basis_value")]
    pub min_basis_value: f64,
}

impl ShiftOptions {
    pub const DEFAULT_MIN_BASIS_VALUE: f64 = 1e-6;

    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            point_match: Tolerance::point_match(),
            min_basis_value: Self::DEFAULT_MIN_BASIS_VALUE,
        }
    }

    fn default_min_basis_value() -> f64 {
        Self::DEFAULT_MIN_BASIS_VALUE
    }
}

impl Validate for ShiftOptions {
    fn validate(&self) -> Result<()> {
        if !self.distance.is_finite() || self.distance == 0.0 {
            return Err(KnotshiftError::InvalidInput(format!(
                "shift distance must be finite and non-zero, got {}",
                self.distance
            )));
        }
        if !self.min_basis_value.is_finite() || self.min_basis_value < 0.0 {
            return Err(KnotshiftError::InvalidInput(format!(
                "minimum basis value must be finite and non-negative, got {}",
                self.min_basis_value
            )));
        }
        if self.point_match.linear.is_nan() || self.point_match.linear <= 0.0 {
            return Err(KnotshiftError::InvalidInput(format!(
                "point match tolerance must be positive, got {}",
                self.point_match.linear
            )));
        }
        Ok(())
    }
}

/// A computed control point move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftPlan {
    /// `(i, j)` index of the control point in the net.
    pub index: (usize, usize),
    /// Parameters of the surface point closest to the control point.
    pub parameters: (f64, f64),
    pub surface_point: Point3,
    /// Unit vector from the control point towards `surface_point`.
    pub direction: Vector3,
    /// `N_i(u) * N_j(v)` at `parameters`.
    pub basis_value: f64,
    pub translation: Vector3,
    pub new_location: Point3,
}

/// Compute how far the control point at `selected` must move so that the
/// closest surface point moves by `options.distance`.
///
/// # Errors
/// * `InvalidInput` for unusable options
/// * `NotFound` when the surface has no closest point or `selected` is not a
///   control point
/// * `Geometry` when the surface cannot be evaluated or the control point lies
///   on the surface
/// * `NearZeroBasis` when the control point barely influences that surface point
/// * basis evaluation errors for malformed knot vectors
pub fn plan_shift<S: SplineSurface + ?Sized>(
    surface: &S,
    selected: Point3,
    options: &ShiftOptions,
) -> Result<ShiftPlan> {
    options.validate()?;
    let info = SurfaceInfo::from_surface(surface);

    let (u, v) = surface.closest_parameters(selected).ok_or_else(|| {
        KnotshiftError::NotFound(format!("no closest surface point for {selected}"))
    })?;
    let surface_point = surface.evaluate(u, v).ok_or_else(|| {
        KnotshiftError::Geometry(format!("surface evaluation failed at ({u}, {v})"))
    })?;
    debug!("closest surface point {surface_point} at ({u}, {v})");

    let direction = unitize(
        vector_between(selected, surface_point),
        options.point_match.linear,
    )
    .ok_or_else(|| {
        KnotshiftError::Geometry(format!(
            "could not build shift vector: {selected} lies on the surface"
        ))
    })?;

    let index = find_control_point(surface, &info, selected, options.point_match)?;

    let knots_u = clamped_from_reported(&surface.reported_knots(Direction::U));
    let knots_v = clamped_from_reported(&surface.reported_knots(Direction::V));
    let basis_value = tensor_basis_value(
        info.degree(Direction::U),
        &knots_u,
        index.0,
        info.degree(Direction::V),
        &knots_v,
        index.1,
        u,
        v,
    )?;
    debug!("N_{},{}({u}, {v}) = {basis_value:.6}", index.0, index.1);

    if basis_value.is_nan() || basis_value <= options.min_basis_value {
        warn!(
            "rejecting shift of control point {:?}: basis value {basis_value} too small",
            index
        );
        return Err(KnotshiftError::NearZeroBasis {
            value: basis_value,
            threshold: options.min_basis_value,
        });
    }

    let translation = direction * (options.distance / basis_value);
    Ok(ShiftPlan {
        index,
        parameters: (u, v),
        surface_point,
        direction,
        basis_value,
        translation,
        new_location: selected + translation,
    })
}

/// Write a planned move back to the surface.
pub fn apply_shift<S: SplineSurface + ?Sized>(surface: &mut S, plan: &ShiftPlan) -> Result<()> {
    debug!(
        "moving control point {:?} by {} to {}",
        plan.index, plan.translation, plan.new_location
    );
    surface.set_control_point(plan.index.0, plan.index.1, plan.new_location)
}

/// Plan and apply a shift in one step.
pub fn shift_control_point<S: SplineSurface + ?Sized>(
    surface: &mut S,
    selected: Point3,
    options: &ShiftOptions,
) -> Result<ShiftPlan> {
    let plan = plan_shift(surface, selected, options)?;
    apply_shift(surface, &plan)?;
    Ok(plan)
}

/// Index of the first control point within `tol` of `location`, scanning
/// rows (u) in the outer loop.
pub fn find_control_point<S: SplineSurface + ?Sized>(
    surface: &S,
    info: &SurfaceInfo,
    location: Point3,
    tol: Tolerance,
) -> Result<(usize, usize)> {
    for i in 0..info.point_count(Direction::U) {
        for j in 0..info.point_count(Direction::V) {
            let Some(cp) = surface.control_point(i, j) else {
                continue;
            };
            if tol.contains(distance(location, cp)) {
                return Ok((i, j));
            }
        }
    }
    Err(KnotshiftError::NotFound(format!(
        "{location} matches none of the {} control points",
        info.total_points()
    )))
}
