//! knotshift geometry: B-spline basis evaluation and control point shifting.

pub mod nurbs;
pub mod shift;
pub mod surface;

pub use nurbs::{basis_function_value, tensor_basis_value};
pub use shift::{apply_shift, plan_shift, shift_control_point, ShiftOptions, ShiftPlan};
pub use surface::{Direction, SplineSurface, SurfaceInfo};
