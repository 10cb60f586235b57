//! NURBS core algorithms: knot vector utilities and single basis function evaluation.

pub mod basis;
pub mod knot;

pub use basis::{basis_function_value, tensor_basis_value, INLINE_DEGREE};
pub use knot::{basis_count, clamped_from_reported, domain, is_clamped, validate_knots};
