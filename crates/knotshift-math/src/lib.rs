pub mod vector;

pub use glam::{dvec3, DVec3};
pub use vector::{distance, unitize, vector_between};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
