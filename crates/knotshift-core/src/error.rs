use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum KnotshiftError {
    #[error("Invalid basis index {index}: expected 0 <= index < {count}")]
    InvalidIndex { index: usize, count: usize },

    #[error("Degenerate knot vector: {0}")]
    DegenerateKnotVector(String),

    #[error("Basis value {value} is at or below {threshold}; control point shift would be unbounded")]
    NearZeroBasis { value: f64, threshold: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, KnotshiftError>;
