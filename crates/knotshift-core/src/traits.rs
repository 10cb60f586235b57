use crate::error::Result;

/// Validate structural integrity of an input before it is used in a computation.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
