pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{KnotshiftError, Result};
pub use tolerance::Tolerance;
