pub mod error;
pub mod tolerance;
pub mod validate;

pub use error::{PlotError, Result};
pub use tolerance::Tolerance;
pub use validate::Validate;
