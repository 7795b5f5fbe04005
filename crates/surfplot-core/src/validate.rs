use crate::error::Result;

/// Validate the internal consistency of a configuration or geometric entity.
///
/// Implemented by option structs so that contract violations are rejected
/// once at construction time rather than mid-computation.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
