use crate::error::Result;

/// Validate structural integrity of a parameter set or generated artifact.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
