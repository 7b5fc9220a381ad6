use crate::error::{LatheError, Result};
use crate::traits::Validate;

/// Parametric step used for finite-difference derivative estimates.
///
/// Surfaces are evaluated as black boxes, so tangents are approximated by
/// sampling at `x ± epsilon` in parameter space.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DifferenceStep {
    pub epsilon: f64,
}

impl DifferenceStep {
    /// Smallest representable relative step for `f64`.
    pub const MACHINE: f64 = f64::EPSILON;

    pub fn new(epsilon: f64) -> Result<Self> {
        let step = Self { epsilon };
        step.validate()?;
        Ok(step)
    }

    pub fn machine() -> Self {
        Self {
            epsilon: Self::MACHINE,
        }
    }

    /// A step large enough for stable tangent directions on smooth surfaces.
    pub fn coarse() -> Self {
        Self { epsilon: 1e-6 }
    }

    /// The same step scaled by `factor`.
    pub fn widened(self, factor: f64) -> Self {
        Self {
            epsilon: self.epsilon * factor,
        }
    }
}

impl Validate for DifferenceStep {
    fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(LatheError::invalid_parameter(
                "epsilon",
                format!("must be finite and positive, got {}", self.epsilon),
            ));
        }
        Ok(())
    }
}

impl Default for DifferenceStep {
    fn default() -> Self {
        Self::machine()
    }
}
