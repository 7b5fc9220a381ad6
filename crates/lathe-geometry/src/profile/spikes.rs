//! Spiky lobed profile: a half circle perturbed by a secondary harmonic.

use std::f64::consts::FRAC_PI_2;

use lathe_core::{LatheError, Result};
use lathe_math::Point2;

use super::{remap_angle, Profile};

/// `radius/2 · (cosθ + sin(aθ)/a, sinθ + cos(aθ)/a)` for `θ ∈ [-PI/2, PI/2]`.
///
/// The harmonic frequency `a` controls the spike count and must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spikes {
    radius: f64,
    frequency: i32,
}

impl Spikes {
    pub fn new(radius: f64, frequency: i32) -> Result<Self> {
        if frequency == 0 {
            return Err(LatheError::invalid_parameter(
                "frequency",
                "spike frequency must be non-zero",
            ));
        }
        Ok(Self { radius, frequency })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn frequency(&self) -> i32 {
        self.frequency
    }
}

impl Profile for Spikes {
    fn point_at(&self, t: f64) -> Point2 {
        let theta = remap_angle(t, FRAC_PI_2);
        let a = f64::from(self.frequency);
        let harmonic = a * theta;
        Point2::new(
            theta.cos() + harmonic.sin() / a,
            theta.sin() + harmonic.cos() / a,
        ) * (self.radius / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spikes_midpoint() {
        let spikes = Spikes::new(2.0, 4).unwrap();
        // θ = 0: (1 + 0, 0 + 1/4) scaled by radius / 2 = 1
        let p = spikes.point_at(0.5);
        assert!((p - Point2::new(1.0, 0.25)).length() < 1e-12, "got {:?}", p);
    }

    #[test]
    fn test_spikes_rejects_zero_frequency() {
        let err = Spikes::new(1.0, 0).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_spikes_negative_frequency_is_valid() {
        let spikes = Spikes::new(1.0, -3).unwrap();
        let p = spikes.point_at(0.5);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!((p - Point2::new(0.5, -1.0 / 6.0)).length() < 1e-12);
    }

    #[test]
    fn test_spikes_endpoints_on_axis() {
        // With an even frequency the harmonic vanishes at ±PI/2 in x
        let spikes = Spikes::new(0.3, 12).unwrap();
        assert!(spikes.point_at(0.0).x.abs() < 1e-12);
        assert!(spikes.point_at(1.0).x.abs() < 1e-12);
    }
}
