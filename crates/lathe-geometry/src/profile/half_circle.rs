//! Half-circle profile.

use std::f64::consts::FRAC_PI_2;

use lathe_math::Point2;
use serde::{Deserialize, Serialize};

use super::{remap_angle, Profile};

/// The right half of a circle centred at the origin, traversed from
/// `(0, -radius)` through `(radius, 0)` to `(0, radius)`.
///
/// Revolving it a full turn about Y sweeps a sphere without duplicating the poles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalfCircle {
    pub radius: f64,
}

impl HalfCircle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Profile for HalfCircle {
    fn point_at(&self, t: f64) -> Point2 {
        let theta = remap_angle(t, FRAC_PI_2);
        Point2::new(theta.cos(), theta.sin()) * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_circle_endpoints() {
        let profile = HalfCircle::new(2.0);
        assert!((profile.point_at(0.0) - Point2::new(0.0, -2.0)).length() < 1e-10);
        assert!((profile.point_at(0.5) - Point2::new(2.0, 0.0)).length() < 1e-10);
        assert!((profile.point_at(1.0) - Point2::new(0.0, 2.0)).length() < 1e-10);
    }

    #[test]
    fn test_half_circle_stays_on_right_half() {
        let profile = HalfCircle::new(1.5);
        for i in 0..=16 {
            let p = profile.point_at(i as f64 / 16.0);
            assert!((p.length() - 1.5).abs() < 1e-10);
            assert!(p.x >= -1e-12, "x went negative: {}", p.x);
        }
    }
}
