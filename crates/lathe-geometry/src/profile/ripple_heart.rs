//! Heart-shaped closed profile with a fine 68-fold ripple.

use std::f64::consts::PI;

use lathe_math::Point2;
use serde::{Deserialize, Serialize};

use super::{remap_angle, Profile};

/// `(16 sin³θ, 13cosθ − 4cos2θ − 2cos3θ − cos68θ) / 10` for `θ ∈ [-PI, PI]`.
///
/// The curve is traversed clockwise, so normals estimated on its surface of
/// revolution point inward (see [`crate::profile_winding`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RippleHeart;

impl RippleHeart {
    const RIPPLE: f64 = 68.0;
    const SCALE: f64 = 0.1;

    pub fn new() -> Self {
        Self
    }
}

impl Profile for RippleHeart {
    fn point_at(&self, t: f64) -> Point2 {
        let theta = remap_angle(t, PI);
        let x = 16.0 * theta.sin().powi(3);
        let y = 13.0 * theta.cos()
            - 4.0 * (2.0 * theta).cos()
            - 2.0 * (3.0 * theta).cos()
            - (Self::RIPPLE * theta).cos();
        Point2::new(x, y) * Self::SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_heart_top_and_bottom() {
        let heart = RippleHeart::new();
        // θ = 0: (0, (13 - 4 - 2 - 1) / 10)
        assert!((heart.point_at(0.5) - Point2::new(0.0, 0.6)).length() < 1e-12);
        // θ = ±PI: (0, (-13 - 4 + 2 - 1) / 10)
        assert!((heart.point_at(0.0) - Point2::new(0.0, -1.6)).length() < 1e-10);
        assert!((heart.point_at(1.0) - Point2::new(0.0, -1.6)).length() < 1e-10);
    }

    #[test]
    fn test_ripple_heart_lobes_are_mirrored() {
        let heart = RippleHeart::new();
        for i in 1..8 {
            let t = i as f64 / 16.0;
            let left = heart.point_at(t);
            let right = heart.point_at(1.0 - t);
            assert!((left.x + right.x).abs() < 1e-10);
            assert!((left.y - right.y).abs() < 1e-10);
        }
    }
}
