//! Surface of revolution about the Y axis.

use std::f64::consts::TAU;

use lathe_core::Result;
use lathe_math::{rotate_y, Point2, Point3};

use super::Surface;
use crate::profile::{Circle, HalfCircle, Profile, RippleHeart, Spikes};

/// Revolves a 2D [`Profile`] about the Y axis.
///
/// The profile point `(x, y)` is embedded as `(x, y, 0)` and rotated by `2πr`:
///
/// `S(t, r) = rotate_y((P(t).x, P(t).y, 0), 2πr)`
#[derive(Debug, Clone)]
pub struct Revolution<P> {
    profile: P,
}

impl<P: Profile> Revolution<P> {
    pub fn new(profile: P) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }
}

impl Revolution<HalfCircle> {
    /// A sphere of `radius` centred at the origin.
    pub fn sphere(radius: f64) -> Self {
        Self::new(HalfCircle::new(radius))
    }
}

impl Revolution<Circle> {
    /// A torus whose tube cross-section is centred at `tube_center` in the XY plane.
    pub fn torus(tube_center: Point2, tube_radius: f64) -> Self {
        Self::new(Circle::new(tube_center, tube_radius))
    }
}

impl Revolution<Spikes> {
    pub fn spikes(radius: f64, frequency: i32) -> Result<Self> {
        Ok(Self::new(Spikes::new(radius, frequency)?))
    }
}

impl Revolution<RippleHeart> {
    pub fn ripple_heart() -> Self {
        Self::new(RippleHeart::new())
    }
}

impl<P: Profile> Surface for Revolution<P> {
    fn point_at(&self, t: f64, r: f64) -> Point3 {
        let p = self.profile.point_at(t);
        rotate_y(Point3::new(p.x, p.y, 0.0), r * TAU)
    }
}
