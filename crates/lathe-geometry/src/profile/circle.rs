//! Full-circle profile, used as the tube cross-section of a torus.

use std::f64::consts::PI;

use lathe_math::Point2;
use serde::{Deserialize, Serialize};

use super::{remap_angle, Profile};

/// A full circle traversed counter-clockwise from angle `-PI` to `PI`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Profile for Circle {
    fn point_at(&self, t: f64) -> Point2 {
        let theta = remap_angle(t, PI);
        self.center + Point2::new(theta.cos(), theta.sin()) * self.radius
    }
}
