//! Addressing for the ring grid of a surface of revolution.

use lathe_core::{LatheError, Result};

/// Dimensions of a `(vertical, rotation)` sample grid.
///
/// Vertices are stored ring by ring: all `vertical` samples of ring 0, then
/// ring 1, and so on. The rotation axis wraps, so ring `rotation` is ring 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    vertical: usize,
    rotation: usize,
}

impl GridLayout {
    pub fn new(vertical: usize, rotation: usize) -> Result<Self> {
        if vertical < 2 {
            return Err(LatheError::invalid_parameter(
                "vertical_segments",
                format!("must be at least 2, got {vertical}"),
            ));
        }
        if rotation == 0 {
            return Err(LatheError::invalid_parameter(
                "rotation_segments",
                "must be at least 1, got 0",
            ));
        }
        let total = vertical.checked_mul(rotation).filter(|&n| n <= u32::MAX as usize);
        if total.is_none() {
            return Err(LatheError::invalid_parameter(
                "rotation_segments",
                format!("{vertical} x {rotation} vertices overflow a u32 index buffer"),
            ));
        }
        Ok(Self { vertical, rotation })
    }

    pub fn vertical(&self) -> usize {
        self.vertical
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn vertex_count(&self) -> usize {
        self.vertical * self.rotation
    }

    pub fn triangle_count(&self) -> usize {
        2 * (self.vertical - 1) * self.rotation
    }

    /// Flat vertex index of sample `(v, r)`; `r` wraps modulo the ring count.
    pub fn index(&self, v: usize, r: isize) -> u32 {
        debug_assert!(v < self.vertical, "v = {v} out of range");
        let ring = r.rem_euclid(self.rotation as isize) as usize;
        (ring * self.vertical + v) as u32
    }

    /// Profile parameter of row `v`, spanning `[0, 1]` inclusive.
    pub fn t_at(&self, v: usize) -> f64 {
        v as f64 / (self.vertical - 1) as f64
    }

    /// Rotation fraction of ring `r`, spanning `[0, 1)`.
    pub fn r_at(&self, r: usize) -> f64 {
        r as f64 / self.rotation as f64
    }
}
