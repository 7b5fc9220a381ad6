//! Finite-difference normal estimation for black-box surfaces.

use lathe_core::DifferenceStep;
use lathe_geometry::{Profile, Surface, Winding};
use lathe_math::{Point3, Vector3};

use crate::grid::GridLayout;

/// Number of times a degenerate estimate is retried with a wider step.
const MAX_WIDENINGS: u32 = 4;

/// Step growth per retry.
const WIDENING_FACTOR: f64 = 1024.0;

/// Tangents along `t` and `r` at `(t, r)`.
///
/// Each tangent averages the forward difference `S(x + ε) - S(x)` and the
/// backward difference `S(x) - S(x - ε)`. Neither is divided by `ε`; only the
/// direction is used downstream.
pub fn central_tangents(
    surface: &dyn Surface,
    t: f64,
    r: f64,
    step: DifferenceStep,
) -> (Vector3, Vector3) {
    let eps = step.epsilon;
    let center = surface.point_at(t, r);

    let tangent_t = average_difference(
        surface.point_at(t - eps, r),
        center,
        surface.point_at(t + eps, r),
    );
    let tangent_r = average_difference(
        surface.point_at(t, r - eps),
        center,
        surface.point_at(t, r + eps),
    );
    (tangent_t, tangent_r)
}

fn average_difference(prev: Point3, center: Point3, next: Point3) -> Vector3 {
    ((next - center) + (center - prev)) / 2.0
}

/// Unit normal `normalize(cross(tangent_r, tangent_t))` at `(t, r)`.
///
/// When the cross product vanishes (a pole, or a step too small to move the
/// surface) the estimate is retried with a wider step; if it stays degenerate
/// the normal falls back to +Y.
pub fn estimate_normal(surface: &dyn Surface, t: f64, r: f64, step: DifferenceStep) -> Vector3 {
    let mut current = step;
    for attempt in 0..=MAX_WIDENINGS {
        let (tangent_t, tangent_r) = central_tangents(surface, t, r, current);
        if let Some(normal) = tangent_r.cross(tangent_t).try_normalize() {
            if attempt > 0 {
                tracing::debug!(
                    t,
                    r,
                    epsilon = current.epsilon,
                    "normal estimate needed a widened difference step"
                );
            }
            return normal;
        }
        current = current.widened(WIDENING_FACTOR);
    }

    tracing::warn!(t, r, "degenerate surface normal, falling back to +Y");
    Vector3::Y
}

/// Flip the normals of a revolved `profile` so they face out of the solid it
/// bounds together with the axis.
///
/// The raw estimate at a vertex points along `sign(x) · n`, where `x` is the
/// profile point's signed distance from the axis and `n` is the outward normal
/// of the profile taken as counter-clockwise. Rows left of the axis and every
/// row of a clockwise profile are flipped; where both hold they cancel. A
/// profile spanning both sides of the axis sweeps each point twice, and both
/// copies end up facing the same way.
pub fn orient_outward(
    normals: &mut [Vector3],
    layout: &GridLayout,
    profile: &dyn Profile,
    winding: Winding,
) {
    let clockwise = match winding {
        Winding::CounterClockwise => false,
        Winding::Clockwise => true,
        Winding::Degenerate => return,
    };
    let flipped_rows: Vec<usize> = (0..layout.vertical())
        .filter(|&v| (profile.point_at(layout.t_at(v)).x < 0.0) != clockwise)
        .collect();

    for r in 0..layout.rotation() as isize {
        for &v in &flipped_rows {
            if let Some(n) = normals.get_mut(layout.index(v, r) as usize) {
                *n = -*n;
            }
        }
    }
}
