//! Profile sampling and orientation.

use lathe_math::Point2;

use crate::profile::Profile;

/// Traversal sense of a profile closed along the rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Zero enclosed area, e.g. a profile lying on the axis.
    Degenerate,
}

/// Sample a profile uniformly at `segments + 1` parameters from `t = 0` to `t = 1`.
pub fn sample_profile(profile: &dyn Profile, segments: usize) -> Vec<Point2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| profile.point_at(i as f64 / segments as f64))
        .collect()
}

/// Signed area of the polygon through `points`, implicitly closed from the last
/// point back to the first. Positive for counter-clockwise traversal.
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice_area: f64 = (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum();
    twice_area * 0.5
}

/// Determine the winding of `profile` from `samples` uniform samples.
///
/// Where a counter-clockwise profile lies right of the axis, revolving it
/// about Y yields outward normals from `cross(∂S/∂r, ∂S/∂t)`. Clockwise
/// traversal and points left of the axis each reverse that.
pub fn profile_winding(profile: &dyn Profile, samples: usize) -> Winding {
    let area = signed_area(&sample_profile(profile, samples));
    if area.abs() < 1e-12 {
        Winding::Degenerate
    } else if area > 0.0 {
        Winding::CounterClockwise
    } else {
        Winding::Clockwise
    }
}
