use crate::{DMat3, DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Rotate `p` about the Y axis by `angle` radians (right-handed).
///
/// `(x, 0, 0)` maps to `(x cos a, 0, -x sin a)`.
pub fn rotate_y(p: Point3, angle: f64) -> Point3 {
    DMat3::from_rotation_y(angle) * p
}

/// Affine placement transform (translation, rotation, scale) stored column-major.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn from_translation(t: Vector3) -> Self {
        Self::from_mat4(DMat4::from_translation(t))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    /// Transform a surface normal with the inverse-transpose of the linear part.
    ///
    /// Returns the input unchanged when the linear part is singular.
    pub fn transform_normal(&self, n: Vector3) -> Vector3 {
        let linear = DMat3::from_mat4(self.to_mat4());
        if linear.determinant().abs() < 1e-15 {
            return n;
        }
        (linear.inverse().transpose() * n).try_normalize().unwrap_or(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::dvec3;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_rotate_y_quarter_turn() {
        let p = rotate_y(dvec3(1.0, 2.0, 0.0), FRAC_PI_2);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_y_is_periodic() {
        let p = dvec3(0.7, -0.3, 0.0);
        let a = rotate_y(p, 0.4);
        let b = rotate_y(p, 0.4 + 2.0 * PI);
        let c = rotate_y(p, 0.4 - 2.0 * PI);
        assert!((a - b).length() < 1e-12);
        assert!((a - c).length() < 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = Transform::from_translation(dvec3(10.0, 20.0, 30.0));
        let p = dvec3(1.0, 2.0, 3.0);
        assert!((t.transform_point(p) - dvec3(11.0, 22.0, 33.0)).length() < 1e-10);
        // Normals ignore translation
        assert_eq!(t.transform_normal(Vector3::Y), Vector3::Y);
    }

    #[test]
    fn test_normal_under_non_uniform_scale() {
        let t = Transform::from_mat4(DMat4::from_scale(dvec3(4.0, 1.0, 1.0)));
        let n = t.transform_normal(dvec3(1.0, 1.0, 0.0).normalize());
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-12);
        // Stretching along X flattens the surface, so the normal tilts towards Y
        assert!(n.y > n.x);
    }

    #[test]
    fn test_singular_transform_keeps_normal() {
        let t = Transform::from_mat4(DMat4::from_scale(Vector3::ZERO));
        assert_eq!(t.transform_normal(Vector3::X), Vector3::X);
    }
}
