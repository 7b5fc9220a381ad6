//! Surface trait and implementations.

mod revolution;

use lathe_math::Point3;

pub use revolution::Revolution;

/// A parametric surface `(t, r) -> Point3` evaluated as a black box.
///
/// `t ∈ [0, 1]` runs along the profile and `r` is the rotation fraction.
/// Implementations must accept `t` and `r` slightly outside `[0, 1]`, and
/// `r` is periodic with period 1.
pub trait Surface: Send + Sync {
    /// Evaluate the surface at parameters `(t, r)`.
    fn point_at(&self, t: f64, r: f64) -> Point3;
}

impl<S: Surface + ?Sized> Surface for &S {
    fn point_at(&self, t: f64, r: f64) -> Point3 {
        (**self).point_at(t, r)
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn point_at(&self, t: f64, r: f64) -> Point3 {
        (**self).point_at(t, r)
    }
}

/// Adapts a closure `(t, r) -> Point3` into a [`Surface`].
#[derive(Clone)]
pub struct FnSurface<F>(pub F);

impl<F> Surface for FnSurface<F>
where
    F: Fn(f64, f64) -> Point3 + Send + Sync,
{
    fn point_at(&self, t: f64, r: f64) -> Point3 {
        (self.0)(t, r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_surface() {
        let plane = FnSurface(|t: f64, r: f64| Point3::new(r, t, 0.0));
        assert_eq!(plane.point_at(0.25, 0.5), Point3::new(0.5, 0.25, 0.0));

        let by_ref: &dyn Surface = &plane;
        assert_eq!(by_ref.point_at(1.0, 0.0), Point3::new(0.0, 1.0, 0.0));
    }
}
