//! Profile curves: 2D parametric curves revolved into surfaces.

mod circle;
mod half_circle;
mod kind;
mod ripple_heart;
mod spikes;

use std::sync::Arc;

use lathe_math::Point2;

pub use circle::Circle;
pub use half_circle::HalfCircle;
pub use kind::ProfileKind;
pub use ripple_heart::RippleHeart;
pub use spikes::Spikes;

/// A 2D parametric curve over the normalized domain `t ∈ [0, 1]`.
///
/// Implementations are pure: the same `t` always yields the same point.
/// Callers may evaluate slightly outside `[0, 1]` for derivative estimates.
pub trait Profile: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;
}

impl<P: Profile + ?Sized> Profile for Box<P> {
    fn point_at(&self, t: f64) -> Point2 {
        (**self).point_at(t)
    }
}

impl<P: Profile + ?Sized> Profile for Arc<P> {
    fn point_at(&self, t: f64) -> Point2 {
        (**self).point_at(t)
    }
}

/// Adapts a closure `t -> Point2` into a [`Profile`].
#[derive(Clone)]
pub struct FnProfile<F>(pub F);

impl<F> Profile for FnProfile<F>
where
    F: Fn(f64) -> Point2 + Send + Sync,
{
    fn point_at(&self, t: f64) -> Point2 {
        (self.0)(t)
    }
}

/// Map `t ∈ [0, 1]` onto the angle range `[-half_range, half_range]`.
pub(crate) fn remap_angle(t: f64, half_range: f64) -> f64 {
    (t - 0.5) * (2.0 * half_range)
}
