//! Core curve traits.

use nalgebra::{Point3, Vector3};

/// A parametric curve segment in 3D space.
///
/// Segments are parameterized over `t ∈ [0, 1]`, where `t=0` is the start
/// and `t=1` is the end. Evaluation is polynomial: out-of-range parameters
/// are not clamped and extrapolate the curve.
pub trait Curve {
    /// Evaluate the curve position at parameter `t`.
    fn point_at(&self, t: f64) -> Point3<f64>;

    /// Compute the unit tangent vector at parameter `t`.
    ///
    /// The tangent points in the direction of increasing `t`. When the first
    /// derivative vanishes (coincident control points), implementations fall
    /// back to the second derivative direction, then to a fixed axis. Callers
    /// that need to detect degeneracy should inspect
    /// [`derivative_at`](Self::derivative_at) instead.
    fn tangent_at(&self, t: f64) -> Vector3<f64>;

    /// Compute the first derivative (velocity) at parameter `t`.
    ///
    /// Unlike [`tangent_at`](Self::tangent_at), this returns the
    /// non-normalized derivative, which encodes both direction and speed.
    fn derivative_at(&self, t: f64) -> Vector3<f64>;

    /// Compute the second derivative (acceleration) at parameter `t`.
    fn second_derivative_at(&self, t: f64) -> Vector3<f64>;
}
