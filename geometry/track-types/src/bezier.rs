//! Bézier segment types.
//!
//! Quadratic and cubic Bézier segments in Bernstein form.

use crate::Curve;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A quadratic Bézier curve defined by 3 control points.
///
/// The curve passes through the first and last control points, while the
/// middle control point "pulls" the curve toward it.
///
/// # Equation
///
/// ```text
/// B(t) = (1-t)²P₀ + 2(1-t)tP₁ + t²P₂
/// ```
///
/// # Example
///
/// ```
/// use track_types::{QuadraticBezier, Curve};
/// use nalgebra::Point3;
///
/// let curve = QuadraticBezier::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 2.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
/// );
///
/// let mid = curve.point_at(0.5);
/// // Midpoint is pulled toward control point
/// assert!(mid.y > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadraticBezier {
    /// Start point.
    pub p0: Point3<f64>,
    /// Control point.
    pub p1: Point3<f64>,
    /// End point.
    pub p2: Point3<f64>,
}

impl QuadraticBezier {
    /// Create a new quadratic Bézier curve.
    #[must_use]
    pub const fn new(p0: Point3<f64>, p1: Point3<f64>, p2: Point3<f64>) -> Self {
        Self { p0, p1, p2 }
    }

    /// Get the control points as an array.
    #[must_use]
    pub fn control_points(&self) -> [Point3<f64>; 3] {
        [self.p0, self.p1, self.p2]
    }
}

impl Curve for QuadraticBezier {
    fn point_at(&self, t: f64) -> Point3<f64> {
        let s = 1.0 - t;

        Point3::from(
            self.p0.coords * (s * s) + self.p1.coords * (2.0 * s * t) + self.p2.coords * (t * t),
        )
    }

    fn tangent_at(&self, t: f64) -> Vector3<f64> {
        let d = self.derivative_at(t);
        let norm = d.norm();
        if norm > 1e-10 {
            d / norm
        } else {
            let d2 = self.second_derivative_at(t);
            if d2.norm() > 1e-10 {
                d2.normalize()
            } else {
                Vector3::z()
            }
        }
    }

    fn derivative_at(&self, t: f64) -> Vector3<f64> {
        let s = 1.0 - t;

        // B'(t) = 2(1-t)(P₁-P₀) + 2t(P₂-P₁)
        (self.p1 - self.p0) * (2.0 * s) + (self.p2 - self.p1) * (2.0 * t)
    }

    fn second_derivative_at(&self, _t: f64) -> Vector3<f64> {
        // B''(t) = 2(P₂ - 2P₁ + P₀) (constant)
        (self.p2.coords - self.p1.coords * 2.0 + self.p0.coords) * 2.0
    }
}

/// A cubic Bézier curve defined by 4 control points.
///
/// The curve passes through P₀ and P₃, and is tangent to P₀P₁ at the
/// start and P₂P₃ at the end.
///
/// # Equation
///
/// ```text
/// B(t) = (1-t)³P₀ + 3(1-t)²tP₁ + 3(1-t)t²P₂ + t³P₃
/// ```
///
/// # Example
///
/// ```
/// use track_types::{CubicBezier, Curve};
/// use nalgebra::Point3;
///
/// let curve = CubicBezier::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 2.0, 0.0),
///     Point3::new(3.0, 2.0, 0.0),
///     Point3::new(4.0, 0.0, 0.0),
/// );
///
/// // The curve starts and ends at P0 and P3
/// let start = curve.point_at(0.0);
/// assert!((start.x - 0.0).abs() < 1e-10);
///
/// let end = curve.point_at(1.0);
/// assert!((end.x - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubicBezier {
    /// Start point.
    pub p0: Point3<f64>,
    /// First control point (affects start tangent).
    pub p1: Point3<f64>,
    /// Second control point (affects end tangent).
    pub p2: Point3<f64>,
    /// End point.
    pub p3: Point3<f64>,
}

impl CubicBezier {
    /// Create a new cubic Bézier curve.
    #[must_use]
    pub const fn new(p0: Point3<f64>, p1: Point3<f64>, p2: Point3<f64>, p3: Point3<f64>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Get the control points as an array.
    #[must_use]
    pub fn control_points(&self) -> [Point3<f64>; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }
}

impl Curve for CubicBezier {
    fn point_at(&self, t: f64) -> Point3<f64> {
        let s = 1.0 - t;
        let s2 = s * s;
        let t2 = t * t;

        Point3::from(
            self.p0.coords * (s2 * s)
                + self.p1.coords * (3.0 * s2 * t)
                + self.p2.coords * (3.0 * s * t2)
                + self.p3.coords * (t2 * t),
        )
    }

    fn tangent_at(&self, t: f64) -> Vector3<f64> {
        let d = self.derivative_at(t);
        let norm = d.norm();
        if norm > 1e-10 {
            d / norm
        } else {
            // Degenerate case: try second derivative
            let d2 = self.second_derivative_at(t);
            if d2.norm() > 1e-10 {
                d2.normalize()
            } else {
                Vector3::z()
            }
        }
    }

    fn derivative_at(&self, t: f64) -> Vector3<f64> {
        let s = 1.0 - t;

        // B'(t) = 3(1-t)²(P₁-P₀) + 6(1-t)t(P₂-P₁) + 3t²(P₃-P₂)
        (self.p1 - self.p0) * (3.0 * s * s)
            + (self.p2 - self.p1) * (6.0 * s * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    fn second_derivative_at(&self, t: f64) -> Vector3<f64> {
        let s = 1.0 - t;

        // B''(t) = 6(1-t)(P₂ - 2P₁ + P₀) + 6t(P₃ - 2P₂ + P₁)
        let a = self.p2.coords - self.p1.coords * 2.0 + self.p0.coords;
        let b = self.p3.coords - self.p2.coords * 2.0 + self.p1.coords;

        a * (6.0 * s) + b * (6.0 * t)
    }
}
