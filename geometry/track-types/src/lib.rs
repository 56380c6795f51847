//! Piecewise Bézier track model for ribbon and road mesh generation.
//!
//! This crate provides the curve data model consumed by `mesh-from-track`:
//!
//! - [`QuadraticBezier`] - Single quadratic Bézier segment
//! - [`CubicBezier`] - Single cubic Bézier segment
//! - [`BezierTrack`] - Piecewise cubic curve defined by anchor points and
//!   paired control points
//!
//! # Core Trait
//!
//! Both segment types implement the [`Curve`] trait, which provides position,
//! unit tangent, and derivative evaluation at a parameter `t`.
//!
//! Evaluation is polynomial and does **not** clamp `t`: callers are expected
//! to pass `t ∈ [0, 1]`, and out-of-range parameters extrapolate the curve.
//!
//! # Example
//!
//! ```
//! use track_types::{BezierTrack, Curve};
//! use nalgebra::Point3;
//!
//! // Two anchors joined by one cubic segment.
//! let track = BezierTrack::default();
//! assert_eq!(track.segment_count(), 1);
//!
//! let segment = track.segment(0).unwrap();
//! // The segment starts and ends at the anchors.
//! assert_eq!(segment.point_at(0.0), Point3::new(0.0, 0.0, 0.0));
//! assert_eq!(segment.point_at(1.0), Point3::new(0.0, 0.0, 10.0));
//! ```
//!
//! # Coordinate System
//!
//! Right-handed, **Y-up**: X is lateral (left/right), Y is height, Z is
//! forward along the track. The default track runs along `+Z`.
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

mod bezier;
mod error;
mod track;
mod traits;

pub use bezier::{CubicBezier, QuadraticBezier};
pub use error::TrackError;
pub use track::BezierTrack;
pub use traits::Curve;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

/// Result type for track operations.
pub type Result<T> = std::result::Result<T, TrackError>;
