//! Generate ribbon meshes from Bézier tracks.
//!
//! This crate turns a [`BezierTrack`](track_types::BezierTrack) into a
//! road-like ribbon mesh: two parallel "rails" are sampled at a fixed
//! density along the curve, offset symmetrically from it by half the
//! configured width, then stitched into a seam-free quadrilateral strip.
//!
//! The pipeline has three stages:
//!
//! 1. **Curve evaluation** - position and tangent per sample
//!    (`track-types`)
//! 2. **Rail sampling** - left/right offset pairs per sample
//!    ([`sample_rails`])
//! 3. **Triangulation** - index buffer for the strip
//!    ([`triangulate_strip`])
//!
//! [`ribbon_from_track`] runs all three and returns a [`RibbonMesh`] whose
//! vertex and index buffers are ready to hand to a renderer or mesh
//! resource builder.
//!
//! # Quick Start
//!
//! ```
//! use mesh_from_track::{ribbon_from_track, RibbonConfig};
//! use track_types::BezierTrack;
//!
//! let track = BezierTrack::default();
//!
//! let config = RibbonConfig::default()
//!     .with_width(1.0)
//!     .with_segments(4);
//!
//! let mesh = ribbon_from_track(&track, &config).unwrap();
//! // One segment, 4 samples each, resolution 1: 5 rail pairs, 10 vertices.
//! assert_eq!(mesh.vertices.len(), 10);
//! assert_eq!(mesh.triangle_count(), 8);
//! ```
//!
//! # Determinism
//!
//! The pipeline is pure computation: no I/O, no shared state. Running it
//! twice with identical inputs yields element-wise identical buffers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

mod error;
mod rail;
mod ribbon;

pub use error::{RibbonError, RibbonResult};
pub use rail::{sample_rails, NormalFallback, RailPair, RailSweep};
pub use ribbon::{ribbon_from_track, triangulate_strip, RibbonConfig, RibbonMesh};
