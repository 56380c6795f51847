//! Ribbon mesh generation.
//!
//! Expands sampled rail pairs into a row-major vertex grid and stitches it
//! into a quadrilateral-strip triangle mesh.

use nalgebra::{Point3, Vector3};
use tracing::debug;
use track_types::BezierTrack;

use crate::error::{RibbonError, RibbonResult};
use crate::rail::{sample_rails, NormalFallback};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for ribbon generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RibbonConfig {
    /// Perpendicular separation between the two rails.
    pub width: f64,
    /// Samples per cubic curve segment.
    pub segments: usize,
    /// Cross-ribbon subdivisions between the rails.
    pub resolution: usize,
    /// Up axis about which the tangent is rotated to find the lateral
    /// direction.
    pub up: Vector3<f64>,
    /// Recovery policy for degenerate tangents.
    pub fallback: NormalFallback,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            segments: 10,
            resolution: 1,
            up: Vector3::y(),
            fallback: NormalFallback::default(),
        }
    }
}

impl RibbonConfig {
    /// Set the ribbon width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the number of samples per curve segment.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Set the number of cross-ribbon subdivisions.
    #[must_use]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the up axis.
    #[must_use]
    pub fn with_up(mut self, up: Vector3<f64>) -> Self {
        self.up = up;
        self
    }

    /// Set the degenerate-tangent recovery policy.
    #[must_use]
    pub fn with_fallback(mut self, fallback: NormalFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Validate the configuration.
    ///
    /// A non-positive width is allowed: it produces a degenerate
    /// (zero-width) ribbon, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` or `resolution` is zero, or if
    /// `width` is not finite.
    pub fn validate(&self) -> RibbonResult<()> {
        if self.segments < 1 {
            return Err(RibbonError::TooFewSegments {
                min: 1,
                actual: self.segments,
            });
        }

        if self.resolution < 1 {
            return Err(RibbonError::TooFewSubdivisions {
                min: 1,
                actual: self.resolution,
            });
        }

        if !self.width.is_finite() {
            return Err(RibbonError::InvalidWidth(self.width));
        }

        Ok(())
    }
}

/// A generated ribbon mesh.
///
/// The buffers are ready to hand to a mesh resource builder, which is
/// expected to recompute derived data (bounds, normals, tangents) itself.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RibbonMesh {
    /// Vertex positions, row-major: row = rail pair index, column =
    /// cross-ribbon interpolation step.
    pub vertices: Vec<Point3<f64>>,
    /// Triangle indices into `vertices`, grouped in triples.
    pub indices: Vec<u32>,
    /// Number of samples whose lateral direction was recovered via the
    /// configured fallback.
    pub degenerate_tangents: usize,
}

impl RibbonMesh {
    /// Number of triangles described by the index buffer.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check whether the mesh holds no geometry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }
}

/// Build the triangle index buffer for a quadrilateral-strip ribbon.
///
/// The vertex grid is assumed row-major with `pair_count` rows and
/// `resolution + 1` columns; vertex `(r, c)` has flat index
/// `r * (resolution + 1) + c`. Every quad is split along the diagonal from
/// `(r, c+1)` to `(r+1, c)`:
///
/// ```text
/// (r+1,c) ---- (r+1,c+1)
///    |  \          |
///    |    \   B    |
///    |  A   \      |
///  (r,c) ------ (r,c+1)
/// ```
///
/// This is a pure function of the two counts; it never inspects vertex
/// positions. `pair_count < 2` or `resolution < 1` yields an empty buffer.
///
/// # Example
///
/// ```
/// use mesh_from_track::triangulate_strip;
///
/// assert_eq!(triangulate_strip(2, 1), vec![0, 2, 1, 1, 2, 3]);
/// assert!(triangulate_strip(1, 1).is_empty());
/// ```
#[must_use]
pub fn triangulate_strip(pair_count: usize, resolution: usize) -> Vec<u32> {
    if pair_count < 2 || resolution < 1 {
        return Vec::new();
    }

    let columns = resolution + 1;
    let mut indices = Vec::with_capacity((pair_count - 1) * resolution * 6);

    for row in 0..pair_count - 1 {
        for column in 0..resolution {
            let curr = (row * columns + column) as u32;
            let right = curr + 1;
            let above = ((row + 1) * columns + column) as u32;
            let above_right = above + 1;

            indices.extend_from_slice(&[curr, above, right]);
            indices.extend_from_slice(&[right, above, above_right]);
        }
    }

    indices
}

/// Generate a ribbon mesh along a Bézier track.
///
/// Runs the full pipeline: rail sampling ([`sample_rails`]), cross-ribbon
/// vertex interpolation, and strip triangulation ([`triangulate_strip`]).
/// Each rail pair contributes `resolution + 1` vertices, linearly
/// interpolated left to right.
///
/// A track with fewer than two anchors yields an empty mesh; curves under
/// construction are a normal transient state, not an error.
///
/// # Errors
///
/// Returns an error if the configuration is invalid (see
/// [`RibbonConfig::validate`]). No partial buffers are produced.
///
/// # Example
///
/// ```
/// use mesh_from_track::{ribbon_from_track, RibbonConfig};
/// use track_types::BezierTrack;
///
/// let track = BezierTrack::default();
/// let config = RibbonConfig::default().with_segments(4);
///
/// let mesh = ribbon_from_track(&track, &config).unwrap();
/// assert_eq!(mesh.vertices.len(), 10);
/// assert_eq!(mesh.indices.len(), 24);
/// ```
pub fn ribbon_from_track(track: &BezierTrack, config: &RibbonConfig) -> RibbonResult<RibbonMesh> {
    let sweep = sample_rails(track, config)?;

    let columns = config.resolution + 1;
    let mut vertices = Vec::with_capacity(sweep.pairs.len() * columns);

    for pair in &sweep.pairs {
        for column in 0..columns {
            let t = column as f64 / config.resolution as f64;
            vertices.push(lerp_point(pair.left, pair.right, t));
        }
    }

    let indices = triangulate_strip(sweep.pairs.len(), config.resolution);

    debug!(
        vertices = vertices.len(),
        triangles = indices.len() / 3,
        degenerate_tangents = sweep.degenerate_tangents,
        "generated ribbon mesh"
    );

    Ok(RibbonMesh {
        vertices,
        indices,
        degenerate_tangents: sweep.degenerate_tangents,
    })
}

/// Linear interpolation between two points.
#[inline]
fn lerp_point(a: Point3<f64>, b: Point3<f64>, t: f64) -> Point3<f64> {
    Point3::from(a.coords * (1.0 - t) + b.coords * t)
}
