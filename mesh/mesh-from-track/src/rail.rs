//! Rail sampling along a Bézier track.
//!
//! Walks the track's cubic segments at a fixed sampling density and emits
//! one left/right pair of offset points per sampled parameter value.

use nalgebra::{Point3, Vector3};
use tracing::debug;
use track_types::{BezierTrack, Curve};

use crate::error::RibbonResult;
use crate::ribbon::RibbonConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One left/right pair of rail points for a sampled curve parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RailPair {
    /// Point on the left rail.
    pub left: Point3<f64>,
    /// Point on the right rail.
    pub right: Point3<f64>,
}

impl RailPair {
    /// Distance between the two rail points.
    ///
    /// Equals the configured width wherever the tangent was non-degenerate.
    #[must_use]
    pub fn span(&self) -> f64 {
        (self.right - self.left).norm()
    }
}

/// Recovery policy for samples where the lateral direction is undefined.
///
/// The lateral direction degenerates when the curve derivative vanishes
/// (coincident anchor/control points) or when the tangent is parallel to
/// the configured up axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NormalFallback {
    /// Carry the most recent valid lateral direction forward. Before any
    /// valid lateral exists, an arbitrary direction perpendicular to the up
    /// axis is used.
    #[default]
    CarryPrevious,
    /// Always use the given direction (normalized before use).
    Fixed(Vector3<f64>),
}

/// Ordered rail pairs sampled along a track, with diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RailSweep {
    /// Rail pairs in curve order, one per distinct parameter value. The
    /// shared sample at each segment boundary appears exactly once.
    pub pairs: Vec<RailPair>,
    /// Number of samples whose lateral direction was recovered via the
    /// configured [`NormalFallback`].
    pub degenerate_tangents: usize,
}

impl RailSweep {
    /// Number of rail pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check whether the sweep holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Sample a track into an ordered sequence of rail pairs.
///
/// Each cubic segment is sampled at `t = k/segments` for
/// `k in 0..=segments`. The last sample of one segment and the first sample
/// of the next coincide at the shared anchor and are emitted once, so a
/// track with `n` segments yields `n * segments + 1` pairs.
///
/// Per sample, the lateral direction is the unit rotation of the tangent by
/// 90° about the configured up axis (`up × tangent`, normalized); the pair
/// is offset from the on-curve point by half the configured width along it.
/// Degenerate tangents are recovered per [`NormalFallback`] and counted in
/// [`RailSweep::degenerate_tangents`].
///
/// A track with fewer than two anchors yields an empty sweep.
///
/// # Errors
///
/// Returns an error if the configuration is invalid (see
/// [`RibbonConfig::validate`]).
pub fn sample_rails(track: &BezierTrack, config: &RibbonConfig) -> RibbonResult<RailSweep> {
    config.validate()?;

    let mut sweep = RailSweep::default();
    if track.anchor_count() < 2 {
        return Ok(sweep);
    }

    sweep
        .pairs
        .reserve(track.segment_count() * config.segments + 1);

    let half_width = config.width / 2.0;
    let seed = perpendicular(config.up);
    let fixed = match config.fallback {
        NormalFallback::CarryPrevious => None,
        NormalFallback::Fixed(v) => Some(v.try_normalize(f64::EPSILON).unwrap_or(seed)),
    };

    let mut prev_lateral: Option<Vector3<f64>> = None;

    for (segment_index, segment) in track.segments().enumerate() {
        // Skip the first sample of every segment after the first: it
        // coincides with the previous segment's last sample at the shared
        // anchor.
        let first = usize::from(segment_index > 0);

        for k in first..=config.segments {
            let t = k as f64 / config.segments as f64;
            let point = segment.point_at(t);

            let lateral = match config
                .up
                .cross(&segment.derivative_at(t))
                .try_normalize(f64::EPSILON)
            {
                Some(n) => {
                    prev_lateral = Some(n);
                    n
                }
                None => {
                    sweep.degenerate_tangents += 1;
                    match fixed {
                        Some(v) => v,
                        None => prev_lateral.unwrap_or(seed),
                    }
                }
            };

            let offset = lateral * half_width;
            sweep.pairs.push(RailPair {
                left: point - offset,
                right: point + offset,
            });
        }
    }

    debug!(
        pairs = sweep.pairs.len(),
        degenerate_tangents = sweep.degenerate_tangents,
        "sampled rail pairs"
    );

    Ok(sweep)
}

/// Find a unit vector perpendicular to the given vector.
fn perpendicular(v: Vector3<f64>) -> Vector3<f64> {
    // Choose the axis most perpendicular to v
    let abs_x = v.x.abs();
    let abs_y = v.y.abs();
    let abs_z = v.z.abs();

    let axis = if abs_x <= abs_y && abs_x <= abs_z {
        Vector3::x()
    } else if abs_y <= abs_z {
        Vector3::y()
    } else {
        Vector3::z()
    };

    v.cross(&axis)
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(Vector3::x)
}
