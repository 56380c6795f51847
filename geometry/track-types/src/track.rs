//! Piecewise cubic Bézier track.

use crate::bezier::CubicBezier;
use crate::error::TrackError;
use crate::Result;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A piecewise cubic Bézier curve defined by anchors and paired controls.
///
/// The track passes through every anchor point. Consecutive anchors are
/// joined by one cubic segment shaped by the control points paired with
/// them: segment `i` is the cubic
///
/// ```text
/// (anchors[i], controls[i], controls[i+1], anchors[i+1])
/// ```
///
/// # Invariant
///
/// `controls.len() == anchors.len()` at all times. [`BezierTrack::new`]
/// rejects mismatched input and the mutation helpers preserve the pairing.
///
/// A track with fewer than two anchors has no segments. That is a valid
/// state (a curve under construction), not an error; downstream consumers
/// produce empty geometry for it.
///
/// # Example
///
/// ```
/// use track_types::BezierTrack;
/// use nalgebra::Point3;
///
/// let mut track = BezierTrack::default();
/// assert_eq!(track.segment_count(), 1);
///
/// // Append a segment: one anchor, one paired control.
/// track.push_anchor(
///     Point3::new(0.0, 0.0, 20.0),
///     Point3::new(-2.5, 0.0, 12.5),
/// );
/// assert_eq!(track.segment_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BezierTrack {
    anchors: Vec<Point3<f64>>,
    controls: Vec<Point3<f64>>,
}

impl BezierTrack {
    /// Create a track from anchor and control point sequences.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::ControlPointMismatch`] if the sequences have
    /// different lengths.
    pub fn new(anchors: Vec<Point3<f64>>, controls: Vec<Point3<f64>>) -> Result<Self> {
        if anchors.len() != controls.len() {
            return Err(TrackError::ControlPointMismatch {
                anchors: anchors.len(),
                controls: controls.len(),
            });
        }

        Ok(Self { anchors, controls })
    }

    /// Get the anchor points.
    #[must_use]
    pub fn anchors(&self) -> &[Point3<f64>] {
        &self.anchors
    }

    /// Get the control points.
    #[must_use]
    pub fn controls(&self) -> &[Point3<f64>] {
        &self.controls
    }

    /// Get the number of anchor points.
    #[must_use]
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Get the number of cubic segments.
    ///
    /// A track with fewer than two anchors has zero segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.anchors.len().saturating_sub(1)
    }

    /// Get the cubic segment joining `anchors[index]` and `anchors[index+1]`.
    ///
    /// Returns `None` if the index is out of range.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<CubicBezier> {
        if index + 1 >= self.anchors.len() {
            return None;
        }

        Some(CubicBezier::new(
            self.anchors[index],
            self.controls[index],
            self.controls[index + 1],
            self.anchors[index + 1],
        ))
    }

    /// Iterate over the cubic segments in order.
    pub fn segments(&self) -> impl Iterator<Item = CubicBezier> + '_ {
        (0..self.segment_count()).filter_map(|i| self.segment(i))
    }

    /// Append an anchor with its paired control point.
    ///
    /// On a track with at least one existing anchor this adds one segment
    /// from the previous last anchor to `anchor`.
    pub fn push_anchor(&mut self, anchor: Point3<f64>, control: Point3<f64>) {
        self.anchors.push(anchor);
        self.controls.push(control);
    }

    /// Move an anchor point.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::PointIndexOutOfRange`] if `index` is out of
    /// range.
    pub fn set_anchor(&mut self, index: usize, point: Point3<f64>) -> Result<()> {
        let count = self.anchors.len();
        let slot = self
            .anchors
            .get_mut(index)
            .ok_or(TrackError::PointIndexOutOfRange { index, count })?;
        *slot = point;
        Ok(())
    }

    /// Move a control point.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::PointIndexOutOfRange`] if `index` is out of
    /// range.
    pub fn set_control(&mut self, index: usize, point: Point3<f64>) -> Result<()> {
        let count = self.controls.len();
        let slot = self
            .controls
            .get_mut(index)
            .ok_or(TrackError::PointIndexOutOfRange { index, count })?;
        *slot = point;
        Ok(())
    }
}

impl Default for BezierTrack {
    /// A single straight-ish segment running 10 units along `+Z`.
    fn default() -> Self {
        Self {
            anchors: vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 10.0)],
            controls: vec![Point3::new(-2.5, 0.0, 2.5), Point3::new(2.5, 0.0, 7.5)],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Curve;
    use approx::assert_relative_eq;

    #[test]
    fn new_rejects_mismatched_lengths() {
        let result = BezierTrack::new(
            vec![Point3::origin(), Point3::new(0.0, 0.0, 1.0)],
            vec![Point3::origin()],
        );

        assert_eq!(
            result,
            Err(TrackError::ControlPointMismatch {
                anchors: 2,
                controls: 1,
            })
        );
    }

    #[test]
    fn default_track_has_one_segment() {
        let track = BezierTrack::default();
        assert_eq!(track.anchor_count(), 2);
        assert_eq!(track.segment_count(), 1);
        assert!(track.segment(1).is_none());
    }

    #[test]
    fn segments_pass_through_anchors() {
        let track = BezierTrack::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 10.0),
                Point3::new(10.0, 0.0, 10.0),
            ],
            vec![
                Point3::new(-2.5, 0.0, 2.5),
                Point3::new(2.5, 0.0, 7.5),
                Point3::new(7.5, 0.0, 12.5),
            ],
        )
        .unwrap();

        assert_eq!(track.segment_count(), 2);

        for (i, segment) in track.segments().enumerate() {
            assert_relative_eq!(
                segment.point_at(0.0).coords,
                track.anchors()[i].coords,
                epsilon = 1e-10
            );
            assert_relative_eq!(
                segment.point_at(1.0).coords,
                track.anchors()[i + 1].coords,
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn consecutive_segments_share_boundary_anchor() {
        let track = BezierTrack::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 2.0, 3.0),
                Point3::new(4.0, 0.0, 6.0),
            ],
            vec![
                Point3::new(0.5, 0.0, 1.0),
                Point3::new(1.5, 2.0, 4.0),
                Point3::new(3.0, 1.0, 5.0),
            ],
        )
        .unwrap();

        let first = track.segment(0).unwrap();
        let second = track.segment(1).unwrap();
        assert_relative_eq!(
            first.point_at(1.0).coords,
            second.point_at(0.0).coords,
            epsilon = 1e-10
        );
    }

    #[test]
    fn push_anchor_extends_track() {
        let mut track = BezierTrack::default();
        track.push_anchor(Point3::new(0.0, 0.0, 20.0), Point3::new(-2.5, 0.0, 12.5));

        assert_eq!(track.anchor_count(), 3);
        assert_eq!(track.segment_count(), 2);
        assert_eq!(track.anchors().len(), track.controls().len());
    }

    #[test]
    fn set_points_in_range() {
        let mut track = BezierTrack::default();
        track.set_anchor(1, Point3::new(0.0, 5.0, 10.0)).unwrap();
        track.set_control(0, Point3::new(-5.0, 0.0, 2.5)).unwrap();

        assert_relative_eq!(track.anchors()[1].y, 5.0);
        assert_relative_eq!(track.controls()[0].x, -5.0);
    }

    #[test]
    fn set_points_out_of_range() {
        let mut track = BezierTrack::default();

        assert_eq!(
            track.set_anchor(2, Point3::origin()),
            Err(TrackError::PointIndexOutOfRange { index: 2, count: 2 })
        );
        assert_eq!(
            track.set_control(7, Point3::origin()),
            Err(TrackError::PointIndexOutOfRange { index: 7, count: 2 })
        );
    }

    #[test]
    fn empty_and_single_anchor_tracks_are_valid() {
        let empty = BezierTrack::new(vec![], vec![]).unwrap();
        assert_eq!(empty.segment_count(), 0);
        assert!(empty.segments().next().is_none());

        let single =
            BezierTrack::new(vec![Point3::origin()], vec![Point3::new(1.0, 0.0, 0.0)]).unwrap();
        assert_eq!(single.segment_count(), 0);
        assert!(single.segment(0).is_none());
    }
}
