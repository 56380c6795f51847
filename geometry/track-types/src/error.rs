//! Error types for track operations.

use thiserror::Error;

/// Errors that can occur when constructing or mutating a track.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// Anchor and control point sequences have different lengths.
    #[error("control point mismatch: {anchors} anchors but {controls} control points")]
    ControlPointMismatch {
        /// Number of anchor points.
        anchors: usize,
        /// Number of control points.
        controls: usize,
    },

    /// Point index is outside the track's point sequences.
    #[error("point index {index} out of range for track with {count} points")]
    PointIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of points in the sequence.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TrackError::ControlPointMismatch {
            anchors: 3,
            controls: 2,
        };
        assert!(err.to_string().contains("3 anchors"));
        assert!(err.to_string().contains("2 control points"));

        let err = TrackError::PointIndexOutOfRange { index: 5, count: 2 };
        assert!(err.to_string().contains("index 5"));
    }
}
