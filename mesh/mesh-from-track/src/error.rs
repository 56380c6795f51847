//! Error types for ribbon generation.

use thiserror::Error;

/// Result type for ribbon generation.
pub type RibbonResult<T> = Result<T, RibbonError>;

/// Errors that can occur during track-to-ribbon generation.
///
/// All variants describe invalid configuration and are surfaced before any
/// geometry is computed; no partial buffers are produced. Degenerate
/// geometry (zero-length tangents) is recovered locally and is not an
/// error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RibbonError {
    /// Samples per curve segment is too low.
    #[error("segments must be at least {min}, got {actual}")]
    TooFewSegments {
        /// Minimum required samples per segment.
        min: usize,
        /// Actual sample count.
        actual: usize,
    },

    /// Cross-ribbon subdivision count is too low.
    #[error("resolution must be at least {min}, got {actual}")]
    TooFewSubdivisions {
        /// Minimum required subdivisions.
        min: usize,
        /// Actual subdivision count.
        actual: usize,
    },

    /// Width is not a finite number.
    #[error("invalid width: {0}")]
    InvalidWidth(f64),
}
