//! # Footprint Errors
//!
//! Error types for polygon cleaning, splitting, and triangulation.
//!
//! ## Error Policy
//!
//! - No partial rings are returned when an operation fails
//! - Every error carries a message describing the offending input

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while preparing a footprint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FootprintError {
    /// A ring has a non-finite coordinate or fewer than 3 distinct vertices
    /// after cleaning.
    #[error("Invalid polygon: {message}")]
    InvalidPolygon { message: String },

    /// A splitting line enters a ring without cleanly leaving it again.
    ///
    /// Indicates a non-simple input ring.
    #[error("Axis alignment failure: {message}")]
    AxisAlignmentFailure { message: String },

    /// The ear-clipping triangulator rejected the input.
    #[error("Triangulation failed: {message}")]
    TriangulationFailed { message: String },
}

impl FootprintError {
    /// Creates an invalid polygon error.
    pub fn invalid_polygon(message: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            message: message.into(),
        }
    }

    /// Creates an axis alignment error.
    pub fn axis_alignment(message: impl Into<String>) -> Self {
        Self::AxisAlignmentFailure {
            message: message.into(),
        }
    }

    /// Creates a triangulation error.
    pub fn triangulation(message: impl Into<String>) -> Self {
        Self::TriangulationFailed {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for footprint operations.
pub type FootprintResult<T> = Result<T, FootprintError>;

// =============================================================================
// TESTS
// =============================================================================
