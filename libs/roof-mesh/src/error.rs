//! # Mesh Errors
//!
//! Error types for roof and ramp mesh generation.
//!
//! A footprint the skeleton engine cannot handle is not an error: the hipped
//! assembler returns an empty mesh for it instead.

use footprint::FootprintError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The footprint could not be normalized, split, or triangulated
    #[error("Footprint error: {0}")]
    Footprint(#[from] FootprintError),

    /// A skeleton facet is too small to triangulate
    #[error("Inconsistent facet {facet}: {points} points, expected at least 3")]
    InconsistentFacet { facet: usize, points: usize },

    /// Shape options are out of range
    #[error("Invalid options: {message}")]
    InvalidOptions { message: String },

    /// Parameter JSON could not be read or written
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MeshError {
    /// Creates an invalid options error.
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    /// Creates an inconsistent facet error.
    pub fn inconsistent_facet(facet: usize, points: usize) -> Self {
        Self::InconsistentFacet { facet, points }
    }
}

/// Result type for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;
