//! # Shape Parameters
//!
//! The serialisable description of one solid: its kind, footprint, and
//! options. A parameter set can be written to JSON, read back, and rebuilt
//! into the same mesh.
//!
//! ```json
//! {
//!   "kind": "hipped",
//!   "shape": { "outer": [[0, 0], [4, 0], [4, 2], [0, 2]], "holes": [] },
//!   "options": { "depth": 1.5 }
//! }
//! ```

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::options::ShapeOptions;
use crate::shapes::{generate, ShapeKind};
use footprint::Polygon2D;
use serde::{Deserialize, Serialize};

/// Everything needed to rebuild a mesh.
///
/// A missing `shape` is the unit square centred at the origin; missing
/// options take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    /// Which generator to run
    pub kind: ShapeKind,
    /// Footprint polygon
    #[serde(default)]
    pub shape: Polygon2D,
    /// Generator options
    #[serde(default)]
    pub options: ShapeOptions,
}

impl ShapeParameters {
    /// Creates a parameter set.
    pub fn new(kind: ShapeKind, shape: Polygon2D, options: ShapeOptions) -> Self {
        Self {
            kind,
            shape,
            options,
        }
    }

    /// Serialises to JSON.
    pub fn to_json(&self) -> MeshResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reads a parameter set from JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roof_mesh::{ShapeKind, ShapeParameters};
    ///
    /// let params = ShapeParameters::from_json(r#"{"kind": "pyramid"}"#).unwrap();
    /// assert_eq!(params.kind, ShapeKind::Pyramid);
    /// assert_eq!(params.shape.outer.len(), 4);
    /// ```
    pub fn from_json(json: &str) -> MeshResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the mesh these parameters describe.
    pub fn build(&self) -> MeshResult<Mesh> {
        generate(self.kind, &self.shape, &self.options)
    }
}
