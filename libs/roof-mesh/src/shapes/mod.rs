//! # Shape Assemblers
//!
//! One generator per shape kind, each turning a footprint and its options
//! into a closed triangle mesh.
//!
//! ## Pipeline
//!
//! ```text
//! Polygon2D → normalize → skeleton | split | projection → height map → Mesh
//! ```
//!
//! Every generator validates the options and normalizes the footprint before
//! emitting anything; on error no partial mesh is returned.

pub mod hipped;
pub mod pyramid;
pub mod ramp;
pub mod ridged;
pub mod surfaces;

pub use hipped::HippedRoof;
pub use pyramid::Pyramid;
pub use ramp::Ramp;
pub use ridged::{Rounded, Wedge};

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::options::ShapeOptions;
use footprint::Polygon2D;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of solid that can be built over a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Straight-skeleton roof
    Hipped,
    /// Single planar slope
    Ramp,
    /// Two planar slopes meeting at a ridge
    Wedge,
    /// Arched cross-section over a ridge
    Rounded,
    /// Fan to a single apex
    Pyramid,
}

impl ShapeKind {
    /// Every kind, in declaration order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Hipped,
        ShapeKind::Ramp,
        ShapeKind::Wedge,
        ShapeKind::Rounded,
        ShapeKind::Pyramid,
    ];

    /// Lowercase name, as used in parameter JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Hipped => "hipped",
            ShapeKind::Ramp => "ramp",
            ShapeKind::Wedge => "wedge",
            ShapeKind::Rounded => "rounded",
            ShapeKind::Pyramid => "pyramid",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generator producing a solid over a footprint.
///
/// Implementations are stateless; the same generator may build many meshes,
/// from any number of threads.
pub trait FootprintGeometry: Send + Sync {
    /// The kind of solid this generator builds.
    fn kind(&self) -> ShapeKind;

    /// Builds the mesh for a footprint.
    ///
    /// The returned mesh has its normals computed.
    fn build(&self, polygon: &Polygon2D, options: &ShapeOptions) -> MeshResult<Mesh>;
}

/// The generator for a shape kind.
pub fn geometry(kind: ShapeKind) -> &'static dyn FootprintGeometry {
    match kind {
        ShapeKind::Hipped => &HippedRoof,
        ShapeKind::Ramp => &Ramp,
        ShapeKind::Wedge => &Wedge,
        ShapeKind::Rounded => &Rounded,
        ShapeKind::Pyramid => &Pyramid,
    }
}

/// Builds a solid of the given kind over a footprint.
///
/// # Example
///
/// ```rust
/// use roof_mesh::{generate, ShapeKind, ShapeOptions};
/// use footprint::Polygon2D;
/// use glam::DVec2;
///
/// let footprint = Polygon2D::square(DVec2::new(4.0, 2.0), true);
/// let options = ShapeOptions::default().with_depth(5.0);
/// let mesh = generate(ShapeKind::Wedge, &footprint, &options).unwrap();
/// assert_eq!(mesh.vertex_count(), 36);
/// assert!((mesh.max_z() - 5.0).abs() < 1e-9);
/// ```
pub fn generate(kind: ShapeKind, polygon: &Polygon2D, options: &ShapeOptions) -> MeshResult<Mesh> {
    geometry(kind).build(polygon, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_matches_kind() {
        for kind in ShapeKind::ALL {
            assert_eq!(geometry(kind).kind(), kind);
        }
    }

    #[test]
    fn test_kind_names() {
        for kind in ShapeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
            let parsed: ShapeKind = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<ShapeKind>("\"gambrel\"").is_err());
    }
}
