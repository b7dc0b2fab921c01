//! # Roof Mesh
//!
//! Triangle meshes for roof and ramp solids standing on a 2D footprint.
//!
//! ## Architecture
//!
//! ```text
//! footprint (normalize, split, triangulate) ─┐
//! straight-skeleton (facets, distances) ─────┼→ shapes → Mesh
//! height (skeleton / projection / ridge) ────┘
//! ```
//!
//! ## Shapes
//!
//! - **Hipped**: straight-skeleton roof planes
//! - **Ramp**: one plane sloping toward `angle`
//! - **Wedge**: two planes meeting at a ridge through `center`
//! - **Rounded**: the wedge, cut into bands parallel to the ridge
//! - **Pyramid**: fan to an apex above `center`
//!
//! Every solid includes a floor at `z = 0`; ramps, wedges, and rounded roofs
//! also get walls along the footprint edges.
//!
//! ## Usage
//!
//! ```rust
//! use roof_mesh::{generate, ShapeKind, ShapeOptions};
//! use footprint::Polygon2D;
//! use glam::DVec2;
//!
//! let footprint = Polygon2D::square(DVec2::new(100.0, 50.0), true);
//! let options = ShapeOptions::default().with_depth(6.0);
//! let mesh = generate(ShapeKind::Hipped, &footprint, &options).unwrap();
//! assert_eq!(mesh.vertex_count() % 3, 0);
//! assert!((mesh.max_z() - 6.0).abs() < 1e-9);
//! let buffer: Vec<f32> = mesh.positions_f32();
//! assert_eq!(buffer.len(), mesh.vertex_count() * 3);
//! ```

pub mod error;
pub mod height;
pub mod mesh;
pub mod options;
pub mod params;
pub mod shapes;

pub use error::{MeshError, MeshResult};
pub use height::{map_height, HeightMode, RidgeExtent};
pub use mesh::Mesh;
pub use options::ShapeOptions;
pub use params::ShapeParameters;
pub use shapes::{
    generate, geometry, FootprintGeometry, HippedRoof, Pyramid, Ramp, Rounded, ShapeKind, Wedge,
};
