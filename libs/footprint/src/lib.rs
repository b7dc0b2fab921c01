//! # Footprint
//!
//! 2D geometry shared by every roof and ramp generator: polygon rings with a
//! canonical winding, straight-line splitting, ear-clipping triangulation,
//! and the rotated frame a ridge line is expressed in.
//!
//! ## Pipeline Position
//!
//! ```text
//! Polygon2D → normalize → split / triangulate → roof-mesh assemblers
//! ```
//!
//! ## Example
//!
//! ```rust
//! use footprint::{normalize, split, Polygon2D, SplitLine};
//! use glam::DVec2;
//!
//! let polygon = Polygon2D::square(DVec2::new(4.0, 2.0), true);
//! let polygon = normalize(&polygon).unwrap();
//! let result = split(&polygon.outer, &SplitLine::x_axis()).unwrap();
//! assert_eq!(result.rings().len(), 3);
//! ```

pub mod error;
pub mod frame;
pub mod lines;
pub mod polygon;
pub mod split;
pub mod triangulate;

pub use error::{FootprintError, FootprintResult};
pub use frame::RidgeFrame;
pub use lines::{Line2, Ray2};
pub use polygon::{
    bounds, clean_ring, is_clockwise, is_proper_ring, normalize, signed_area,
    Polygon2D,
};
pub use split::{split, split_all, SplitLine, SplitResult};
pub use triangulate::{triangulate, triangulate_points, triangulate_polygon};

/// Re-exported so downstream crates share one vector type.
pub use glam::{DVec2, DVec3};
