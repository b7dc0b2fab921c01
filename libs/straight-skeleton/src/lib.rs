//! # Straight Skeleton
//!
//! Straight skeletons of polygons with holes, computed by simulating the
//! polygon's edges moving inward at unit speed.
//!
//! ## Output
//!
//! One [`Facet`] per input edge: the edge itself followed by the skeleton
//! nodes bounding the region it sweeps, counter-clockwise. Every node carries
//! its distance to the boundary, which is the time the wavefront reached it.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use straight_skeleton::SkeletonBuilder;
//!
//! let rectangle = [
//!     DVec2::new(-25.0, -25.0),
//!     DVec2::new(75.0, -25.0),
//!     DVec2::new(75.0, 25.0),
//!     DVec2::new(-25.0, 25.0),
//! ];
//! let skeleton = SkeletonBuilder::shared().build(&rectangle, &[]).unwrap();
//! assert_eq!(skeleton.facets().len(), 4);
//! assert!((skeleton.max_distance() - 25.0).abs() < 1e-9);
//! ```
//!
//! ## Failure
//!
//! Builds return `None` instead of an error: degenerate rings, non-finite
//! arithmetic, an exhausted event budget, and facets whose arcs do not chain
//! back to their edge all leave the caller without a skeleton.

pub mod builder;
pub mod skeleton;
mod wavefront;

pub use builder::{SkeletonBuilder, SkeletonConfig};
pub use skeleton::{Facet, Node, StraightSkeleton};
