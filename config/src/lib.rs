//! # Config Crate
//!
//! Centralized configuration constants for the footprint mesh generators.
//! All tolerances, defaults, and safety limits are defined here so the
//! polygon, skeleton, and mesh crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_DEPTH};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1e-12;
//! assert!(value.abs() < EPSILON);
//!
//! // Fall back to the default depth when none is given
//! let depth: Option<f64> = None;
//! assert_eq!(depth.unwrap_or(DEFAULT_DEPTH), 1.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
