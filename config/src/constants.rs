//! # Configuration Constants
//!
//! Centralized constants for the footprint mesh generators. Tolerances used by
//! polygon splitting and the straight-skeleton engine, shape defaults, and
//! safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Defaults**: Shape parameters used when an option is omitted
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// A point whose signed distance to a splitting line is within this value is
/// treated as lying on the line.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn on_line(signed_distance: f64) -> bool {
///     signed_distance.abs() <= EPSILON
/// }
///
/// assert!(on_line(1e-12));
/// assert!(!on_line(1e-3));
/// ```
pub const EPSILON: f64 = 1e-9;

/// Tolerance below which a ring's enclosed area counts as zero.
///
/// Split pieces and wavefront loops with an absolute shoelace area at or
/// below this value are considered collapsed.
///
/// # Example
///
/// ```rust
/// use config::constants::AREA_EPSILON;
///
/// let sliver_area = 1e-14;
/// assert!(sliver_area <= AREA_EPSILON);
/// ```
pub const AREA_EPSILON: f64 = 1e-10;

/// Distance under which two straight-skeleton nodes are merged.
///
/// Simultaneous wavefront events meet at the same location up to rounding
/// noise; nodes closer than this share one identity so facets chain cleanly.
///
/// # Example
///
/// ```rust
/// use config::constants::{EPSILON, NODE_MERGE_EPSILON};
///
/// assert!(NODE_MERGE_EPSILON > EPSILON);
/// ```
pub const NODE_MERGE_EPSILON: f64 = 1e-7;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Peak height used when neither `depth` nor `pitch` is supplied.
///
/// The hipped roof ignores this and keeps raw skeleton distances instead.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DEPTH;
///
/// let depth: Option<f64> = None;
/// assert_eq!(depth.unwrap_or(DEFAULT_DEPTH), 1.0);
/// ```
pub const DEFAULT_DEPTH: f64 = 1.0;

/// Downslope direction in radians when `angle` is omitted.
pub const DEFAULT_ANGLE: f64 = 0.0;

/// Number of bands per side of the ridge for rounded shapes.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// assert!(DEFAULT_SEGMENTS >= 1);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 1;

/// Half the side length of the footprint used when no shape is supplied.
///
/// The default footprint is the square with corners at `(±0.5, ±0.5)`.
pub const DEFAULT_FOOTPRINT_HALF_SIZE: f64 = 0.5;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of bands per side for rounded shapes.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_SEGMENTS;
///
/// let requested = 10_000u32;
/// assert_eq!(requested.min(MAX_SEGMENTS), MAX_SEGMENTS);
/// ```
pub const MAX_SEGMENTS: u32 = 256;

/// Wavefront events allowed per input vertex before the skeleton engine
/// gives up on a footprint.
///
/// Every event removes or splits wavefront vertices, so a well-formed
/// footprint never comes close to this budget.
pub const MAX_SKELETON_EVENTS_PER_VERTEX: usize = 32;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Event budget for a skeleton over a footprint with `vertex_count` vertices.
///
/// # Example
///
/// ```rust
/// use config::constants::{skeleton_event_budget, MAX_SKELETON_EVENTS_PER_VERTEX};
///
/// assert_eq!(skeleton_event_budget(4), 4 * MAX_SKELETON_EVENTS_PER_VERTEX + 64);
/// ```
#[inline]
pub fn skeleton_event_budget(vertex_count: usize) -> usize {
    vertex_count * MAX_SKELETON_EVENTS_PER_VERTEX + 64
}
