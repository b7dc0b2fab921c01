//! # Footprint Polygons
//!
//! A footprint is one outer ring plus zero or more hole rings. Rings are
//! implicitly closed: the first point is never repeated at the end.
//!
//! ## Winding Convention
//!
//! After [`normalize`], the outer ring is counter-clockwise (positive shoelace
//! area) and every hole is clockwise, so the interior of the footprint is
//! always on the left of each directed edge.


use crate::error::{FootprintError, FootprintResult};
use config::constants::{AREA_EPSILON, DEFAULT_FOOTPRINT_HALF_SIZE};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A 2D footprint with optional holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon2D {
    /// Outer boundary vertices
    pub outer: Vec<DVec2>,
    /// Inner holes
    #[serde(default)]
    pub holes: Vec<Vec<DVec2>>,
}

impl Default for Polygon2D {
    /// The unit square centred at the origin.
    fn default() -> Self {
        Self::square(DVec2::splat(DEFAULT_FOOTPRINT_HALF_SIZE * 2.0), true)
    }
}

impl Polygon2D {
    /// Creates a new polygon from outer boundary vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use footprint::Polygon2D;
    /// use glam::DVec2;
    ///
    /// let triangle = Polygon2D::new(vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(1.0, 0.0),
    ///     DVec2::new(0.0, 1.0),
    /// ]);
    /// assert_eq!(triangle.vertex_count(), 3);
    /// ```
    pub fn new(outer: Vec<DVec2>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Creates a polygon with holes.
    pub fn with_holes(outer: Vec<DVec2>, holes: Vec<Vec<DVec2>>) -> Self {
        Self { outer, holes }
    }

    /// Creates a polygon from `[x, y]` pairs.
    pub fn from_coords(outer: &[[f64; 2]], holes: &[Vec<[f64; 2]>]) -> Self {
        Self {
            outer: outer.iter().map(|&p| DVec2::from(p)).collect(),
            holes: holes
                .iter()
                .map(|hole| hole.iter().map(|&p| DVec2::from(p)).collect())
                .collect(),
        }
    }

    /// Creates an axis-aligned rectangle, counter-clockwise.
    ///
    /// # Arguments
    ///
    /// * `size` - Width and height
    /// * `center` - If true, center at origin
    pub fn square(size: DVec2, center: bool) -> Self {
        let (x, y) = if center {
            (-size.x / 2.0, -size.y / 2.0)
        } else {
            (0.0, 0.0)
        };

        Self::new(vec![
            DVec2::new(x, y),
            DVec2::new(x + size.x, y),
            DVec2::new(x + size.x, y + size.y),
            DVec2::new(x, y + size.y),
        ])
    }

    /// Returns the number of vertices in the outer boundary.
    pub fn vertex_count(&self) -> usize {
        self.outer.len()
    }

    /// Returns true if the polygon has holes.
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Iterates the outer ring followed by every hole.
    pub fn rings(&self) -> impl Iterator<Item = &[DVec2]> {
        std::iter::once(self.outer.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }

    /// Enclosed area: outer area minus hole areas.
    pub fn area(&self) -> f64 {
        signed_area(&self.outer).abs()
            - self.holes.iter().map(|h| signed_area(h).abs()).sum::<f64>()
    }

    /// Returns a copy with every vertex moved by `offset`.
    pub fn translated(&self, offset: DVec2) -> Self {
        self.map_points(|p| p + offset)
    }

    /// Returns a copy with `f` applied to every vertex of every ring.
    pub fn map_points(&self, f: impl Fn(DVec2) -> DVec2) -> Self {
        Self {
            outer: self.outer.iter().map(|&p| f(p)).collect(),
            holes: self
                .holes
                .iter()
                .map(|hole| hole.iter().map(|&p| f(p)).collect())
                .collect(),
        }
    }
}

// =============================================================================
// RING MEASURES
// =============================================================================

/// Signed shoelace area of a closed ring. Positive for counter-clockwise.
///
/// # Example
///
/// ```rust
/// use footprint::signed_area;
/// use glam::DVec2;
///
/// let ccw = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// assert_eq!(signed_area(&ccw), 1.0);
/// ```
pub fn signed_area(ring: &[DVec2]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| ring[i].perp_dot(ring[(i + 1) % n]))
        .sum();
    twice / 2.0
}

/// True if the ring winds clockwise (negative signed area).
pub fn is_clockwise(ring: &[DVec2]) -> bool {
    signed_area(ring) < 0.0
}

/// Axis-aligned bounds of a ring as `(min, max)`.
pub fn bounds(ring: &[DVec2]) -> Option<(DVec2, DVec2)> {
    let first = *ring.first()?;
    Some(
        ring.iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
    )
}

/// True if the ring has at least 3 points and a non-zero area.
pub fn is_proper_ring(ring: &[DVec2]) -> bool {
    ring.len() >= 3 && signed_area(ring).abs() > AREA_EPSILON
}

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Removes a repeated closing vertex and consecutive duplicate vertices.
///
/// Equality is exact: rings coming from shape paths repeat their start point
/// bit-for-bit.
pub fn clean_ring(ring: &[DVec2]) -> Vec<DVec2> {
    let mut cleaned: Vec<DVec2> = Vec::with_capacity(ring.len());
    for &p in ring {
        if cleaned.last() != Some(&p) {
            cleaned.push(p);
        }
    }
    while cleaned.len() > 1 && cleaned.first() == cleaned.last() {
        cleaned.pop();
    }
    cleaned
}

/// Cleans a ring and fails when a coordinate is not finite or fewer than 3
/// points remain.
pub fn clean_ring_checked(ring: &[DVec2], label: &str) -> FootprintResult<Vec<DVec2>> {
    if let Some(index) = ring.iter().position(|p| !p.is_finite()) {
        return Err(FootprintError::invalid_polygon(format!(
            "{label} vertex {index} is not finite: {:?}",
            ring[index]
        )));
    }
    let cleaned = clean_ring(ring);
    if cleaned.len() < 3 {
        return Err(FootprintError::invalid_polygon(format!(
            "{label} has {} distinct vertices, at least 3 required",
            cleaned.len()
        )));
    }
    Ok(cleaned)
}

/// Returns a footprint with canonical winding and no duplicated closing
/// vertices.
///
/// The outer ring becomes counter-clockwise and every hole clockwise. The
/// input is left untouched.
///
/// # Errors
///
/// [`FootprintError::InvalidPolygon`] if any coordinate is NaN or infinite,
/// or if any ring has fewer than 3 distinct points after cleaning.
///
/// # Example
///
/// ```rust
/// use footprint::{normalize, is_clockwise, Polygon2D};
/// use glam::DVec2;
///
/// let clockwise = Polygon2D::new(vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(0.0, 1.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(0.0, 0.0),
/// ]);
/// let normalized = normalize(&clockwise).unwrap();
/// assert_eq!(normalized.outer.len(), 4);
/// assert!(!is_clockwise(&normalized.outer));
/// ```
pub fn normalize(polygon: &Polygon2D) -> FootprintResult<Polygon2D> {
    let mut outer = clean_ring_checked(&polygon.outer, "outer ring")?;
    if signed_area(&outer).abs() <= AREA_EPSILON {
        return Err(FootprintError::invalid_polygon(
            "outer ring encloses no area",
        ));
    }
    if is_clockwise(&outer) {
        outer.reverse();
    }

    let holes = polygon
        .holes
        .iter()
        .enumerate()
        .map(|(index, hole)| {
            let mut hole = clean_ring_checked(hole, &format!("hole {index}"))?;
            if !is_clockwise(&hole) {
                hole.reverse();
            }
            Ok(hole)
        })
        .collect::<FootprintResult<Vec<_>>>()?;

    Ok(Polygon2D { outer, holes })
}
