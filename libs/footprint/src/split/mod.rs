//! # Planar Line Splitting
//!
//! Cuts a closed ring along a straight line into the sub-rings lying on
//! either side of it.
//!
//! ## Algorithm Overview
//!
//! 1. Walk the ring, insert a crossing point wherever an edge passes from one
//!    side of the line to the other, and record it in an augmented outline
//! 2. Rank the crossings by their position along the line
//! 3. Re-walk the augmented outline with a stack of open pieces, closing a
//!    piece when it reaches the crossing paired with the one that opened it
//!
//! ## Crossing Pairing
//!
//! Sorted along the line, crossings alternate between entering and leaving the
//! ring, so consecutive ranks bound one chord of the interior:
//!
//! | rank | closes with |
//! |------|-------------|
//! | 0    | 1           |
//! | 1    | 0           |
//! | 2k   | 2k + 1      |
//! | 2k+1 | 2k          |


use crate::error::{FootprintError, FootprintResult};
use crate::polygon::{clean_ring_checked, is_proper_ring};
use config::constants::EPSILON;
use glam::DVec2;
use tracing::{debug, warn};

// =============================================================================
// SPLIT LINE
// =============================================================================

/// An infinite straight line used to cut rings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLine {
    /// Any point on the line
    pub origin: DVec2,
    /// Unit direction of the line
    pub direction: DVec2,
}

impl SplitLine {
    /// Creates a line through `origin` heading along `direction`.
    ///
    /// The direction is normalized; a zero direction falls back to +x.
    pub fn new(origin: DVec2, direction: DVec2) -> Self {
        Self {
            origin,
            direction: direction.try_normalize().unwrap_or(DVec2::X),
        }
    }

    /// The horizontal line `y = y_value`.
    pub fn horizontal(y_value: f64) -> Self {
        Self::new(DVec2::new(0.0, y_value), DVec2::X)
    }

    /// The x-axis.
    pub fn x_axis() -> Self {
        Self::horizontal(0.0)
    }

    /// The line through `origin` at `angle` radians from the +x axis.
    pub fn through(origin: DVec2, angle: f64) -> Self {
        Self::new(origin, DVec2::from_angle(angle))
    }

    /// Signed perpendicular distance, positive on the left of the direction.
    ///
    /// For [`SplitLine::horizontal`] this is `y - y_value`.
    #[inline]
    pub fn distance(&self, point: DVec2) -> f64 {
        self.direction.perp_dot(point - self.origin)
    }

    /// Position of the point's projection along the line.
    #[inline]
    pub fn along(&self, point: DVec2) -> f64 {
        self.direction.dot(point - self.origin)
    }

    /// The point on the line at position `along`.
    #[inline]
    pub fn point_at(&self, along: f64) -> DVec2 {
        self.origin + self.direction * along
    }

    /// Which side of the line a point is on, with on-line points as `0`.
    #[inline]
    fn side(&self, point: DVec2) -> i8 {
        let d = self.distance(point);
        if d.abs() <= EPSILON {
            0
        } else if d > 0.0 {
            1
        } else {
            -1
        }
    }
}

// =============================================================================
// SPLIT RESULT
// =============================================================================

/// The outcome of cutting one ring with one line.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitResult {
    /// The original ring with every crossing point inserted
    pub outline: Vec<DVec2>,
    /// Sub-rings cut off by the line, empty when the line misses the ring
    pub pieces: Vec<Vec<DVec2>>,
}

impl SplitResult {
    /// True if the line actually crossed the ring.
    pub fn is_split(&self) -> bool {
        !self.pieces.is_empty()
    }

    /// The outline followed by every piece.
    pub fn rings(&self) -> Vec<Vec<DVec2>> {
        std::iter::once(self.outline.clone())
            .chain(self.pieces.iter().cloned())
            .collect()
    }

    /// The pieces, or the outline alone when nothing was cut.
    pub fn regions(&self) -> Vec<Vec<DVec2>> {
        if self.is_split() {
            self.pieces.clone()
        } else {
            vec![self.outline.clone()]
        }
    }
}

/// A vertex of the augmented outline, tagged with its crossing rank.
#[derive(Debug, Clone, Copy)]
struct OutlinePoint {
    point: DVec2,
    crossing: Option<usize>,
}

// =============================================================================
// SPLITTING
// =============================================================================

/// Splits a ring along a line.
///
/// # Errors
///
/// - [`FootprintError::InvalidPolygon`] if the ring has fewer than 3 points
/// - [`FootprintError::AxisAlignmentFailure`] if the crossings cannot be
///   paired, which only happens for self-intersecting rings
///
/// # Example
///
/// ```rust
/// use footprint::{split, SplitLine};
/// use glam::DVec2;
///
/// let rectangle = [
///     DVec2::new(2.0, -1.0),
///     DVec2::new(2.0, 1.0),
///     DVec2::new(-2.0, 1.0),
///     DVec2::new(-2.0, -1.0),
/// ];
/// let result = split(&rectangle, &SplitLine::x_axis()).unwrap();
/// assert_eq!(result.outline.len(), 6);
/// assert_eq!(result.pieces.len(), 2);
/// ```
pub fn split(ring: &[DVec2], line: &SplitLine) -> FootprintResult<SplitResult> {
    let ring = clean_ring_checked(ring, "split ring")?;
    let (outline, crossing_count) = augment(&ring, line);

    if crossing_count == 0 {
        return Ok(SplitResult {
            outline: ring,
            pieces: Vec::new(),
        });
    }
    if crossing_count % 2 != 0 {
        return Err(FootprintError::axis_alignment(format!(
            "line crosses the ring {crossing_count} times, expected an even count"
        )));
    }

    let pieces = assemble(&outline)?;
    let outline: Vec<DVec2> = outline.into_iter().map(|p| p.point).collect();

    let total = pieces.len();
    let kept: Vec<Vec<DVec2>> = pieces.into_iter().filter(|p| is_proper_ring(p)).collect();
    if kept.len() < total {
        warn!(dropped = total - kept.len(), "dropping degenerate split pieces");
    }
    debug!(
        crossings = crossing_count,
        pieces = kept.len(),
        "split ring along line"
    );

    Ok(SplitResult {
        outline,
        pieces: kept,
    })
}

/// Splits every ring by every line in turn.
///
/// Each line cuts all pieces produced so far, and the outline is augmented
/// with the crossings of every line.
pub fn split_all(ring: &[DVec2], lines: &[SplitLine]) -> FootprintResult<SplitResult> {
    let mut outline = clean_ring_checked(ring, "split ring")?;
    let mut regions = vec![outline.clone()];

    for line in lines {
        outline = split(&outline, line)?.outline;
        let mut next = Vec::with_capacity(regions.len() * 2);
        for region in &regions {
            next.extend(split(region, line)?.regions());
        }
        regions = next;
    }

    let pieces = if regions.len() > 1 { regions } else { Vec::new() };
    Ok(SplitResult { outline, pieces })
}

/// Builds the augmented outline and ranks its crossings.
///
/// Returns the outline and the number of crossings found.
fn augment(ring: &[DVec2], line: &SplitLine) -> (Vec<OutlinePoint>, usize) {
    let n = ring.len();
    let sides: Vec<i8> = ring.iter().map(|&p| line.side(p)).collect();

    // Nearest off-line side walking backwards/forwards from each vertex.
    let off_line = |start: usize, step: isize| -> i8 {
        let mut i = start as isize;
        for _ in 0..n {
            i = (i + step).rem_euclid(n as isize);
            if sides[i as usize] != 0 {
                return sides[i as usize];
            }
        }
        0
    };

    let mut outline = Vec::with_capacity(n + 4);
    // (index in outline, position along the line)
    let mut crossings: Vec<(usize, f64)> = Vec::new();

    for i in 0..n {
        let point = ring[i];
        let next = ring[(i + 1) % n];
        let prev_side = sides[(i + n - 1) % n];

        let mut crossing = None;
        if sides[i] == 0 && prev_side != 0 {
            // First on-line vertex of a run: a crossing unless it only touches.
            let before = prev_side;
            let after = off_line(i, 1);
            if after != 0 && before != after {
                crossing = Some(crossings.len());
                crossings.push((outline.len(), line.along(point)));
            }
        }
        outline.push(OutlinePoint {
            point: if crossing.is_some() {
                line.point_at(line.along(point))
            } else {
                point
            },
            crossing,
        });

        let next_side = sides[(i + 1) % n];
        if sides[i] * next_side < 0 {
            let dp = line.distance(point);
            let dn = line.distance(next);
            let t = dp / (dp - dn);
            let along = line.along(point + (next - point) * t);
            crossings.push((outline.len(), along));
            outline.push(OutlinePoint {
                point: line.point_at(along),
                crossing: Some(crossings.len() - 1),
            });
        }
    }

    // Rank by position along the line; ties keep walk order.
    let mut order: Vec<usize> = (0..crossings.len()).collect();
    order.sort_by(|&a, &b| crossings[a].1.total_cmp(&crossings[b].1));
    for (rank, &crossing) in order.iter().enumerate() {
        outline[crossings[crossing].0].crossing = Some(rank);
    }

    (outline, crossings.len())
}

/// Closing rank paired with `rank`.
#[inline]
fn partner(rank: usize) -> usize {
    rank ^ 1
}

/// An open piece together with the crossing rank that will close it.
struct Frame {
    ring: Vec<DVec2>,
    closes_at: Option<usize>,
}

/// Re-walks the augmented outline and assembles the pieces.
fn assemble(outline: &[OutlinePoint]) -> FootprintResult<Vec<Vec<DVec2>>> {
    let mut pieces = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut current = Frame {
        ring: Vec::new(),
        closes_at: None,
    };

    for vertex in outline {
        current.ring.push(vertex.point);
        let Some(rank) = vertex.crossing else {
            continue;
        };

        if current.closes_at == Some(rank) {
            let enclosing = stack.pop().ok_or_else(|| {
                FootprintError::axis_alignment(format!(
                    "crossing {rank} closes a piece with no enclosing piece"
                ))
            })?;
            pieces.push(std::mem::replace(&mut current, enclosing).ring);
            current.ring.push(vertex.point);
        } else {
            let opened = Frame {
                ring: vec![vertex.point],
                closes_at: Some(partner(rank)),
            };
            stack.push(std::mem::replace(&mut current, opened));
        }
    }

    if !stack.is_empty() {
        return Err(FootprintError::axis_alignment(format!(
            "{} pieces were never closed by their paired crossing",
            stack.len()
        )));
    }
    pieces.push(current.ring);
    Ok(pieces)
}
