//! # Skeleton Builder
//!
//! Validates input rings and drives the wavefront engine.
//!
//! ## Input Contract
//!
//! - The outer ring should be counter-clockwise and holes clockwise; rings
//!   with the opposite winding are reversed
//! - Rings are implicitly closed; a repeated closing point is removed
//! - Degenerate rings (fewer than 3 distinct points, no area, non-finite
//!   coordinates) make the whole build return `None`

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use crate::skeleton::StraightSkeleton;
use crate::wavefront::Wavefront;
use config::constants::{skeleton_event_budget, AREA_EPSILON, NODE_MERGE_EPSILON};
use glam::DVec2;
use tracing::{debug, warn};

/// Tuning for the skeleton engine.
///
/// # Example
///
/// ```rust
/// use straight_skeleton::SkeletonConfig;
///
/// let config = SkeletonConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert!(config.max_events.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkeletonConfig {
    /// Distance under which skeleton nodes are merged
    pub tolerance: f64,
    /// Fixed event budget. `None` scales it with the vertex count.
    pub max_events: Option<usize>,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            tolerance: NODE_MERGE_EPSILON,
            max_events: None,
        }
    }
}

impl SkeletonConfig {
    /// Event budget for an input with `vertex_count` vertices.
    pub fn budget(&self, vertex_count: usize) -> usize {
        self.max_events
            .unwrap_or_else(|| skeleton_event_budget(vertex_count))
    }
}

/// Builds straight skeletons.
#[derive(Debug, Clone, Default)]
pub struct SkeletonBuilder {
    config: SkeletonConfig,
}

impl SkeletonBuilder {
    /// Creates a builder with explicit settings.
    pub fn new(config: SkeletonConfig) -> Self {
        Self { config }
    }

    /// The process-wide builder with default settings.
    ///
    /// Initialised on first use; every later call returns the same instance.
    pub fn shared() -> &'static SkeletonBuilder {
        static SHARED: OnceLock<SkeletonBuilder> = OnceLock::new();
        SHARED.get_or_init(|| {
            debug!("initialising shared skeleton builder");
            SkeletonBuilder::default()
        })
    }

    /// The builder's settings.
    pub fn config(&self) -> &SkeletonConfig {
        &self.config
    }

    /// Builds the skeleton of one polygon with holes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use straight_skeleton::SkeletonBuilder;
    ///
    /// let square = [
    ///     DVec2::new(-1.0, -1.0),
    ///     DVec2::new(1.0, -1.0),
    ///     DVec2::new(1.0, 1.0),
    ///     DVec2::new(-1.0, 1.0),
    /// ];
    /// let skeleton = SkeletonBuilder::shared().build(&square, &[]).unwrap();
    /// assert_eq!(skeleton.facets().len(), 4);
    /// assert!((skeleton.max_distance() - 1.0).abs() < 1e-9);
    /// ```
    pub fn build(&self, outer: &[DVec2], holes: &[Vec<DVec2>]) -> Option<StraightSkeleton> {
        let mut rings = Vec::with_capacity(holes.len() + 1);
        rings.push(self.prepare_ring(outer, true)?);
        for hole in holes {
            rings.push(self.prepare_ring(hole, false)?);
        }

        let vertex_count: usize = rings.iter().map(Vec::len).sum();
        let mut wavefront = Wavefront::new(&rings, self.config.tolerance)?;
        wavefront.run(self.config.budget(vertex_count))?;
        let skeleton = wavefront.into_skeleton()?;

        debug!(
            vertices = vertex_count,
            facets = skeleton.facets().len(),
            max_distance = skeleton.max_distance(),
            "built straight skeleton"
        );
        Some(skeleton)
    }

    /// Builds the skeleton of a GeoJSON-style multipolygon.
    ///
    /// Each polygon is a list of rings of `[x, y]` pairs: the outer ring first,
    /// then its holes. Facets of later polygons follow those of earlier ones.
    pub fn build_multi(&self, multipolygon: &[Vec<Vec<[f64; 2]>>]) -> Option<StraightSkeleton> {
        let mut combined: Option<StraightSkeleton> = None;
        for polygon in multipolygon {
            let (outer, holes) = polygon.split_first()?;
            let outer: Vec<DVec2> = outer.iter().map(|&p| DVec2::from(p)).collect();
            let holes: Vec<Vec<DVec2>> = holes
                .iter()
                .map(|ring| ring.iter().map(|&p| DVec2::from(p)).collect())
                .collect();

            let skeleton = self.build(&outer, &holes)?;
            match combined.as_mut() {
                Some(all) => all.extend(skeleton),
                None => combined = Some(skeleton),
            }
        }
        combined
    }

    /// Cleans a ring and gives it the requested winding.
    fn prepare_ring(&self, ring: &[DVec2], counter_clockwise: bool) -> Option<Vec<DVec2>> {
        if ring.iter().any(|p| !p.is_finite()) {
            warn!("skeleton input has non-finite coordinates");
            return None;
        }

        let mut cleaned: Vec<DVec2> = Vec::with_capacity(ring.len());
        for &p in ring {
            if cleaned
                .last()
                .map_or(true, |&last| last.distance(p) > self.config.tolerance)
            {
                cleaned.push(p);
            }
        }
        while cleaned.len() > 1
            && cleaned[0].distance(cleaned[cleaned.len() - 1]) <= self.config.tolerance
        {
            cleaned.pop();
        }

        let area = signed_area(&cleaned);
        if cleaned.len() < 3 || area.abs() <= AREA_EPSILON {
            warn!(points = cleaned.len(), area, "skeleton input ring is degenerate");
            return None;
        }
        if (area > 0.0) != counter_clockwise {
            cleaned.reverse();
        }
        Some(cleaned)
    }
}

fn signed_area(ring: &[DVec2]) -> f64 {
    let n = ring.len();
    (0..n)
        .map(|i| ring[i].perp_dot(ring[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}
