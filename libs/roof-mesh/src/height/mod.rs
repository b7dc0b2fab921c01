//! # Height-Field Mapping
//!
//! Turns a raw per-vertex value into a z coordinate.
//!
//! | Mode            | Raw value                      | z                         |
//! |-----------------|--------------------------------|---------------------------|
//! | `SkeletonDepth` | distance to the nearest edge   | `raw * scale`             |
//! | `Projection`    | `x·sin(angle) − y·cos(angle)`  | `(raw − min) * scale`     |
//!
//! Wedge and rounded shapes use a [`RidgeExtent`] instead: the height falls
//! off linearly with the fraction of the way from the ridge to the extreme
//! edge.
//!
//! Every mapping is a pure function of the raw value, so a point shared by
//! several facets always lands at the same height.


use crate::options::ShapeOptions;
use config::constants::{DEFAULT_DEPTH, EPSILON};
use footprint::bounds;
use glam::DVec2;

// =============================================================================
// HEIGHT MODES
// =============================================================================

/// How raw values become heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeightMode {
    /// Scaled skeleton distance
    SkeletonDepth { scale: f64 },
    /// Shifted and scaled slope projection
    Projection { min: f64, scale: f64 },
}

impl HeightMode {
    /// Skeleton mode for a skeleton whose deepest node is `max_distance`.
    ///
    /// - `pitch` given: `scale = tan(pitch)`
    /// - `depth` given: `scale = depth / max_distance`
    /// - neither: `scale = 1`, raw distances are kept
    ///
    /// # Example
    ///
    /// ```rust
    /// use roof_mesh::{HeightMode, ShapeOptions};
    ///
    /// let mode = HeightMode::skeleton(&ShapeOptions::default().with_depth(6.0), 25.0);
    /// assert!((mode.map(25.0) - 6.0).abs() < 1e-12);
    /// ```
    pub fn skeleton(options: &ShapeOptions, max_distance: f64) -> Self {
        let scale = match (options.pitch, options.depth) {
            (Some(pitch), _) => pitch.tan(),
            (None, Some(depth)) if max_distance > EPSILON => depth / max_distance,
            (None, Some(_)) => 0.0,
            (None, None) => 1.0,
        };
        Self::SkeletonDepth { scale }
    }

    /// Projection mode for raw values spanning `min..=max`.
    ///
    /// - `pitch` given: `scale = tan(pitch)`
    /// - otherwise: `scale = depth / (max - min)`, so `max` maps to `depth`
    pub fn projection(options: &ShapeOptions, min: f64, max: f64) -> Self {
        let range = max - min;
        let scale = match options.pitch {
            Some(pitch) => pitch.tan(),
            None if range > EPSILON => options.depth.unwrap_or(DEFAULT_DEPTH) / range,
            None => 0.0,
        };
        Self::Projection { min, scale }
    }

    /// Maps a raw value to a height.
    #[inline]
    pub fn map(&self, raw: f64) -> f64 {
        match *self {
            Self::SkeletonDepth { scale } => raw * scale,
            Self::Projection { min, scale } => (raw - min) * scale,
        }
    }
}

/// Maps a raw value to a height in the given mode.
#[inline]
pub fn map_height(raw: f64, mode: &HeightMode) -> f64 {
    mode.map(raw)
}

/// Signed projection of a point onto the downslope direction `angle`.
///
/// # Example
///
/// ```rust
/// use roof_mesh::height::slope_projection;
/// use glam::DVec2;
///
/// // With angle 0 the slope runs along -y.
/// assert_eq!(slope_projection(DVec2::new(3.0, -2.0), 0.0), 2.0);
/// ```
#[inline]
pub fn slope_projection(point: DVec2, angle: f64) -> f64 {
    let (sin, cos) = angle.sin_cos();
    point.x * sin - point.y * cos
}

/// Smallest and largest slope projection over a set of points.
pub fn projection_range<'a>(
    points: impl IntoIterator<Item = &'a DVec2>,
    angle: f64,
) -> Option<(f64, f64)> {
    points.into_iter().fold(None, |range, &p| {
        let value = slope_projection(p, angle);
        Some(match range {
            Some((min, max)) => (f64::min(min, value), f64::max(max, value)),
            None => (value, value),
        })
    })
}

// =============================================================================
// RIDGE EXTENT
// =============================================================================

/// Extent of a footprint across the ridge, in the ridge frame.
///
/// Wedge and rounded roofs fall linearly from `depth` on the ridge to `0` at
/// the extreme edge on each side: `depth * (1 - y / max_y)` above the ridge
/// and `depth * (1 - y / min_y)` below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidgeExtent {
    /// Smallest local y
    pub min_y: f64,
    /// Largest local y
    pub max_y: f64,
}

impl RidgeExtent {
    /// Extent of a ring already mapped into the ridge frame.
    ///
    /// Returns `None` for an empty ring.
    pub fn of(ring: &[DVec2]) -> Option<Self> {
        let (min, max) = bounds(ring)?;
        Some(Self {
            min_y: min.y,
            max_y: max.y,
        })
    }

    /// The larger distance from the ridge to an extreme edge.
    #[inline]
    pub fn run(&self) -> f64 {
        self.max_y.max(-self.min_y).max(0.0)
    }

    /// Fraction of the way from the ridge to the extreme edge on `y`'s side.
    ///
    /// `y / max_y` for `y >= 0`, `y / min_y` below the ridge.
    #[inline]
    pub fn fraction(&self, y: f64) -> f64 {
        let extreme = if y >= 0.0 { self.max_y } else { self.min_y };
        if extreme.abs() <= EPSILON {
            0.0
        } else {
            (y / extreme).clamp(0.0, 1.0)
        }
    }

    /// Height at local `y` for a ridge of height `depth`.
    #[inline]
    pub fn height(&self, depth: f64, y: f64) -> f64 {
        depth * (1.0 - self.fraction(y))
    }

    /// Local y of the split lines: the ridge, then `cuts` lines spaced
    /// evenly across `min_y..max_y`.
    ///
    /// A line that lands on the ridge is only listed once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roof_mesh::height::RidgeExtent;
    ///
    /// let extent = RidgeExtent { min_y: -2.0, max_y: 4.0 };
    /// assert_eq!(extent.split_levels(2), vec![0.0, 2.0]);
    /// assert_eq!(extent.split_levels(0), vec![0.0]);
    /// ```
    pub fn split_levels(&self, cuts: u32) -> Vec<f64> {
        let step = (self.max_y - self.min_y) / f64::from(cuts.saturating_add(1));
        let mut levels = Vec::with_capacity(cuts as usize + 1);
        levels.push(0.0);
        for k in 1..=cuts {
            let level = self.min_y + step * f64::from(k);
            if levels.iter().all(|&other: &f64| (other - level).abs() > EPSILON) {
                levels.push(level);
            }
        }
        levels
    }
}
