//! # Shape Options
//!
//! Parameters shared by every generator. All fields are optional in JSON:
//!
//! ```json
//! { "depth": 6.0, "angle": 0.785, "center": [0.0, 0.0], "segments": 4 }
//! ```
//!
//! ## Height Precedence
//!
//! `pitch` wins over `depth` when both are given. With neither, hipped roofs
//! keep raw skeleton distances and every other shape rises to
//! [`DEFAULT_DEPTH`].


use crate::error::{MeshError, MeshResult};
use config::constants::{DEFAULT_ANGLE, DEFAULT_DEPTH, DEFAULT_SEGMENTS, MAX_SEGMENTS};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Options for a footprint shape.
///
/// # Example
///
/// ```rust
/// use roof_mesh::ShapeOptions;
///
/// let options = ShapeOptions::default().with_depth(5.0).with_angle(0.5);
/// assert!(options.validate().is_ok());
/// assert_eq!(options.segments, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeOptions {
    /// Peak height in world units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// Roof slope in radians
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
    /// Downslope direction in radians
    pub angle: f64,
    /// Pivot for angle-based shapes and the pyramid apex
    pub center: [f64; 2],
    /// Cut lines spaced across the footprint for rounded shapes
    pub segments: u32,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            depth: None,
            pitch: None,
            angle: DEFAULT_ANGLE,
            center: [0.0, 0.0],
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl ShapeOptions {
    /// Sets the peak height.
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Sets the roof pitch in radians.
    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// Sets the downslope direction in radians.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the pivot point.
    pub fn with_center(mut self, center: DVec2) -> Self {
        self.center = center.to_array();
        self
    }

    /// Sets the cut count for rounded shapes.
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// The pivot as a vector.
    #[inline]
    pub fn center_point(&self) -> DVec2 {
        DVec2::from(self.center)
    }

    /// Peak height for a shape whose slope spans `run` horizontally.
    ///
    /// `tan(pitch) * run` if a pitch is set, else the depth, else
    /// [`DEFAULT_DEPTH`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use roof_mesh::ShapeOptions;
    ///
    /// let options = ShapeOptions::default().with_pitch(std::f64::consts::FRAC_PI_4);
    /// assert!((options.peak_depth(2.0) - 2.0).abs() < 1e-12);
    /// assert_eq!(ShapeOptions::default().peak_depth(2.0), 1.0);
    /// ```
    pub fn peak_depth(&self, run: f64) -> f64 {
        match (self.pitch, self.depth) {
            (Some(pitch), _) => pitch.tan() * run,
            (None, Some(depth)) => depth,
            (None, None) => DEFAULT_DEPTH,
        }
    }

    /// Checks every field is usable.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidOptions`] for non-finite numbers, a negative
    /// depth, a pitch outside `[0°, 90°)`, or `segments` outside
    /// `1..=MAX_SEGMENTS`.
    pub fn validate(&self) -> MeshResult<()> {
        if let Some(depth) = self.depth {
            if !depth.is_finite() || depth < 0.0 {
                return Err(MeshError::invalid_options(format!(
                    "depth must be a finite, non-negative number, got {depth}"
                )));
            }
        }
        if let Some(pitch) = self.pitch {
            if !pitch.is_finite() || !(0.0..FRAC_PI_2).contains(&pitch) {
                return Err(MeshError::invalid_options(format!(
                    "pitch must be at least 0 and below pi/2, got {pitch}"
                )));
            }
        }
        if !self.angle.is_finite() {
            return Err(MeshError::invalid_options(format!(
                "angle must be finite, got {}",
                self.angle
            )));
        }
        if !self.center_point().is_finite() {
            return Err(MeshError::invalid_options(format!(
                "center must be finite, got {:?}",
                self.center
            )));
        }
        if !(1..=MAX_SEGMENTS).contains(&self.segments) {
            return Err(MeshError::invalid_options(format!(
                "segments must be between 1 and {MAX_SEGMENTS}, got {}",
                self.segments
            )));
        }
        Ok(())
    }
}
