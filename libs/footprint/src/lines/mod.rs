//! # Rays and Line Segments
//!
//! Small 2D value types used when reasoning about footprint edges and
//! bisectors.


use config::constants::EPSILON;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A half-infinite ray starting at `origin` heading along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray2 {
    /// Start point
    pub origin: DVec2,
    /// Heading, not necessarily unit length
    pub direction: DVec2,
}

impl Default for Ray2 {
    fn default() -> Self {
        Self {
            origin: DVec2::ZERO,
            direction: DVec2::NEG_Y,
        }
    }
}

impl Ray2 {
    /// Creates a ray from an origin and a heading.
    pub fn new(origin: DVec2, direction: DVec2) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray heading at `angle` radians from the +x axis.
    pub fn from_angle(origin: DVec2, angle: f64) -> Self {
        Self::new(origin, DVec2::from_angle(angle))
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f64) -> DVec2 {
        self.origin + self.direction * t
    }

    /// Parameters `(t, u)` where `self.at(t)` meets `origin + u * other_dir`.
    ///
    /// `None` when the directions are parallel.
    fn solve(&self, other_origin: DVec2, other_direction: DVec2) -> Option<(f64, f64)> {
        let denom = self.direction.perp_dot(other_direction);
        if denom.abs() <= EPSILON {
            return None;
        }
        let offset = other_origin - self.origin;
        let t = offset.perp_dot(other_direction) / denom;
        let u = offset.perp_dot(self.direction) / denom;
        Some((t, u))
    }

    /// Intersection of this ray with a line segment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use footprint::{Line2, Ray2};
    /// use glam::DVec2;
    ///
    /// let ray = Ray2::new(DVec2::ZERO, DVec2::X);
    /// let wall = Line2::new(DVec2::new(3.0, -1.0), DVec2::new(3.0, 1.0));
    /// assert_eq!(ray.intersect_line(&wall), Some(DVec2::new(3.0, 0.0)));
    /// ```
    pub fn intersect_line(&self, line: &Line2) -> Option<DVec2> {
        let (t, u) = self.solve(line.start, line.delta())?;
        if t >= -EPSILON && (-EPSILON..=1.0 + EPSILON).contains(&u) {
            Some(self.at(t))
        } else {
            None
        }
    }

    /// Intersection of two rays.
    pub fn intersect_ray(&self, other: &Ray2) -> Option<DVec2> {
        let (t, u) = self.solve(other.origin, other.direction)?;
        if t >= -EPSILON && u >= -EPSILON {
            Some(self.at(t))
        } else {
            None
        }
    }
}

/// A line segment from `start` to `end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Line2 {
    /// Start point
    pub start: DVec2,
    /// End point
    pub end: DVec2,
}

impl Line2 {
    /// Creates a segment between two points.
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    /// Vector from start to end.
    #[inline]
    pub fn delta(&self) -> DVec2 {
        self.end - self.start
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        self.delta().length()
    }

    /// Midpoint.
    pub fn center(&self) -> DVec2 {
        (self.start + self.end) * 0.5
    }

    /// Point at parameter `t` (0 at start, 1 at end).
    pub fn at(&self, t: f64) -> DVec2 {
        self.start + self.delta() * t
    }

    /// Parameter of the point on the infinite line closest to `point`,
    /// optionally clamped to the segment.
    pub fn closest_point_parameter(&self, point: DVec2, clamp: bool) -> f64 {
        let delta = self.delta();
        let length_sq = delta.length_squared();
        if length_sq <= EPSILON * EPSILON {
            return 0.0;
        }
        let t = (point - self.start).dot(delta) / length_sq;
        if clamp {
            t.clamp(0.0, 1.0)
        } else {
            t
        }
    }

    /// Distance from `point` to the segment.
    pub fn distance_to_point(&self, point: DVec2) -> f64 {
        let t = self.closest_point_parameter(point, true);
        self.at(t).distance(point)
    }

    /// Segment with start and end swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}
