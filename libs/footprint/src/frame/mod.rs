//! # Ridge Frame
//!
//! A rotated coordinate frame in which a ridge line through `center` at
//! `angle` becomes the local x-axis. Wedge and rounded shapes split and
//! height-map their footprint in this frame, then map the result back.


use crate::polygon::Polygon2D;
use glam::DVec2;

/// Local frame with the ridge along +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidgeFrame {
    /// World position of the local origin
    pub center: DVec2,
    /// World angle of the local +x axis in radians
    pub angle: f64,
    rotation: DVec2,
}

impl RidgeFrame {
    /// Creates a frame centred at `center`, rotated by `angle` radians.
    pub fn new(center: DVec2, angle: f64) -> Self {
        Self {
            center,
            angle,
            rotation: DVec2::from_angle(angle),
        }
    }

    /// World to local: translate by `-center`, then rotate by `-angle`.
    #[inline]
    pub fn to_local(&self, point: DVec2) -> DVec2 {
        let offset = point - self.center;
        DVec2::new(
            self.rotation.x * offset.x + self.rotation.y * offset.y,
            -self.rotation.y * offset.x + self.rotation.x * offset.y,
        )
    }

    /// Local to world, the inverse of [`RidgeFrame::to_local`].
    #[inline]
    pub fn to_world(&self, point: DVec2) -> DVec2 {
        self.rotation.rotate(point) + self.center
    }

    /// Maps every ring of a polygon into the frame.
    pub fn polygon_to_local(&self, polygon: &Polygon2D) -> Polygon2D {
        polygon.map_points(|p| self.to_local(p))
    }

    /// Maps a ring into the frame.
    pub fn ring_to_local(&self, ring: &[DVec2]) -> Vec<DVec2> {
        ring.iter().map(|&p| self.to_local(p)).collect()
    }
}

impl Default for RidgeFrame {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 0.0)
    }
}
