//! # Ramp
//!
//! A single plane sloping down toward `angle`, standing on walls that follow
//! every outer and hole edge.

use super::surfaces::{ground, push_surface, push_walls};
use super::{FootprintGeometry, ShapeKind};
use crate::error::MeshResult;
use crate::height::{projection_range, slope_projection, HeightMode};
use crate::mesh::Mesh;
use crate::options::ShapeOptions;
use footprint::{normalize, Polygon2D};
use glam::{DVec2, DVec3};
use tracing::debug;

/// Planar slope over a footprint.
///
/// The footprint's lowest point along the slope sits at `z = 0` and its
/// highest at `depth` (or rises at `tan(pitch)` per unit when a pitch is
/// given).
#[derive(Debug, Clone, Copy, Default)]
pub struct Ramp;

impl FootprintGeometry for Ramp {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ramp
    }

    fn build(&self, polygon: &Polygon2D, options: &ShapeOptions) -> MeshResult<Mesh> {
        options.validate()?;
        let polygon = normalize(polygon)?;

        let angle = options.angle;
        let (min, max) = projection_range(polygon.rings().flatten(), angle).unwrap_or_default();
        let mode = HeightMode::projection(options, min, max);
        let place = |p: DVec2| -> DVec3 { p.extend(mode.map(slope_projection(p, angle))) };

        let mut mesh = Mesh::new();
        for ring in polygon.rings() {
            push_walls(&mut mesh, ring, place);
        }
        push_surface(&mut mesh, &polygon.outer, &polygon.holes, place, false)?;
        push_surface(&mut mesh, &polygon.outer, &polygon.holes, ground, true)?;
        mesh.compute_normals();

        debug!(
            angle,
            rise = mode.map(max),
            triangles = mesh.triangle_count(),
            "built ramp"
        );
        Ok(mesh)
    }
}
