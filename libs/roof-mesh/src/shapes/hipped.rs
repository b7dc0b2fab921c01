//! # Hipped Roof
//!
//! Roof planes from the straight skeleton of the footprint: every edge of
//! the footprint rises along its own facet to the ridge, at a height
//! proportional to the distance from the eaves.

use super::surfaces::{ground, push_surface};
use super::{FootprintGeometry, ShapeKind};
use crate::error::{MeshError, MeshResult};
use crate::height::HeightMode;
use crate::mesh::Mesh;
use crate::options::ShapeOptions;
use footprint::{normalize, triangulate, Polygon2D};
use straight_skeleton::{Facet, SkeletonBuilder};
use tracing::{debug, warn};

/// Straight-skeleton roof over a footprint, closed by a floor.
///
/// A footprint the skeleton engine cannot handle yields an empty mesh.
///
/// # Example
///
/// ```rust
/// use roof_mesh::{FootprintGeometry, HippedRoof, ShapeOptions};
/// use footprint::Polygon2D;
/// use glam::DVec2;
///
/// let footprint = Polygon2D::new(vec![
///     DVec2::new(-25.0, -25.0),
///     DVec2::new(75.0, -25.0),
///     DVec2::new(75.0, 25.0),
///     DVec2::new(-25.0, 25.0),
/// ]);
/// let mesh = HippedRoof
///     .build(&footprint, &ShapeOptions::default().with_depth(6.0))
///     .unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert!((mesh.max_z() - 6.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HippedRoof;

impl FootprintGeometry for HippedRoof {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Hipped
    }

    fn build(&self, polygon: &Polygon2D, options: &ShapeOptions) -> MeshResult<Mesh> {
        options.validate()?;
        let polygon = normalize(polygon)?;

        let Some(skeleton) = SkeletonBuilder::shared().build(&polygon.outer, &polygon.holes) else {
            warn!(
                vertices = polygon.vertex_count(),
                holes = polygon.holes.len(),
                "no straight skeleton for footprint, emitting empty roof"
            );
            return Ok(Mesh::new());
        };

        let mode = HeightMode::skeleton(options, skeleton.max_distance());
        let mut mesh = Mesh::new();
        for (index, facet) in skeleton.facets().iter().enumerate() {
            push_facet(&mut mesh, index, facet, &mode)?;
        }
        push_surface(&mut mesh, &polygon.outer, &polygon.holes, ground, true)?;
        mesh.compute_normals();

        debug!(
            facets = skeleton.facets().len(),
            triangles = mesh.triangle_count(),
            "built hipped roof"
        );
        Ok(mesh)
    }
}

/// Emits one skeleton facet with its vertices lifted to their heights.
fn push_facet(mesh: &mut Mesh, index: usize, facet: &Facet, mode: &HeightMode) -> MeshResult<()> {
    if facet.len() < 3 || facet.distances.len() != facet.len() {
        return Err(MeshError::inconsistent_facet(index, facet.len()));
    }
    let lift = |i: usize| facet.points[i].extend(mode.map(facet.distances[i]));

    if facet.len() == 3 {
        mesh.push_triangle(lift(0), lift(1), lift(2));
        return Ok(());
    }
    for [a, b, c] in triangulate(&facet.points, &[])? {
        mesh.push_triangle(lift(a), lift(b), lift(c));
    }
    Ok(())
}
