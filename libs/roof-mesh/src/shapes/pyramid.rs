//! # Pyramid
//!
//! A fan of triangles from every outer edge up to one apex above `center`.
//! Holes are not cut out of a pyramid.

use super::surfaces::{ground, push_surface};
use super::{FootprintGeometry, ShapeKind};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::options::ShapeOptions;
use footprint::{normalize, Polygon2D};
use tracing::debug;

/// Pyramid over the outer ring of a footprint.
///
/// With a pitch, the apex rises to `tan(pitch)` times the distance from
/// `center` to the farthest corner.
///
/// # Example
///
/// ```rust
/// use roof_mesh::{FootprintGeometry, Pyramid, ShapeOptions};
/// use footprint::Polygon2D;
///
/// let mesh = Pyramid
///     .build(&Polygon2D::default(), &ShapeOptions::default().with_depth(2.0))
///     .unwrap();
/// assert_eq!(mesh.triangle_count(), 6);
/// assert_eq!(mesh.max_z(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Pyramid;

impl FootprintGeometry for Pyramid {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Pyramid
    }

    fn build(&self, polygon: &Polygon2D, options: &ShapeOptions) -> MeshResult<Mesh> {
        options.validate()?;
        let polygon = normalize(polygon)?;

        let center = options.center_point();
        let run = polygon
            .outer
            .iter()
            .map(|p| p.distance(center))
            .fold(0.0, f64::max);
        let apex = center.extend(options.peak_depth(run));

        let outer = &polygon.outer;
        let mut mesh = Mesh::with_capacity(outer.len() * 2);
        for (i, &p) in outer.iter().enumerate() {
            let q = outer[(i + 1) % outer.len()];
            mesh.push_triangle(ground(p), ground(q), apex);
        }
        push_surface(&mut mesh, outer, &[], ground, true)?;
        mesh.compute_normals();

        debug!(
            apex = ?apex,
            triangles = mesh.triangle_count(),
            "built pyramid"
        );
        Ok(mesh)
    }
}
