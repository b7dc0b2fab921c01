//! # Polygon Triangulation
//!
//! Ear-clipping triangulation of a ring with holes, backed by `earcutr`.
//!
//! Vertices are indexed as the outer ring followed by every hole in order.
//! Returned triangles are always counter-clockwise regardless of the order
//! `earcutr` emits them in.


use crate::error::{FootprintError, FootprintResult};
use crate::polygon::Polygon2D;
use config::constants::AREA_EPSILON;
use glam::DVec2;
use tracing::debug;

/// Triangulates an outer ring with holes.
///
/// # Errors
///
/// - [`FootprintError::InvalidPolygon`] if the outer ring has fewer than 3
///   points
/// - [`FootprintError::TriangulationFailed`] if `earcutr` rejects the input
///
/// # Example
///
/// ```rust
/// use footprint::triangulate;
/// use glam::DVec2;
///
/// let square = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// let triangles = triangulate(&square, &[]).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn triangulate(outer: &[DVec2], holes: &[Vec<DVec2>]) -> FootprintResult<Vec<[usize; 3]>> {
    if outer.len() < 3 {
        return Err(FootprintError::invalid_polygon(format!(
            "cannot triangulate a ring with {} points",
            outer.len()
        )));
    }

    let vertices = flatten(outer, holes);
    let mut coords = Vec::with_capacity(vertices.len() * 2);
    for p in &vertices {
        coords.push(p.x);
        coords.push(p.y);
    }

    let mut hole_starts = Vec::with_capacity(holes.len());
    let mut start = outer.len();
    for hole in holes {
        hole_starts.push(start);
        start += hole.len();
    }

    let indices = earcutr::earcut(&coords, &hole_starts, 2)
        .map_err(|e| FootprintError::triangulation(format!("{e:?}")))?;
    if indices.len() % 3 != 0 {
        return Err(FootprintError::triangulation(format!(
            "index count {} is not a multiple of 3",
            indices.len()
        )));
    }

    let triangles: Vec<[usize; 3]> = indices
        .chunks_exact(3)
        .map(|c| {
            let tri = [c[0], c[1], c[2]];
            if triangle_area(&vertices, tri) < 0.0 {
                [tri[0], tri[2], tri[1]]
            } else {
                tri
            }
        })
        .collect();

    debug!(
        vertices = vertices.len(),
        triangles = triangles.len(),
        "triangulated footprint"
    );
    Ok(triangles)
}

/// Triangulates a polygon and returns each triangle's points.
pub fn triangulate_points(outer: &[DVec2], holes: &[Vec<DVec2>]) -> FootprintResult<Vec<[DVec2; 3]>> {
    let vertices = flatten(outer, holes);
    Ok(triangulate(outer, holes)?
        .into_iter()
        .map(|[a, b, c]| [vertices[a], vertices[b], vertices[c]])
        .collect())
}

/// Triangulates a [`Polygon2D`].
pub fn triangulate_polygon(polygon: &Polygon2D) -> FootprintResult<Vec<[DVec2; 3]>> {
    triangulate_points(&polygon.outer, &polygon.holes)
}

/// Outer ring followed by every hole, in index order.
pub fn flatten(outer: &[DVec2], holes: &[Vec<DVec2>]) -> Vec<DVec2> {
    let mut vertices = Vec::with_capacity(outer.len() + holes.iter().map(Vec::len).sum::<usize>());
    vertices.extend_from_slice(outer);
    for hole in holes {
        vertices.extend_from_slice(hole);
    }
    vertices
}

/// Signed area of an indexed triangle.
fn triangle_area(vertices: &[DVec2], [a, b, c]: [usize; 3]) -> f64 {
    (vertices[b] - vertices[a]).perp_dot(vertices[c] - vertices[a]) / 2.0
}

/// True if a triangle encloses no area.
pub fn is_degenerate_triangle(points: &[DVec2; 3]) -> bool {
    (points[1] - points[0]).perp_dot(points[2] - points[0]).abs() / 2.0 <= AREA_EPSILON
}
