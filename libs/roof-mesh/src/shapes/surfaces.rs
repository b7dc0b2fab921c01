//! # Surface Builders
//!
//! Pieces shared by the assemblers: lifted triangulations for roofs and
//! floors, and the vertical walls between a ring and its roof line.

use crate::error::MeshResult;
use crate::mesh::Mesh;
use config::constants::EPSILON;
use footprint::triangulate::{flatten, triangulate};
use glam::{DVec2, DVec3};

/// Triangulates a polygon and places each vertex with `place`.
///
/// Triangles keep the counter-clockwise winding of the triangulator, so a
/// surface lifted upward faces up. With `flip` every triangle is reversed,
/// which turns a floor to face down.
pub fn push_surface(
    mesh: &mut Mesh,
    outer: &[DVec2],
    holes: &[Vec<DVec2>],
    place: impl Fn(DVec2) -> DVec3,
    flip: bool,
) -> MeshResult<()> {
    let vertices = flatten(outer, holes);
    for [a, b, c] in triangulate(outer, holes)? {
        let (a, b, c) = (place(vertices[a]), place(vertices[b]), place(vertices[c]));
        if flip {
            mesh.push_triangle(a, c, b);
        } else {
            mesh.push_triangle(a, b, c);
        }
    }
    Ok(())
}

/// Emits the walls standing on every edge of a ring.
///
/// `place` maps a ring point to the top of the wall above it; the wall's foot
/// is the same point at `z = 0`. Each edge contributes up to two triangles,
/// each only when its top corner is above the ground, so an edge lying
/// entirely at the low point adds nothing.
///
/// The ring's interior must be on the left of every edge (outer rings
/// counter-clockwise, holes clockwise) for the walls to face outward.
pub fn push_walls(mesh: &mut Mesh, ring: &[DVec2], place: impl Fn(DVec2) -> DVec3) {
    let n = ring.len();
    for i in 0..n {
        let top_p = place(ring[i]);
        let top_q = place(ring[(i + 1) % n]);
        let foot_p = top_p.truncate().extend(0.0);
        let foot_q = top_q.truncate().extend(0.0);

        if top_p.z > EPSILON {
            mesh.push_triangle(foot_p, foot_q, top_p);
        }
        if top_q.z > EPSILON {
            mesh.push_triangle(top_p, foot_q, top_q);
        }
    }
}

/// Places a point on the ground.
#[inline]
pub fn ground(point: DVec2) -> DVec3 {
    point.extend(0.0)
}
