//! # Ridged Shapes
//!
//! Wedge and rounded roofs: a ridge line runs through `center` along `angle`
//! and the roof falls away from it on both sides.
//!
//! ## Construction
//!
//! 1. Move the footprint into the ridge frame, where the ridge is the x-axis
//! 2. Cut it along the ridge, and for rounded roofs along `segments` more
//!    lines spaced evenly across the footprint
//! 3. Triangulate every piece and lift each vertex by its distance from the
//!    ridge
//! 4. Map back to world space, then add the floor and the walls along the
//!    cut outline
//!
//! A footprint with holes is triangulated first and each triangle is cut on
//! its own, which keeps every piece free of holes.

use super::surfaces::{push_surface, push_walls};
use super::{FootprintGeometry, ShapeKind};
use crate::error::MeshResult;
use crate::height::RidgeExtent;
use crate::mesh::Mesh;
use crate::options::ShapeOptions;
use footprint::triangulate::is_degenerate_triangle;
use footprint::{
    normalize, split_all, triangulate_points, FootprintError, FootprintResult, Polygon2D,
    RidgeFrame, SplitLine,
};
use glam::{DVec2, DVec3};
use tracing::debug;

/// Two planar slopes meeting at a ridge.
///
/// Heights fall linearly from `depth` on the ridge to `0` at the footprint's
/// extreme distance on each side.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wedge;

impl FootprintGeometry for Wedge {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Wedge
    }

    fn build(&self, polygon: &Polygon2D, options: &ShapeOptions) -> MeshResult<Mesh> {
        build_ridged(polygon, options, 0)
    }
}

/// A wedge whose slopes are cut into bands.
///
/// Heights follow the wedge. The footprint is also cut along `segments`
/// lines parallel to the ridge, evenly spaced from one extreme edge to the
/// other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rounded;

impl FootprintGeometry for Rounded {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rounded
    }

    fn build(&self, polygon: &Polygon2D, options: &ShapeOptions) -> MeshResult<Mesh> {
        build_ridged(polygon, options, options.segments)
    }
}

fn build_ridged(polygon: &Polygon2D, options: &ShapeOptions, cuts: u32) -> MeshResult<Mesh> {
    options.validate()?;
    let polygon = normalize(polygon)?;

    let frame = RidgeFrame::new(options.center_point(), options.angle);
    let local = frame.polygon_to_local(&polygon);
    let extent = RidgeExtent::of(&local.outer)
        .ok_or_else(|| FootprintError::invalid_polygon("outer ring is empty"))?;
    let depth = options.peak_depth(extent.run());
    let lines: Vec<SplitLine> = extent
        .split_levels(cuts)
        .into_iter()
        .map(SplitLine::horizontal)
        .collect();

    let outline = split_all(&local.outer, &lines)?;
    let holes = local
        .holes
        .iter()
        .map(|hole| cut_hole(hole, &lines))
        .collect::<FootprintResult<Vec<_>>>()?;
    let pieces = if holes.is_empty() {
        outline.regions()
    } else {
        cut_triangles(&local.outer, &local.holes, &lines)?
    };

    let place = |p: DVec2| -> DVec3 { frame.to_world(p).extend(extent.height(depth, p.y)) };
    let ground = |p: DVec2| -> DVec3 { frame.to_world(p).extend(0.0) };

    let mut mesh = Mesh::new();
    for piece in &pieces {
        push_surface(&mut mesh, piece, &[], place, false)?;
    }
    push_surface(&mut mesh, &outline.outline, &holes, ground, true)?;
    push_walls(&mut mesh, &outline.outline, place);
    for hole in &holes {
        push_walls(&mut mesh, hole, place);
    }
    mesh.compute_normals();

    debug!(
        cuts,
        lines = lines.len(),
        pieces = pieces.len(),
        triangles = mesh.triangle_count(),
        "built ridged roof"
    );
    Ok(mesh)
}

/// A clockwise hole with every line crossing inserted.
fn cut_hole(hole: &[DVec2], lines: &[SplitLine]) -> FootprintResult<Vec<DVec2>> {
    let reversed: Vec<DVec2> = hole.iter().rev().copied().collect();
    let mut outline = split_all(&reversed, lines)?.outline;
    outline.reverse();
    Ok(outline)
}

/// Triangulates a footprint with holes and cuts each triangle along the lines.
fn cut_triangles(
    outer: &[DVec2],
    holes: &[Vec<DVec2>],
    lines: &[SplitLine],
) -> FootprintResult<Vec<Vec<DVec2>>> {
    let mut pieces = Vec::new();
    for triangle in triangulate_points(outer, holes)? {
        if is_degenerate_triangle(&triangle) {
            continue;
        }
        pieces.extend(split_all(&triangle, lines)?.regions());
    }
    Ok(pieces)
}
