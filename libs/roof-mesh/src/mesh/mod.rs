//! # Mesh Data Structure
//!
//! Unindexed triangle list: every three consecutive positions form one
//! triangle, counter-clockwise when seen from outside the solid. Points
//! shared by neighbouring triangles are simply repeated.

#[cfg(test)]
mod tests;

use glam::DVec3;

/// A triangle soup with optional per-vertex normals.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the WASM boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use roof_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.push_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
/// mesh.compute_normals();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.normals().unwrap()[0], DVec3::Z);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    positions: Vec<DVec3>,
    /// Optional vertex normals, one per position
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with room for `triangle_count` triangles.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(triangle_count * 3),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Appends one triangle. Invalidates normals.
    pub fn push_triangle(&mut self, a: DVec3, b: DVec3, c: DVec3) {
        self.positions.extend_from_slice(&[a, b, c]);
        self.normals = None;
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Iterates the triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.positions.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Returns the vertex normals, if computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes a normal for every vertex.
    ///
    /// Each vertex takes the unit normal of its own triangle, so creases
    /// between roof planes stay sharp. Degenerate triangles get a zero normal.
    pub fn compute_normals(&mut self) {
        let mut normals = Vec::with_capacity(self.positions.len());
        for [a, b, c] in self.triangles() {
            let normal = (b - a).cross(c - a).normalize_or_zero();
            normals.extend_from_slice(&[normal; 3]);
        }
        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((&first, rest)) = self.positions.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)))
    }

    /// Highest z coordinate, `0` for an empty mesh.
    pub fn max_z(&self) -> f64 {
        self.bounding_box().1.z
    }

    /// Summed area of every triangle.
    pub fn surface_area(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| (b - a).cross(c - a).length() / 2.0)
            .sum()
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.positions {
            *v += offset;
        }
    }

    /// Appends another mesh's triangles.
    ///
    /// Normals survive only if both meshes have them.
    pub fn merge(&mut self, other: &Mesh) {
        self.positions.extend_from_slice(&other.positions);
        self.normals = match (self.normals.take(), &other.normals) {
            (Some(mut mine), Some(theirs)) => {
                mine.extend_from_slice(theirs);
                Some(mine)
            }
            _ => None,
        };
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten_f32(&self.positions)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_deref().map(flatten_f32)
    }
}

fn flatten_f32(vectors: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(vectors.len() * 3);
    for v in vectors {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
