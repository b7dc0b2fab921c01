//! # Geometry Handle
//!
//! WASM-friendly wrapper for a generated solid that can be handed to
//! JavaScript.

use roof_mesh::Mesh;
use wasm_bindgen::prelude::*;

/// A handle to an unindexed triangle mesh that can be read from JavaScript.
///
/// Every three consecutive vertices form one triangle, so the position
/// buffer can be used without an index buffer.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = build_geometry(JSON.stringify({ kind: "hipped", options: { depth: 2 } }));
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.positions(), 3));
/// if (mesh.has_normals()) {
///   geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct GeometryHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f32>,
    /// Face normals repeated per vertex as [nx, ny, nz, ...]
    normals: Option<Vec<f32>>,
    /// Number of vertices
    vertex_count: u32,
    /// Number of triangles
    triangle_count: u32,
}

#[wasm_bindgen]
impl GeometryHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.positions[..])
    }

    /// Returns the vertex normals as a Float32Array, if available.
    #[wasm_bindgen]
    pub fn normals(&self) -> Option<js_sys::Float32Array> {
        self.normals
            .as_ref()
            .map(|n| js_sys::Float32Array::from(&n[..]))
    }

    /// Returns true if normals are available.
    #[wasm_bindgen]
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Returns true if the mesh has no triangles.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.triangle_count == 0
    }
}

impl GeometryHandle {
    /// Flattens a generated mesh into f32 buffers.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            positions: mesh.positions_f32(),
            normals: mesh.normals_f32(),
            vertex_count: u32::try_from(mesh.vertex_count()).unwrap_or(u32::MAX),
            triangle_count: u32::try_from(mesh.triangle_count()).unwrap_or(u32::MAX),
        }
    }

    /// Position buffer, for host-side callers.
    pub fn position_buffer(&self) -> &[f32] {
        &self.positions
    }

    /// Normal buffer, for host-side callers.
    pub fn normal_buffer(&self) -> Option<&[f32]> {
        self.normals.as_deref()
    }
}

impl From<Mesh> for GeometryHandle {
    fn from(mesh: Mesh) -> Self {
        Self::from_mesh(&mesh)
    }
}
