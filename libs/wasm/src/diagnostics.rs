//! WASM-compatible error reporting.
//!
//! Rust generation errors become a code plus a message, which JavaScript can
//! switch on without parsing strings.

use footprint::FootprintError;
use roof_mesh::MeshError;
use wasm_bindgen::prelude::*;

/// Error category for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidPolygon,
    AxisAlignment,
    Triangulation,
    InconsistentFacet,
    InvalidOptions,
    Serialization,
}

impl From<&MeshError> for ErrorCode {
    fn from(err: &MeshError) -> Self {
        match err {
            MeshError::Footprint(FootprintError::InvalidPolygon { .. }) => ErrorCode::InvalidPolygon,
            MeshError::Footprint(FootprintError::AxisAlignmentFailure { .. }) => {
                ErrorCode::AxisAlignment
            }
            MeshError::Footprint(FootprintError::TriangulationFailed { .. }) => {
                ErrorCode::Triangulation
            }
            MeshError::InconsistentFacet { .. } => ErrorCode::InconsistentFacet,
            MeshError::InvalidOptions { .. } => ErrorCode::InvalidOptions,
            MeshError::Serialization(_) => ErrorCode::Serialization,
        }
    }
}

/// A generation failure for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try { build_geometry(json); }
/// // catch (err) { console.log(err.code, err.message); }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct GeometryError {
    code: ErrorCode,
    message: String,
}

#[wasm_bindgen]
impl GeometryError {
    /// Returns the error category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Converts this error to a plain JavaScript object.
    ///
    /// Plain objects survive `postMessage` between a worker and the main
    /// thread; wasm-bindgen wrappers do not.
    pub fn to_js_object(&self) -> JsValue {
        use js_sys::{Object, Reflect};

        let obj = Object::new();
        let fields = [
            ("code", JsValue::from(self.code as i32)),
            ("message", JsValue::from_str(&self.message)),
        ];
        for (key, value) in fields {
            // Setting a data property on a fresh Object cannot fail.
            let _ = Reflect::set(&obj, &JsValue::from_str(key), &value);
        }
        JsValue::from(obj)
    }
}

impl From<MeshError> for GeometryError {
    fn from(err: MeshError) -> Self {
        Self {
            code: ErrorCode::from(&err),
            message: err.to_string(),
        }
    }
}

impl From<GeometryError> for JsValue {
    fn from(err: GeometryError) -> Self {
        err.to_js_object()
    }
}
