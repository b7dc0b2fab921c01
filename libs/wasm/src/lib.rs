//! WASM-facing entry points for the roof and ramp generators.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests call the `*_internal` helpers, which return
//! Rust errors and never touch a JS host.
//!
//! ```
//! let mesh = roof_wasm::build_geometry_internal(r#"{"kind": "pyramid"}"#).unwrap();
//! assert_eq!(mesh.vertex_count(), 18);
//! ```

use config::constants::DEFAULT_SEGMENTS;
use footprint::Polygon2D;
use roof_mesh::{generate, MeshResult, ShapeKind, ShapeOptions, ShapeParameters};
use wasm_bindgen::prelude::*;

mod diagnostics;
mod geometry_handle;

pub use diagnostics::{ErrorCode, GeometryError};
pub use geometry_handle::GeometryHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "roof_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default number of rounded-roof cuts.
///
/// # Examples
/// ```
/// assert_eq!(roof_wasm::default_segments(), 1);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    DEFAULT_SEGMENTS
}

/// Builds the solid described by a parameter JSON document.
///
/// # Errors
/// Returns a plain `{ code, message }` object when the JSON is malformed,
/// the options are out of range, or the footprint is unusable.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = build_geometry(JSON.stringify({
/// //   kind: "wedge",
/// //   shape: { outer: [[0, 0], [4, 0], [4, 2], [0, 2]] },
/// //   options: { depth: 1.5, center: [2, 1] },
/// // }));
/// ```
#[wasm_bindgen]
pub fn build_geometry(parameters_json: &str) -> Result<GeometryHandle, JsValue> {
    build_geometry_internal(parameters_json).map_err(|err| GeometryError::from(err).into())
}

/// Host-only helper behind [`build_geometry`].
pub fn build_geometry_internal(parameters_json: &str) -> MeshResult<GeometryHandle> {
    let params = ShapeParameters::from_json(parameters_json)?;
    Ok(params.build()?.into())
}

/// Builds one shape from separate footprint and options documents.
///
/// `kind` is one of `hipped`, `ramp`, `wedge`, `rounded`, `pyramid`. An empty
/// footprint document means the unit square; an empty options document means
/// the defaults.
#[wasm_bindgen]
pub fn build_shape(
    kind: &str,
    shape_json: &str,
    options_json: &str,
) -> Result<GeometryHandle, JsValue> {
    build_shape_internal(kind, shape_json, options_json)
        .map_err(|err| GeometryError::from(err).into())
}

/// Host-only helper behind [`build_shape`].
pub fn build_shape_internal(
    kind: &str,
    shape_json: &str,
    options_json: &str,
) -> MeshResult<GeometryHandle> {
    let kind: ShapeKind = serde_json::from_value(serde_json::Value::from(kind))?;
    build_kind(kind, shape_json, options_json)
}

fn build_kind(kind: ShapeKind, shape_json: &str, options_json: &str) -> MeshResult<GeometryHandle> {
    let shape: Polygon2D = parse_or_default(shape_json)?;
    let options: ShapeOptions = parse_or_default(options_json)?;
    Ok(generate(kind, &shape, &options)?.into())
}

fn parse_or_default<T>(json: &str) -> MeshResult<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    if json.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(json)?)
}

/// Hipped roof over a footprint.
#[wasm_bindgen]
pub fn hipped_roof(shape_json: &str, options_json: &str) -> Result<GeometryHandle, JsValue> {
    build_kind(ShapeKind::Hipped, shape_json, options_json)
        .map_err(|err| GeometryError::from(err).into())
}

/// Single-slope ramp over a footprint.
#[wasm_bindgen]
pub fn ramp(shape_json: &str, options_json: &str) -> Result<GeometryHandle, JsValue> {
    build_kind(ShapeKind::Ramp, shape_json, options_json)
        .map_err(|err| GeometryError::from(err).into())
}

/// Two-slope wedge roof over a footprint.
#[wasm_bindgen]
pub fn wedge_roof(shape_json: &str, options_json: &str) -> Result<GeometryHandle, JsValue> {
    build_kind(ShapeKind::Wedge, shape_json, options_json)
        .map_err(|err| GeometryError::from(err).into())
}

/// Arched roof over a footprint.
#[wasm_bindgen]
pub fn rounded_roof(shape_json: &str, options_json: &str) -> Result<GeometryHandle, JsValue> {
    build_kind(ShapeKind::Rounded, shape_json, options_json)
        .map_err(|err| GeometryError::from(err).into())
}

/// Pyramid over a footprint.
#[wasm_bindgen]
pub fn pyramid_roof(shape_json: &str, options_json: &str) -> Result<GeometryHandle, JsValue> {
    build_kind(ShapeKind::Pyramid, shape_json, options_json)
        .map_err(|err| GeometryError::from(err).into())
}
