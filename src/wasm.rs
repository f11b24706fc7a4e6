//! WASM bindings for shape-ascii.
//!
//! Exposes the demo and the single-shape renderers to JavaScript via
//! wasm-bindgen. Dimensions cross the boundary as `i32` and are widened
//! before validation.

use wasm_bindgen::prelude::*;

use crate::shapes::{Circle, Rectangle, Shape, Triangle, TriangleKind};

/// Render the full shape demo as one string.
#[wasm_bindgen(js_name = "renderDemo")]
pub fn render_demo() -> String {
    crate::render_demo()
}

/// Render a filled circle with the given radius.
#[wasm_bindgen(js_name = "renderCircle")]
pub fn render_circle(radius: i32) -> String {
    Circle::new(i64::from(radius)).render_to_string()
}

/// Render a filled rectangle with the given width and height.
#[wasm_bindgen(js_name = "renderRect")]
pub fn render_rect(width: i32, height: i32) -> String {
    Rectangle::new(i64::from(width), i64::from(height)).render_to_string()
}

/// Render a filled triangle.
///
/// - `height`: rows in the triangle
/// - `kind`: "right", "equilateral", "isosceles", or "inverted"
#[wasm_bindgen(js_name = "renderTriangle")]
pub fn render_triangle(height: i32, kind: &str) -> Result<String, JsError> {
    let kind: TriangleKind = kind.parse().map_err(|e: String| JsError::new(&e))?;
    Ok(Triangle::new(i64::from(height), kind).render_to_string())
}
