//! WASM bindings for rotations and flips.
//!
//! Flips modify the image in place; quarter-turn rotations return a new
//! image because width and height swap.

use crate::types::{to_js_error, JsPixelBuffer};
use pixelfx_core::transform;
use wasm_bindgen::prelude::*;

/// Mirror the image left to right in place.
#[wasm_bindgen]
pub fn flip_horizontal(image: &mut JsPixelBuffer) {
    transform::flip_horizontal(&mut image.core_mut().as_view_mut());
}

/// Mirror the image top to bottom in place.
#[wasm_bindgen]
pub fn flip_vertical(image: &mut JsPixelBuffer) {
    transform::flip_vertical(&mut image.core_mut().as_view_mut());
}

/// Rotate 90 degrees clockwise.
///
/// # Returns
/// New tightly packed `JsPixelBuffer` with swapped dimensions.
#[wasm_bindgen]
pub fn rotate_clockwise(image: &JsPixelBuffer) -> Result<JsPixelBuffer, JsValue> {
    transform::rotate_clockwise(image.core())
        .map(JsPixelBuffer::from_core)
        .map_err(to_js_error)
}

/// Rotate 90 degrees counter-clockwise.
#[wasm_bindgen]
pub fn rotate_counter_clockwise(image: &JsPixelBuffer) -> Result<JsPixelBuffer, JsValue> {
    transform::rotate_counter_clockwise(image.core())
        .map(JsPixelBuffer::from_core)
        .map_err(to_js_error)
}
