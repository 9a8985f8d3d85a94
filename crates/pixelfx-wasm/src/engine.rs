//! Per-pixel operation bindings.
//!
//! Operations can be passed as a plain object matching the core serde
//! representation, or through the typed entry points that mirror the UI's
//! individual menu commands.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! apply_operation(image, { type: "brightness", value: 40 });
//! apply_operation(image, { type: "grayscale" });
//! apply_simple_operation(image, 4); // invert
//! apply_gamma(image, 1.0, 2.2, 1.0);
//! ```

use crate::types::{to_js_error, JsPixelBuffer};
use pixelfx_core::{apply_to_copy, Operation, OperationKind, PixelBuffer};
use wasm_bindgen::prelude::*;

/// Apply an operation object in place.
///
/// # Errors
/// Returns an error if the object does not describe a known operation or its
/// parameters are out of range. The image is unchanged in that case.
#[wasm_bindgen]
pub fn apply_operation(image: &mut JsPixelBuffer, operation: JsValue) -> Result<(), JsValue> {
    let op = parse_operation(operation)?;
    image.core_mut().apply(&op).map_err(to_js_error)?;
    Ok(())
}

/// Apply an operation object to a copy, leaving `image` untouched.
#[wasm_bindgen]
pub fn apply_operation_to_copy(
    image: &JsPixelBuffer,
    operation: JsValue,
) -> Result<JsPixelBuffer, JsValue> {
    let op = parse_operation(operation)?;
    apply_to_copy(image.core(), &op)
        .map(JsPixelBuffer::from_core)
        .map_err(to_js_error)
}

/// Apply a parameterless operation by numeric code.
///
/// Codes: 0 = red only, 1 = green only, 2 = blue only, 3 = grayscale,
/// 4 = invert. Codes of parameterized operations are rejected.
#[wasm_bindgen]
pub fn apply_simple_operation(image: &mut JsPixelBuffer, code: u8) -> Result<(), JsValue> {
    run_simple(image.core_mut(), code).map_err(to_js_error)
}

/// Add `delta` (-255 to 255) to every channel.
#[wasm_bindgen]
pub fn apply_brightness(image: &mut JsPixelBuffer, delta: i32) -> Result<(), JsValue> {
    run(image.core_mut(), Operation::brightness(delta)).map_err(to_js_error)
}

/// Scale each channel's distance from mid-gray by `factor`.
#[wasm_bindgen]
pub fn apply_contrast(image: &mut JsPixelBuffer, factor: f64) -> Result<(), JsValue> {
    run(image.core_mut(), Operation::contrast(factor)).map_err(to_js_error)
}

/// Gamma-correct each channel with its own gamma value.
#[wasm_bindgen]
pub fn apply_gamma(image: &mut JsPixelBuffer, red: f64, green: f64, blue: f64) -> Result<(), JsValue> {
    run(image.core_mut(), Operation::gamma(red, green, blue)).map_err(to_js_error)
}

/// Turn pixels within `tolerance` of the target colour white, others black.
#[wasm_bindgen]
pub fn apply_tolerance_detect(
    image: &mut JsPixelBuffer,
    red: u8,
    green: u8,
    blue: u8,
    tolerance: i32,
) -> Result<(), JsValue> {
    run(
        image.core_mut(),
        Operation::tolerance_detect(red, green, blue, tolerance),
    )
    .map_err(to_js_error)
}

fn parse_operation(operation: JsValue) -> Result<Operation, JsValue> {
    serde_wasm_bindgen::from_value(operation)
        .map_err(|e| JsValue::from_str(&format!("Invalid operation: {}", e)))
}

fn run(image: &mut PixelBuffer, op: pixelfx_core::Result<Operation>) -> pixelfx_core::Result<()> {
    image.apply(&op?)?;
    Ok(())
}

fn run_simple(image: &mut PixelBuffer, code: u8) -> pixelfx_core::Result<()> {
    let op = OperationKind::try_from(code)?.to_operation()?;
    run(image, Ok(op))
}
