//! WASM-compatible wrapper types for pixel buffers.
//!
//! This module provides the JavaScript-facing buffer type and the error
//! conversion shared by every binding.

use std::fmt::Display;

use pixelfx_core::PixelBuffer;
use wasm_bindgen::prelude::*;

/// A 24-bit BGR pixel buffer owned by WASM memory.
///
/// Bytes are laid out exactly as a locked platform bitmap: three bytes per
/// pixel in blue, green, red order, `stride` bytes per row including any
/// alignment padding.
///
/// # Memory Management
///
/// `bytes()` copies the data out to a JavaScript `Uint8Array`. Keep images in
/// WASM memory between operations and only extract bytes for display.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Wrap raw BGR bytes.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `stride` - Bytes per row, at least `width * 3`
    /// * `data` - `stride * height` bytes
    ///
    /// # Errors
    /// Returns an error if the dimensions, stride and length disagree.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, stride: u32, data: Vec<u8>) -> Result<JsPixelBuffer, JsValue> {
        PixelBuffer::from_raw(width, height, stride as usize, data)
            .map(Self::from_core)
            .map_err(to_js_error)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes per row, padding included
    #[wasm_bindgen(getter)]
    pub fn stride(&self) -> u32 {
        self.inner.stride() as u32
    }

    /// Get the total number of bytes (stride * height)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.as_bytes().len()
    }

    /// Returns the raw BGR bytes as Uint8Array (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.as_bytes().to_vec()
    }

    /// Deep copy, e.g. to keep an "original" for undo.
    #[wasm_bindgen(js_name = clone)]
    pub fn duplicate(&self) -> JsPixelBuffer {
        Self::from_core(self.inner.clone())
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelBuffer {
    pub(crate) fn from_core(inner: PixelBuffer) -> Self {
        Self { inner }
    }

    pub(crate) fn core(&self) -> &PixelBuffer {
        &self.inner
    }

    pub(crate) fn core_mut(&mut self) -> &mut PixelBuffer {
        &mut self.inner
    }
}

/// Convert any core error into a JavaScript exception value.
pub(crate) fn to_js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
