//! PixelFX WASM - WebAssembly bindings for PixelFX
//!
//! This crate exposes the pixelfx-core engine to a JavaScript/TypeScript UI.
//! The UI decodes images itself and hands raw BGR bytes across.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible pixel buffer wrapper
//! - `engine` - Per-pixel operations (channel filters, grayscale, gamma, ...)
//! - `gamma` - Gamma table construction for UI previews
//! - `transform` - Rotations and flips
//! - `history` - Bounded history of image snapshots
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsPixelBuffer, JsImageHistory, apply_operation } from '@pixelfx/wasm';
//!
//! await init();
//!
//! const image = new JsPixelBuffer(width, height, stride, bgrBytes);
//! const history = new JsImageHistory();
//! history.push(image);
//! apply_operation(image, { type: "contrast", value: 1.4 });
//! ```

use wasm_bindgen::prelude::*;

mod engine;
mod gamma;
mod history;
mod transform;
mod types;

// Re-export public types
pub use engine::{
    apply_brightness, apply_contrast, apply_gamma, apply_operation, apply_operation_to_copy,
    apply_simple_operation, apply_tolerance_detect,
};
pub use gamma::{build_gamma_table, max_gamma, min_gamma};
pub use history::JsImageHistory;
pub use transform::{flip_horizontal, flip_vertical, rotate_clockwise, rotate_counter_clockwise};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
