//! History bindings for thumbnail previews.
//!
//! Keeps deep copies of the last few images so the UI can show them in a
//! fixed row of thumbnail slots, oldest first.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const history = new JsImageHistory();      // capacity 5
//! history.push(image);                       // snapshot before processing
//! apply_operation(image, { type: "invert" });
//! history.thumbnails().forEach((thumb, slot) => draw(slot, thumb));
//! ```

use crate::types::JsPixelBuffer;
use pixelfx_core::{BoundedHistory, PixelBuffer};
use wasm_bindgen::prelude::*;

/// Bounded history of image snapshots.
#[wasm_bindgen]
pub struct JsImageHistory {
    inner: BoundedHistory<PixelBuffer>,
}

#[wasm_bindgen]
impl JsImageHistory {
    /// Create a history holding `capacity` images (default 5).
    ///
    /// # Errors
    /// Returns an error if `capacity` is zero.
    #[wasm_bindgen(constructor)]
    pub fn new(capacity: Option<u32>) -> Result<JsImageHistory, JsValue> {
        let inner = match capacity {
            Some(capacity) => BoundedHistory::new(capacity as usize)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => BoundedHistory::default(),
        };
        Ok(JsImageHistory { inner })
    }

    /// Store a copy of `image` as the newest entry.
    ///
    /// # Returns
    /// `true` if the oldest entry was evicted to make room.
    pub fn push(&mut self, image: &JsPixelBuffer) -> bool {
        self.inner.push(image.core().clone()).is_some()
    }

    /// Number of stored images.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Copy of the image at `index`, counted from the oldest.
    pub fn get(&self, index: usize) -> Option<JsPixelBuffer> {
        self.inner.get(index).cloned().map(JsPixelBuffer::from_core)
    }

    /// Copies of all stored images, oldest first.
    pub fn thumbnails(&self) -> js_sys::Array {
        self.inner
            .items()
            .cloned()
            .map(|image| JsValue::from(JsPixelBuffer::from_core(image)))
            .collect()
    }
}
