//! Gamma table bindings.
//!
//! Lets the UI preview a gamma curve (e.g. draw it next to a slider) using
//! the same table the engine applies.

use crate::types::to_js_error;
use pixelfx_core::gamma::{GammaTable, MAX_GAMMA, MIN_GAMMA};
use wasm_bindgen::prelude::*;

/// Build the 256-entry lookup table for `gamma`.
///
/// # Errors
/// Returns an error if `gamma` is not a finite positive number.
#[wasm_bindgen]
pub fn build_gamma_table(gamma: f64) -> Result<Vec<u8>, JsValue> {
    GammaTable::from_gamma(gamma)
        .map(Vec::from)
        .map_err(to_js_error)
}

/// Smallest gamma the UI slider should offer.
#[wasm_bindgen]
pub fn min_gamma() -> f64 {
    MIN_GAMMA
}

/// Largest gamma the UI slider should offer.
#[wasm_bindgen]
pub fn max_gamma() -> f64 {
    MAX_GAMMA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_identity_table() {
        let table = build_gamma_table(1.0).unwrap();
        assert_eq!(table.len(), 256);
        assert!(table.iter().enumerate().all(|(i, &v)| v == i as u8));
    }

    #[test]
    fn test_slider_range() {
        assert!(min_gamma() < 1.0);
        assert!(max_gamma() > 1.0);
    }
}
