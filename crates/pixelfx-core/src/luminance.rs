//! Luma calculation using ITU-R BT.709 (HDTV) coefficients.
//!
//! Grayscale conversion weights the channels by how strongly the eye perceives
//! each wavelength rather than averaging them.

use crate::clamp::to_channel;

/// BT.709 coefficient for the red channel.
pub const LUMA_R: f64 = 0.2126;

/// BT.709 coefficient for the green channel.
pub const LUMA_G: f64 = 0.7152;

/// BT.709 coefficient for the blue channel.
pub const LUMA_B: f64 = 0.0722;

/// Weighted luma of 8-bit channels, unrounded (0.0 to 255.0).
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64
}

/// Luma of 8-bit channels, rounded and clamped to a channel byte.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    to_channel(luma(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMA_R + LUMA_G + LUMA_B;
        assert!((sum - 1.0).abs() < 1e-12, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma_u8(0, 0, 0), 0);
        assert_eq!(luma_u8(255, 255, 255), 255);
    }

    #[test]
    fn test_gray_preserves_value() {
        for v in 0..=255u8 {
            assert_eq!(luma_u8(v, v, v), v, "gray {} should map to itself", v);
        }
    }

    #[test]
    fn test_primaries() {
        // 0.2126 * 255 = 54.213
        assert_eq!(luma_u8(255, 0, 0), 54);
        // 0.7152 * 255 = 182.376
        assert_eq!(luma_u8(0, 255, 0), 182);
        // 0.0722 * 255 = 18.411
        assert_eq!(luma_u8(0, 0, 255), 18);
    }
}
