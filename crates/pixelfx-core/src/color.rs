//! Per-pixel colour value.

use serde::{Deserialize, Serialize};

use crate::clamp::{MAX_CHANNEL, MIN_CHANNEL};

/// A single pixel's three 8-bit channels.
///
/// Created from buffer bytes, rewritten by an algorithm, then stored back.
/// Buffers keep channels in blue, green, red order; use [`Color::from_bgr`]
/// and [`Color::to_bgr`] at that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::gray(MIN_CHANNEL);
    pub const WHITE: Color = Color::gray(MAX_CHANNEL);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// A colour with all three channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Read a colour from a `[blue, green, red]` byte triple.
    #[inline]
    pub const fn from_bgr(bytes: [u8; 3]) -> Self {
        Self::new(bytes[2], bytes[1], bytes[0])
    }

    /// Encode as a `[blue, green, red]` byte triple.
    #[inline]
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [red, green, blue] = pixel.0;
        Self { red, green, blue }
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.red, color.green, color.blue])
    }
}
