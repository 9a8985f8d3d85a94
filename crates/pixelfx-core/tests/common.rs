//! Shared helpers for integration tests.

#![allow(dead_code)]

use pixelfx_core::{GammaTables, Operation, PixelBuffer};

/// Byte written into row padding so tests can detect stray writes.
pub const SENTINEL: u8 = 0xA5;

/// Build a `width x height` buffer with `padding` extra bytes per row.
///
/// Pixel bytes follow a position-dependent pattern; padding bytes are
/// [`SENTINEL`].
pub fn patterned_buffer(width: u32, height: u32, padding: usize) -> PixelBuffer {
    let row_bytes = width as usize * 3;
    let stride = row_bytes + padding;
    let mut data = vec![SENTINEL; stride * height as usize];
    for y in 0..height as usize {
        for i in 0..row_bytes {
            data[y * stride + i] = ((y * 31 + i * 7) % 256) as u8;
        }
    }
    PixelBuffer::from_raw(width, height, stride, data).expect("valid test layout")
}

/// Collect the padding bytes of every row.
pub fn padding_bytes(buffer: &PixelBuffer) -> Vec<u8> {
    let row_bytes = buffer.width() as usize * 3;
    buffer
        .as_bytes()
        .chunks_exact(buffer.stride())
        .flat_map(|row| row[row_bytes..].to_vec())
        .collect()
}

/// One instance of every operation kind with representative parameters.
pub fn all_operations() -> Vec<Operation> {
    vec![
        Operation::RedChannelOnly,
        Operation::GreenChannelOnly,
        Operation::BlueChannelOnly,
        Operation::Grayscale,
        Operation::Invert,
        Operation::Brightness(60),
        Operation::Brightness(-60),
        Operation::Contrast(1.8),
        Operation::Contrast(-0.5),
        Operation::Gamma(GammaTables::from_gammas(0.4, 1.0, 2.2).expect("valid gammas")),
        Operation::tolerance_detect(120, 60, 200, 90).expect("valid tolerance"),
    ]
}
