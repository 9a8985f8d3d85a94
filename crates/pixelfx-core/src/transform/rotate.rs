//! Quarter-turn rotations.
//!
//! For a `w x h` source, the output is `h x w` with no row padding:
//! ```text
//! clockwise:          dst(h - 1 - y, x)     = src(x, y)
//! counter-clockwise:  dst(y, w - 1 - x)     = src(x, y)
//! ```

use crate::buffer::{PixelBuffer, BYTES_PER_PIXEL};
use crate::error::Result;

#[derive(Clone, Copy)]
enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Rotate 90 degrees clockwise into a new buffer.
pub fn rotate_clockwise(source: &PixelBuffer) -> Result<PixelBuffer> {
    rotate(source, Direction::Clockwise)
}

/// Rotate 90 degrees counter-clockwise into a new buffer.
pub fn rotate_counter_clockwise(source: &PixelBuffer) -> Result<PixelBuffer> {
    rotate(source, Direction::CounterClockwise)
}

fn rotate(source: &PixelBuffer, direction: Direction) -> Result<PixelBuffer> {
    let (src_w, src_h) = (source.width() as usize, source.height() as usize);
    let (dst_w, dst_h) = (src_h, src_w);
    let dst_stride = dst_w * BYTES_PER_PIXEL;
    let mut output = vec![0u8; dst_stride * dst_h];

    for (y, row) in source.rows().enumerate() {
        for (x, px) in row.chunks_exact(BYTES_PER_PIXEL).enumerate() {
            let (dst_x, dst_y) = match direction {
                Direction::Clockwise => (src_h - 1 - y, x),
                Direction::CounterClockwise => (y, src_w - 1 - x),
            };
            let dst_idx = dst_y * dst_stride + dst_x * BYTES_PER_PIXEL;
            output[dst_idx..dst_idx + BYTES_PER_PIXEL].copy_from_slice(px);
        }
    }

    PixelBuffer::from_raw(dst_w as u32, dst_h as u32, dst_stride, output)
}
