//! Per-pixel transformation engine.
//!
//! Rewrites every pixel of a stride-aware BGR buffer in place.
//!
//! ## Traversal
//! Rows are visited top to bottom and pixels left to right, but no algorithm
//! reads a neighbouring pixel: each output is a pure function of the pixel's
//! own three bytes and the operation parameters. With the `parallel` feature
//! rows are distributed across the rayon thread pool and the result is
//! byte-identical to the serial path.
//!
//! ## Failure model
//! Parameters are validated before the first pixel is read. A rejected
//! operation leaves the buffer untouched.

use tracing::{debug, warn};

use crate::buffer::{PixelBuffer, PixelBufferMut, BYTES_PER_PIXEL};
use crate::clamp::{to_channel, MAX_CHANNEL, MIN_CHANNEL};
use crate::color::Color;
use crate::error::Result;
use crate::gamma::GammaTables;
use crate::luminance::luma_u8;
use crate::operation::{Operation, ToleranceParams};

/// Apply `op` to every pixel of `buffer` in place.
///
/// Returns the same buffer so calls can be chained.
///
/// # Errors
/// [`ProcessError::InvalidParameter`](crate::ProcessError::InvalidParameter)
/// when the operation's parameters are out of range. The buffer is not
/// modified in that case.
///
/// # Example
/// ```ignore
/// let mut data = vec![30, 20, 10];
/// let mut view = PixelBufferMut::new(&mut data, 1, 1, 3)?;
/// apply(&mut view, &Operation::Invert)?;
/// assert_eq!(data, vec![225, 235, 245]);
/// ```
pub fn apply<'b, 'a>(
    buffer: &'b mut PixelBufferMut<'a>,
    op: &Operation,
) -> Result<&'b mut PixelBufferMut<'a>> {
    if let Err(err) = op.validate() {
        warn!(kind = %op.kind(), error = %err, "rejected operation before traversal");
        return Err(err);
    }

    debug!(
        kind = %op.kind(),
        width = buffer.width(),
        height = buffer.height(),
        stride = buffer.stride(),
        "applying operation"
    );

    traverse(buffer, op);
    Ok(buffer)
}

/// Transform a copy of `source`, leaving the original untouched.
pub fn apply_to_copy(source: &PixelBuffer, op: &Operation) -> Result<PixelBuffer> {
    op.validate()?;
    let mut copy = source.clone();
    copy.apply(op)?;
    Ok(copy)
}

/// Compute the new colour of a single pixel.
///
/// The caller is responsible for validating `op` first.
#[inline]
pub fn transform_pixel(color: Color, op: &Operation) -> Color {
    match op {
        Operation::RedChannelOnly => red_channel_only(color),
        Operation::GreenChannelOnly => green_channel_only(color),
        Operation::BlueChannelOnly => blue_channel_only(color),
        Operation::Grayscale => grayscale(color),
        Operation::Invert => invert(color),
        Operation::Brightness(delta) => brightness(color, *delta),
        Operation::Contrast(factor) => contrast(color, *factor),
        Operation::Gamma(tables) => gamma(color, tables),
        Operation::ToleranceDetect(params) => detect_tolerance(color, params),
    }
}

#[cfg(not(feature = "parallel"))]
fn traverse(buffer: &mut PixelBufferMut<'_>, op: &Operation) {
    for row in buffer.rows_mut() {
        transform_row(row, op);
    }
}

#[cfg(feature = "parallel")]
fn traverse(buffer: &mut PixelBufferMut<'_>, op: &Operation) {
    use rayon::prelude::*;

    let stride = buffer.stride();
    let row_bytes = buffer.layout().row_bytes();
    buffer
        .raw_mut()
        .par_chunks_exact_mut(stride)
        .for_each(|row| transform_row(&mut row[..row_bytes], op));
}

/// Transform one row of packed BGR pixels (padding already stripped).
#[inline]
fn transform_row(row: &mut [u8], op: &Operation) {
    for px in row.chunks_exact_mut(BYTES_PER_PIXEL) {
        let color = transform_pixel(Color::from_bgr([px[0], px[1], px[2]]), op);
        px.copy_from_slice(&color.to_bgr());
    }
}

// ============================================================================
// Algorithms
// ============================================================================

#[inline]
fn red_channel_only(color: Color) -> Color {
    Color::new(color.red, MIN_CHANNEL, MIN_CHANNEL)
}

#[inline]
fn green_channel_only(color: Color) -> Color {
    Color::new(MIN_CHANNEL, color.green, MIN_CHANNEL)
}

#[inline]
fn blue_channel_only(color: Color) -> Color {
    Color::new(MIN_CHANNEL, MIN_CHANNEL, color.blue)
}

/// BT.709 luma in every channel.
#[inline]
fn grayscale(color: Color) -> Color {
    Color::gray(luma_u8(color.red, color.green, color.blue))
}

#[inline]
fn invert(color: Color) -> Color {
    Color::new(
        MAX_CHANNEL - color.red,
        MAX_CHANNEL - color.green,
        MAX_CHANNEL - color.blue,
    )
}

#[inline]
fn brightness(color: Color, delta: i32) -> Color {
    let shift = |c: u8| to_channel(c as i32 + delta);
    Color::new(shift(color.red), shift(color.green), shift(color.blue))
}

/// Formula: `out = ((in / 255 - 0.5) * factor + 0.5) * 255`
#[inline]
fn contrast(color: Color, factor: f64) -> Color {
    let max = MAX_CHANNEL as f64;
    let stretch = |c: u8| {
        let v = (c as f64 / max - 0.5) * factor + 0.5;
        to_channel(v * max)
    };
    Color::new(stretch(color.red), stretch(color.green), stretch(color.blue))
}

#[inline]
fn gamma(color: Color, tables: &GammaTables) -> Color {
    Color::new(
        tables.red.lookup(color.red),
        tables.green.lookup(color.green),
        tables.blue.lookup(color.blue),
    )
}

/// White when the squared RGB distance to the target is within
/// `tolerance^2`, black otherwise.
#[inline]
fn detect_tolerance(color: Color, params: &ToleranceParams) -> Color {
    let diff = |c: u8, target: u8| {
        let d = c as i64 - target as i64;
        d * d
    };
    let distance = diff(color.red, params.red)
        + diff(color.green, params.green)
        + diff(color.blue, params.blue);

    if distance > params.tolerance_squared() {
        Color::BLACK
    } else {
        Color::WHITE
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
