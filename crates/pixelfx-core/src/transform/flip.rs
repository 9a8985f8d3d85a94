//! In-place mirror flips. Padding bytes are never moved.

use crate::buffer::{PixelBufferMut, BYTES_PER_PIXEL};

/// Mirror the image left to right.
pub fn flip_horizontal(buffer: &mut PixelBufferMut<'_>) {
    let width = buffer.width() as usize;
    for row in buffer.rows_mut() {
        for x in 0..width / 2 {
            let left = x * BYTES_PER_PIXEL;
            let right = (width - 1 - x) * BYTES_PER_PIXEL;
            for c in 0..BYTES_PER_PIXEL {
                row.swap(left + c, right + c);
            }
        }
    }
}

/// Mirror the image top to bottom.
pub fn flip_vertical(buffer: &mut PixelBufferMut<'_>) {
    let height = buffer.height() as usize;
    let stride = buffer.stride();
    let row_bytes = buffer.layout().row_bytes();
    let data = buffer.raw_mut();

    for y in 0..height / 2 {
        let (top, bottom) = data.split_at_mut((height - 1 - y) * stride);
        let upper = &mut top[y * stride..y * stride + row_bytes];
        upper.swap_with_slice(&mut bottom[..row_bytes]);
    }
}

/// Rotate by 180 degrees in place.
pub fn rotate_half_turn(buffer: &mut PixelBufferMut<'_>) {
    flip_horizontal(buffer);
    flip_vertical(buffer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PixelBuffer;
    use crate::color::Color;

    /// 3x2 image, each pixel gray(10 * index), rows padded to 12 bytes with 0xEE.
    fn padded_image() -> PixelBuffer {
        let mut data = vec![0xEE; 2 * 12];
        for y in 0..2 {
            for x in 0..3 {
                let v = (10 * (y * 3 + x)) as u8;
                let offset = y * 12 + x * 3;
                data[offset..offset + 3].copy_from_slice(&[v, v, v]);
            }
        }
        PixelBuffer::from_raw(3, 2, 12, data).unwrap()
    }

    fn grays(buffer: &PixelBuffer) -> Vec<u8> {
        let mut out = Vec::new();
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                out.push(buffer.pixel(x, y).unwrap().red);
            }
        }
        out
    }

    fn padding(buffer: &PixelBuffer) -> Vec<u8> {
        let bytes = buffer.as_bytes();
        vec![bytes[9], bytes[10], bytes[11], bytes[21], bytes[22], bytes[23]]
    }

    #[test]
    fn test_flip_horizontal() {
        let mut image = padded_image();
        flip_horizontal(&mut image.as_view_mut());
        assert_eq!(grays(&image), vec![20, 10, 0, 50, 40, 30]);
        assert_eq!(padding(&image), vec![0xEE; 6]);
    }

    #[test]
    fn test_flip_vertical() {
        let mut image = padded_image();
        flip_vertical(&mut image.as_view_mut());
        assert_eq!(grays(&image), vec![30, 40, 50, 0, 10, 20]);
        assert_eq!(padding(&image), vec![0xEE; 6]);
    }

    #[test]
    fn test_half_turn() {
        let mut image = padded_image();
        rotate_half_turn(&mut image.as_view_mut());
        assert_eq!(grays(&image), vec![50, 40, 30, 20, 10, 0]);
    }

    #[test]
    fn test_flip_preserves_channel_order() {
        let mut image = PixelBuffer::new(2, 1).unwrap();
        image.set_pixel(0, 0, Color::new(1, 2, 3)).unwrap();
        flip_horizontal(&mut image.as_view_mut());
        assert_eq!(image.pixel(1, 0), Some(Color::new(1, 2, 3)));
        assert_eq!(image.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_double_flip_is_identity() {
        let original = padded_image();
        let mut image = original.clone();
        flip_horizontal(&mut image.as_view_mut());
        flip_horizontal(&mut image.as_view_mut());
        flip_vertical(&mut image.as_view_mut());
        flip_vertical(&mut image.as_view_mut());
        assert_eq!(image, original);
    }

    #[test]
    fn test_single_row_and_column_unchanged_by_matching_flip() {
        let mut row = PixelBuffer::new(4, 1).unwrap();
        row.set_pixel(0, 0, Color::WHITE).unwrap();
        let before = row.clone();
        flip_vertical(&mut row.as_view_mut());
        assert_eq!(row, before);

        let mut column = PixelBuffer::new(1, 4).unwrap();
        column.set_pixel(0, 0, Color::WHITE).unwrap();
        let before = column.clone();
        flip_horizontal(&mut column.as_view_mut());
        assert_eq!(column, before);
    }
}
