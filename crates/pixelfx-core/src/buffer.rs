//! Stride-aware 24-bit pixel buffers.
//!
//! Pixels are stored as three bytes in **blue, green, red** order. Each row
//! occupies `stride` bytes, of which only the first `width * 3` carry pixel
//! data; the remainder is alignment padding that no operation reads or writes.
//!
//! ```text
//! row y:  [B G R][B G R] ... [B G R][pad pad]
//!         ^ y * stride               ^ y * stride + width * 3
//! ```
//!
//! Two containers share the same layout rules:
//! - [`PixelBuffer`] owns its bytes.
//! - [`PixelBufferMut`] borrows bytes owned by the caller (for example memory
//!   locked from a platform bitmap).

use image::RgbImage;

use crate::color::Color;
use crate::error::{ProcessError, Result};
use crate::Operation;

/// Bytes per pixel for packed 24-bit storage.
pub const BYTES_PER_PIXEL: usize = 3;

/// Validated geometry of a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLayout {
    width: u32,
    height: u32,
    stride: usize,
}

impl BufferLayout {
    /// Validate a layout.
    ///
    /// Fails when a dimension is zero, when `stride < width * 3`, or when the
    /// total byte count does not fit in `usize`.
    pub fn new(width: u32, height: u32, stride: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ProcessError::BufferShape(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let row_bytes = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or_else(|| ProcessError::BufferShape(format!("width {} overflows", width)))?;
        if stride < row_bytes {
            return Err(ProcessError::BufferShape(format!(
                "stride {} is smaller than {} bytes of pixel data per row",
                stride, row_bytes
            )));
        }
        stride.checked_mul(height as usize).ok_or_else(|| {
            ProcessError::BufferShape(format!("{} rows of {} bytes overflow", height, stride))
        })?;

        Ok(Self {
            width,
            height,
            stride,
        })
    }

    /// Layout without row padding (`stride == width * 3`).
    pub fn packed(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, width as usize * BYTES_PER_PIXEL)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Bytes of pixel data in one row, excluding padding.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Total buffer length: `stride * height`.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.stride * self.height as usize
    }

    /// Whether rows carry padding bytes.
    #[inline]
    pub fn is_padded(&self) -> bool {
        self.stride > self.row_bytes()
    }

    /// Byte offset of pixel `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn pixel_offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.stride + x as usize * BYTES_PER_PIXEL)
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len != self.byte_len() {
            return Err(ProcessError::BufferShape(format!(
                "expected {} bytes ({} rows of stride {}), got {}",
                self.byte_len(),
                self.height,
                self.stride,
                len
            )));
        }
        Ok(())
    }

    fn read(&self, data: &[u8], x: u32, y: u32) -> Option<Color> {
        let offset = self.pixel_offset(x, y)?;
        let bytes = data.get(offset..offset + BYTES_PER_PIXEL)?;
        Some(Color::from_bgr([bytes[0], bytes[1], bytes[2]]))
    }

    fn write(&self, data: &mut [u8], x: u32, y: u32, color: Color) -> Result<()> {
        let offset = self.pixel_offset(x, y).ok_or_else(|| {
            ProcessError::invalid(
                "coordinates",
                format!(
                    "pixel ({}, {}) is outside a {}x{} image",
                    x, y, self.width, self.height
                ),
            )
        })?;
        data[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&color.to_bgr());
        Ok(())
    }
}

/// An owned 24-bit BGR pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    layout: BufferLayout,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a black, tightly packed buffer.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let layout = BufferLayout::packed(width, height)?;
        Ok(Self {
            layout,
            data: vec![0; layout.byte_len()],
        })
    }

    /// Allocate a black buffer whose rows are `stride` bytes long.
    pub fn with_stride(width: u32, height: u32, stride: usize) -> Result<Self> {
        let layout = BufferLayout::new(width, height, stride)?;
        Ok(Self {
            layout,
            data: vec![0; layout.byte_len()],
        })
    }

    /// Adopt raw BGR bytes laid out with the given stride.
    pub fn from_raw(width: u32, height: u32, stride: usize, data: Vec<u8>) -> Result<Self> {
        let layout = BufferLayout::new(width, height, stride)?;
        layout.check_len(data.len())?;
        Ok(Self { layout, data })
    }

    /// Copy an `image` RGB buffer into packed BGR storage.
    pub fn from_rgb_image(image: &RgbImage) -> Result<Self> {
        let layout = BufferLayout::packed(image.width(), image.height())?;
        let mut data = Vec::with_capacity(layout.byte_len());
        for rgb in image.as_raw().chunks_exact(BYTES_PER_PIXEL) {
            data.extend_from_slice(&[rgb[2], rgb[1], rgb[0]]);
        }
        Ok(Self { layout, data })
    }

    /// Copy the pixel data into an `image` RGB buffer, dropping row padding.
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut image = RgbImage::new(self.width(), self.height());
        for (y, row) in self.rows().enumerate() {
            for (x, bgr) in row.chunks_exact(BYTES_PER_PIXEL).enumerate() {
                image.put_pixel(x as u32, y as u32, image::Rgb([bgr[2], bgr[1], bgr[0]]));
            }
        }
        image
    }

    #[inline]
    pub fn layout(&self) -> BufferLayout {
        self.layout
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.layout.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.layout.stride
    }

    /// All bytes, padding included.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Give up ownership of the raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Colour of pixel `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.layout.read(&self.data, x, y)
    }

    /// Overwrite pixel `(x, y)`.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.layout.write(&mut self.data, x, y, color)
    }

    /// Iterate the pixel-data portion of each row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let row_bytes = self.layout.row_bytes();
        self.data
            .chunks_exact(self.layout.stride)
            .map(move |row| &row[..row_bytes])
    }

    /// Borrow this buffer as a mutable view.
    pub fn as_view_mut(&mut self) -> PixelBufferMut<'_> {
        PixelBufferMut {
            layout: self.layout,
            data: &mut self.data,
        }
    }

    /// Transform the buffer in place, returning it for chaining.
    ///
    /// See [`crate::engine::apply`].
    pub fn apply(&mut self, op: &Operation) -> Result<&mut Self> {
        crate::engine::apply(&mut self.as_view_mut(), op)?;
        Ok(self)
    }
}

/// A mutable view over caller-owned 24-bit BGR bytes.
#[derive(Debug)]
pub struct PixelBufferMut<'a> {
    layout: BufferLayout,
    data: &'a mut [u8],
}

impl<'a> PixelBufferMut<'a> {
    /// Wrap caller memory, validating that `data.len() == stride * height`.
    pub fn new(data: &'a mut [u8], width: u32, height: u32, stride: usize) -> Result<Self> {
        let layout = BufferLayout::new(width, height, stride)?;
        layout.check_len(data.len())?;
        Ok(Self { layout, data })
    }

    #[inline]
    pub fn layout(&self) -> BufferLayout {
        self.layout
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.layout.height
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.layout.stride
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &*self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.layout.read(&*self.data, x, y)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.layout.write(&mut *self.data, x, y, color)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let row_bytes = self.layout.row_bytes();
        self.data
            .chunks_exact(self.layout.stride)
            .map(move |row| &row[..row_bytes])
    }

    /// Iterate the pixel-data portion of each row mutably.
    ///
    /// Padding bytes are excluded from every yielded slice.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> + '_ {
        let row_bytes = self.layout.row_bytes();
        self.data
            .chunks_exact_mut(self.layout.stride)
            .map(move |row| &mut row[..row_bytes])
    }

    /// Whole-buffer access, padding included.
    pub(crate) fn raw_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_rejects_zero_dimensions() {
        assert!(matches!(
            BufferLayout::new(0, 4, 12),
            Err(ProcessError::BufferShape(_))
        ));
        assert!(matches!(
            BufferLayout::new(4, 0, 12),
            Err(ProcessError::BufferShape(_))
        ));
    }

    #[test]
    fn test_layout_rejects_short_stride() {
        assert!(BufferLayout::new(4, 2, 11).is_err());
        assert!(BufferLayout::new(4, 2, 12).is_ok());
        assert!(BufferLayout::new(4, 2, 16).is_ok());
    }

    #[test]
    fn test_layout_offsets() {
        let layout = BufferLayout::new(3, 2, 12).unwrap();
        assert_eq!(layout.row_bytes(), 9);
        assert_eq!(layout.byte_len(), 24);
        assert!(layout.is_padded());
        assert_eq!(layout.pixel_offset(0, 0), Some(0));
        assert_eq!(layout.pixel_offset(2, 0), Some(6));
        assert_eq!(layout.pixel_offset(1, 1), Some(15));
        assert_eq!(layout.pixel_offset(3, 0), None);
        assert_eq!(layout.pixel_offset(0, 2), None);
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        let err = PixelBuffer::from_raw(2, 2, 8, vec![0; 15]).unwrap_err();
        assert!(matches!(err, ProcessError::BufferShape(_)));
        assert!(PixelBuffer::from_raw(2, 2, 8, vec![0; 16]).is_ok());
    }

    #[test]
    fn test_view_rejects_wrong_length() {
        let mut data = vec![0u8; 10];
        assert!(PixelBufferMut::new(&mut data, 1, 3, 4).is_err());
    }

    #[test]
    fn test_pixel_reads_bgr() {
        let buffer = PixelBuffer::from_raw(1, 1, 3, vec![30, 20, 10]).unwrap();
        assert_eq!(buffer.pixel(0, 0), Some(Color::new(10, 20, 30)));
        assert_eq!(buffer.pixel(1, 0), None);
    }

    #[test]
    fn test_set_pixel_writes_bgr() {
        let mut buffer = PixelBuffer::with_stride(2, 1, 8).unwrap();
        buffer.set_pixel(1, 0, Color::new(1, 2, 3)).unwrap();
        assert_eq!(buffer.as_bytes(), &[0, 0, 0, 3, 2, 1, 0, 0]);
        assert!(buffer.set_pixel(2, 0, Color::WHITE).is_err());
    }

    #[test]
    fn test_rows_exclude_padding() {
        let mut data: Vec<u8> = (0..16).collect();
        let mut view = PixelBufferMut::new(&mut data, 2, 2, 8).unwrap();
        let rows: Vec<Vec<u8>> = view.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![0, 1, 2, 3, 4, 5], vec![8, 9, 10, 11, 12, 13]]);

        for row in view.rows_mut() {
            row.fill(0xAA);
        }
        assert_eq!(&data[6..8], &[6, 7]);
        assert_eq!(&data[14..16], &[14, 15]);
        assert_eq!(data[5], 0xAA);
    }

    #[test]
    fn test_rgb_image_round_trip_swizzles() {
        let image = RgbImage::from_raw(2, 1, vec![10, 20, 30, 40, 50, 60]).unwrap();
        let buffer = PixelBuffer::from_rgb_image(&image).unwrap();
        assert_eq!(buffer.as_bytes(), &[30, 20, 10, 60, 50, 40]);
        assert_eq!(buffer.to_rgb_image(), image);
    }

    #[test]
    fn test_to_rgb_image_drops_padding() {
        let buffer = PixelBuffer::from_raw(1, 2, 4, vec![1, 2, 3, 99, 4, 5, 6, 99]).unwrap();
        let image = buffer.to_rgb_image();
        assert_eq!(image.as_raw(), &vec![3, 2, 1, 6, 5, 4]);
    }
}
