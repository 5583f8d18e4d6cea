//! In-memory mirror of the panel contents
//!
//! One bit per pixel, row-major, most significant bit leftmost. A set bit is
//! white, matching the controller RAM, so the mirror is written to the panel
//! as-is. The mirror always holds the complete panel image; merges
//! read-modify-write into it.

use alloc::vec;
use alloc::vec::Vec;

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::config::Dimensions;
use crate::error::OutOfBounds;

/// Bit-packed panel mirror
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    dimensions: Dimensions,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create an all-white buffer
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            data: vec![Color::White.byte(); dimensions.buffer_size()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Packed bytes as sent to controller RAM
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        self.data.fill(color.byte());
    }

    /// Byte index and bit mask of pixel `(x, y)`
    fn location(&self, x: usize, y: usize) -> (usize, u8) {
        (
            y * self.dimensions.line_bytes() + x / 8,
            0x80 >> (x % 8),
        )
    }

    /// Color at `(x, y)`, `None` outside the panel
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.dimensions.cols() || y >= self.dimensions.rows() {
            return None;
        }
        let (index, mask) = self.location(x as usize, y as usize);
        Some(Color::from_bit(self.data[index] & mask != 0))
    }

    /// Set pixel `(x, y)`; writes outside the panel are ignored
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        if x >= self.dimensions.cols() || y >= self.dimensions.rows() {
            return;
        }
        let (index, mask) = self.location(x as usize, y as usize);
        if color.is_set() {
            self.data[index] |= mask;
        } else {
            self.data[index] &= !mask;
        }
    }

    /// Copy `bitmap` into the mirror with its top-left corner at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] and leaves the mirror untouched if the
    /// rectangle does not fit inside the panel.
    pub fn merge(&mut self, x: u16, y: u16, bitmap: &Bitmap) -> Result<(), OutOfBounds> {
        let (width, height) = (bitmap.width(), bitmap.height());
        let fits_x = x as u32 + width as u32 <= self.dimensions.cols() as u32;
        let fits_y = y as u32 + height as u32 <= self.dimensions.rows() as u32;
        if !(fits_x && fits_y) {
            return Err(OutOfBounds {
                x,
                y,
                width,
                height,
                panel_width: self.dimensions.cols(),
                panel_height: self.dimensions.rows(),
            });
        }

        for (j, row) in bitmap.pixels().chunks(width.max(1) as usize).enumerate() {
            let py = y as usize + j;
            for (i, color) in row.iter().enumerate() {
                let (index, mask) = self.location(x as usize + i, py);
                if color.is_set() {
                    self.data[index] |= mask;
                } else {
                    self.data[index] &= !mask;
                }
            }
        }

        Ok(())
    }

    /// Read the whole mirror back as a bitmap
    pub fn to_bitmap(&self) -> Bitmap {
        Bitmap::from_fn(self.dimensions.cols(), self.dimensions.rows(), |x, y| {
            let (index, mask) = self.location(x as usize, y as usize);
            Color::from_bit(self.data[index] & mask != 0)
        })
    }

    /// Replace the mirror with an already packed frame
    ///
    /// Returns `false` and leaves the mirror untouched if `data` has the wrong size.
    pub fn load(&mut self, data: &[u8]) -> bool {
        if data.len() != self.data.len() {
            return false;
        }
        self.data.copy_from_slice(data);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u16, height: u16) -> Bitmap {
        Bitmap::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Color::Black
            } else {
                Color::White
            }
        })
    }

    #[test]
    fn starts_white() {
        let fb = FrameBuffer::new(Dimensions::NATIVE);
        assert_eq!(fb.as_bytes().len(), 15_000);
        assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn merge_sets_msb_first() {
        let mut fb = FrameBuffer::new(Dimensions::new(2, 16).unwrap());
        fb.merge(1, 1, &Bitmap::new(3, 1, Color::Black)).unwrap();
        // Row 1, pixels 1..4 of the first byte
        assert_eq!(fb.as_bytes(), &[0xFF, 0xFF, 0b1000_1111, 0xFF]);
    }

    #[test]
    fn merge_spans_byte_boundary() {
        let mut fb = FrameBuffer::new(Dimensions::new(1, 16).unwrap());
        fb.merge(6, 0, &Bitmap::new(4, 1, Color::Black)).unwrap();
        assert_eq!(fb.as_bytes(), &[0b1111_1100, 0b0011_1111]);
    }

    #[test]
    fn merge_round_trips_over_existing_content() {
        let mut fb = FrameBuffer::new(Dimensions::new(40, 64).unwrap());
        fb.fill(Color::Black);
        fb.merge(0, 0, &Bitmap::new(64, 40, Color::White)).unwrap();
        fb.merge(5, 3, &Bitmap::new(20, 10, Color::Black)).unwrap();

        let patch = checker(13, 7);
        fb.merge(9, 11, &patch).unwrap();

        let image = fb.to_bitmap();
        for j in 0..7 {
            for i in 0..13 {
                assert_eq!(image.pixel(9 + i, 11 + j), patch.pixel(i, j));
            }
        }
        // Pixels outside the patch keep their previous value
        assert_eq!(image.pixel(5, 3), Some(Color::Black));
        assert_eq!(image.pixel(63, 39), Some(Color::White));
    }

    #[test]
    fn merge_rejects_out_of_bounds() {
        let mut fb = FrameBuffer::new(Dimensions::NATIVE);
        let err = fb
            .merge(390, 0, &Bitmap::new(20, 1, Color::Black))
            .unwrap_err();
        assert_eq!(err.x, 390);
        assert_eq!(err.width, 20);
        assert_eq!(err.panel_width, 400);
        assert!(fb.merge(0, 300, &Bitmap::new(1, 1, Color::Black)).is_err());
        assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn merge_fills_exact_edge() {
        let mut fb = FrameBuffer::new(Dimensions::NATIVE);
        fb.merge(399, 299, &Bitmap::new(1, 1, Color::Black)).unwrap();
        assert_eq!(fb.pixel(399, 299), Some(Color::Black));
        assert_eq!(fb.as_bytes()[14_999], 0xFE);
    }

    #[test]
    fn odd_width_uses_padded_lines() {
        let mut fb = FrameBuffer::new(Dimensions::new(2, 12).unwrap());
        fb.merge(0, 1, &Bitmap::new(12, 1, Color::Black)).unwrap();
        assert_eq!(fb.as_bytes(), &[0xFF, 0xFF, 0x00, 0x0F]);
        assert_eq!(fb.to_bitmap().width(), 12);
    }

    #[test]
    fn fill_and_load() {
        let mut fb = FrameBuffer::new(Dimensions::new(1, 16).unwrap());
        fb.fill(Color::Black);
        assert_eq!(fb.as_bytes(), &[0x00, 0x00]);
        assert!(fb.load(&[0xAA, 0x55]));
        assert_eq!(fb.pixel(0, 0), Some(Color::White));
        assert_eq!(fb.pixel(1, 0), Some(Color::Black));
        assert!(!fb.load(&[0x00]));
        assert_eq!(fb.as_bytes(), &[0xAA, 0x55]);
    }
}
