//! Source bitmaps merged into the frame buffer

use alloc::vec;
use alloc::vec::Vec;

use crate::color::Color;

/// Rectangular monochrome image, one [`Color`] per pixel, row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u16,
    height: u16,
    pixels: Vec<Color>,
}

impl Bitmap {
    /// Create a bitmap filled with one color
    pub fn new(width: u16, height: u16, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Create a bitmap by evaluating `f(x, y)` for every pixel
    pub fn from_fn(width: u16, height: u16, mut f: impl FnMut(u16, u16) -> Color) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Color at `(x, y)`, `None` outside the bitmap
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Set the color at `(x, y)`; writes outside the bitmap are ignored
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        if x < self.width && y < self.height {
            let index = self.index(x, y);
            self.pixels[index] = color;
        }
    }

    /// Pixels in row-major order
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
