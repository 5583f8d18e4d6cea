//! Graphics support via embedded-graphics
//!
//! [`Bitmap`] and [`FrameBuffer`] implement
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) with
//! [`BinaryColor`] pixels (`On` = black ink), so any embedded-graphics
//! primitive, text or image can be rendered into a bitmap before a
//! [`Display::draw`](crate::display::Display::draw), or straight into the
//! display mirror.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ssd1683::{Bitmap, Color};
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     text::Text,
//! };
//!
//! let mut label = Bitmap::new(120, 16, Color::White);
//! Text::new("Hello, E-Paper!", Point::new(0, 10),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::On))
//!     .draw(&mut label)?;
//!
//! display.draw(40, 200, &label, &mut delay)?;
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::bitmap::Bitmap;
use crate::framebuffer::FrameBuffer;

/// Clip a point to `size`, returning pixel coordinates inside it
fn clip(Point { x, y }: Point, size: Size) -> Option<(u16, u16)> {
    if x < 0 || y < 0 || x as u32 >= size.width || y as u32 >= size.height {
        return None;
    }
    Some((x as u16, y as u16))
}

impl DrawTarget for Bitmap {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let size = self.size();
        for Pixel(point, color) in pixels {
            if let Some((x, y)) = clip(point, size) {
                self.set_pixel(x, y, color.into());
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Bitmap {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let size = self.size();
        for Pixel(point, color) in pixels {
            if let Some((x, y)) = clip(point, size) {
                self.set_pixel(x, y, color.into());
            }
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(dims.cols() as u32, dims.rows() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::config::Dimensions;
    use embedded_graphics_core::primitives::Rectangle;

    #[test]
    fn bitmap_draw_target_clips() {
        let mut bitmap = Bitmap::new(8, 4, Color::White);
        bitmap
            .draw_iter([
                Pixel(Point::new(1, 1), BinaryColor::On),
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(8, 0), BinaryColor::On),
            ])
            .unwrap();

        assert_eq!(bitmap.pixel(1, 1), Some(Color::Black));
        let black = bitmap.pixels().iter().filter(|c| **c == Color::Black).count();
        assert_eq!(black, 1);
    }

    #[test]
    fn framebuffer_fill_solid() {
        let mut fb = FrameBuffer::new(Dimensions::new(4, 16).unwrap());
        fb.fill_solid(
            &Rectangle::new(Point::new(8, 1), Size::new(8, 2)),
            BinaryColor::On,
        )
        .unwrap();
        assert_eq!(fb.as_bytes(), &[0xFF, 0xFF, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0xFF]);

        fb.clear(BinaryColor::Off).unwrap();
        assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn bitmap_merges_like_drawn() {
        let mut bitmap = Bitmap::new(16, 2, Color::White);
        bitmap
            .fill_solid(
                &Rectangle::new(Point::new(0, 0), Size::new(4, 2)),
                BinaryColor::On,
            )
            .unwrap();

        let mut fb = FrameBuffer::new(Dimensions::new(2, 16).unwrap());
        fb.merge(0, 0, &bitmap).unwrap();
        assert_eq!(fb.as_bytes(), &[0x0F, 0xFF, 0x0F, 0xFF]);
    }
}
