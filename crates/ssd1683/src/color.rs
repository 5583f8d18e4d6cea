//! Monochrome pixel color

/// Pixel color of a monochrome panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    /// Black pixel (bit cleared in controller RAM)
    Black,
    /// White pixel (bit set in controller RAM)
    #[default]
    White,
}

impl Color {
    /// Byte value filling eight pixels of this color
    pub fn byte(self) -> u8 {
        match self {
            Color::Black => 0x00,
            Color::White => 0xFF,
        }
    }

    /// Color of a single RAM bit
    pub fn from_bit(set: bool) -> Self {
        if set { Color::White } else { Color::Black }
    }

    /// Whether this color sets its RAM bit
    pub fn is_set(self) -> bool {
        self == Color::White
    }
}

#[cfg(feature = "graphics")]
mod binary {
    use super::Color;
    use embedded_graphics_core::pixelcolor::BinaryColor;

    // `On` draws ink
    impl From<BinaryColor> for Color {
        fn from(color: BinaryColor) -> Self {
            match color {
                BinaryColor::On => Color::Black,
                BinaryColor::Off => Color::White,
            }
        }
    }

    impl From<Color> for BinaryColor {
        fn from(color: Color) -> Self {
            match color {
                Color::Black => BinaryColor::On,
                Color::White => BinaryColor::Off,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_encoding() {
        assert!(Color::White.is_set());
        assert!(!Color::Black.is_set());
        assert_eq!(Color::from_bit(true), Color::White);
        assert_eq!(Color::from_bit(false), Color::Black);
        assert_eq!(Color::White.byte(), 0xFF);
        assert_eq!(Color::Black.byte(), 0x00);
    }
}
