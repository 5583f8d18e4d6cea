//! Driver for the SSD1683 e-paper controller, as found on the Waveshare
//! 4.2" V2 (400x300) monochrome panel.
//!
//! The driver keeps a complete bit-packed mirror of the panel. Drawing merges
//! a [`Bitmap`] into the mirror and then pushes the whole mirror to the
//! controller, either as a full refresh (both RAM planes, flashing waveform)
//! or as a partial refresh (primary plane only), depending on how the
//! display was initialized.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ssd1683::{Bitmap, Builder, Color, Dimensions, Display, InitOptions, Interface};
//!
//! let interface = Interface::new(spi_device, dc_pin, rst_pin, busy_pin);
//! let config = Builder::new().dimensions(Dimensions::NATIVE).build()?;
//! let mut display = Display::new(interface, config);
//!
//! display.init(InitOptions::partial(), &mut delay)?;
//! display.draw(0, 0, &Bitmap::new(200, 100, Color::Black), &mut delay)?;
//! display.sleep()?;
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod bitmap;
pub mod color;
mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod framebuffer;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod interface;

#[cfg(test)]
mod mock_interface;

pub use bitmap::Bitmap;
pub use color::Color;
pub use config::{Builder, Config, Dimensions, InitOptions, RefreshMode};
pub use display::{DeviceState, Display};
pub use error::{BuilderError, Error, OutOfBounds};
pub use framebuffer::FrameBuffer;
pub use interface::{DisplayInterface, Interface, InterfaceError};
