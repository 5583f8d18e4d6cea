//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! frame buffer merges ([`OutOfBounds`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`OutOfBounds`] - A rectangle that does not fit inside the panel
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use ssd1683::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(1000, 500); // Too large
//! assert!(result.is_err());
//! ```

use crate::display::DeviceState;
use crate::interface::DisplayInterface;

/// Maximum gate outputs (rows) supported by SSD1683 controller
pub const MAX_GATE_OUTPUTS: u16 = 300;

/// Maximum source outputs (columns) supported by SSD1683 controller
pub const MAX_SOURCE_OUTPUTS: u16 = 400;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO) while driving the controller
    ///
    /// The controller may be left half-configured; run `init` again to recover.
    Interface(I::Error),
    /// Bus and pin bring-up failed, initialization was aborted
    BringUp(I::Error),
    /// Operation not valid in the current device state
    InvalidState {
        /// Name of the rejected operation
        operation: &'static str,
        /// State the display was in
        state: DeviceState,
    },
    /// A rectangle does not fit inside the panel
    OutOfBounds(OutOfBounds),
    /// Fill tile height of zero
    InvalidTileHeight,
    /// A packed frame of the wrong size
    SizeMismatch {
        /// Required size in bytes
        expected: usize,
        /// Provided size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> From<OutOfBounds> for Error<I> {
    fn from(err: OutOfBounds) -> Self {
        Error::OutOfBounds(err)
    }
}

impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Error::BringUp(e) => f.debug_tuple("BringUp").field(e).finish(),
            Error::InvalidState { operation, state } => f
                .debug_struct("InvalidState")
                .field("operation", operation)
                .field("state", state)
                .finish(),
            Error::OutOfBounds(e) => f.debug_tuple("OutOfBounds").field(e).finish(),
            Error::InvalidTileHeight => write!(f, "InvalidTileHeight"),
            Error::SizeMismatch { expected, provided } => f
                .debug_struct("SizeMismatch")
                .field("expected", expected)
                .field("provided", provided)
                .finish(),
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::BringUp(e) => write!(f, "Interface bring-up failed: {e:?}"),
            Error::InvalidState { operation, state } => {
                write!(f, "Cannot {operation} while display is {state:?}")
            }
            Error::OutOfBounds(e) => write!(f, "{e}"),
            Error::InvalidTileHeight => write!(f, "Fill tile height must be non-zero"),
            Error::SizeMismatch { expected, provided } => write!(
                f,
                "Frame size mismatch: expected {expected} bytes, provided {provided}"
            ),
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

/// A merge rectangle that does not fit inside the frame buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    /// Left edge of the rectangle
    pub x: u16,
    /// Top edge of the rectangle
    pub y: u16,
    /// Rectangle width
    pub width: u16,
    /// Rectangle height
    pub height: u16,
    /// Panel width
    pub panel_width: u16,
    /// Panel height
    pub panel_height: u16,
}

impl core::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Rectangle {}x{} at ({}, {}) exceeds panel {}x{}",
            self.width, self.height, self.x, self.y, self.panel_width, self.panel_height
        )
    }
}

impl core::error::Error for OutOfBounds {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u16,
        /// Number of columns (width) requested
        cols: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::MissingDimensions => write!(f, "Dimensions must be specified"),
            BuilderError::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (max {MAX_GATE_OUTPUTS}x{MAX_SOURCE_OUTPUTS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
