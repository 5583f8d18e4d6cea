//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS};

/// Display dimensions
///
/// Only obtainable through [`Dimensions::new`] or [`Dimensions::NATIVE`], so
/// both sides are always within the controller limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of rows (height in pixels, corresponds to gate outputs)
    rows: u16,
    /// Number of columns (width in pixels, corresponds to source outputs)
    cols: u16,
}

impl Dimensions {
    /// Waveshare 4.2" V2 panel, 400x300
    pub const NATIVE: Dimensions = Dimensions {
        rows: MAX_GATE_OUTPUTS,
        cols: MAX_SOURCE_OUTPUTS,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows is 0 or > MAX_GATE_OUTPUTS
    /// - cols is 0 or > MAX_SOURCE_OUTPUTS
    pub fn new(rows: u16, cols: u16) -> Result<Self, BuilderError> {
        if rows == 0 || rows > MAX_GATE_OUTPUTS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        if cols == 0 || cols > MAX_SOURCE_OUTPUTS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows (panel height)
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns (panel width)
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Bytes per row, rounded up to whole bytes
    pub fn line_bytes(&self) -> usize {
        (self.cols as usize).div_ceil(8)
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.rows as usize * self.line_bytes()
    }
}

/// Waveform used by every draw after initialization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshMode {
    /// Full refresh, flashing waveform
    Full,
    /// Full refresh with the fast waveform (temperature preloaded)
    Fast,
    /// Partial refresh of the primary plane only
    Partial,
    /// Full refresh with the 4-level gray waveform
    Gray4,
}

/// Options passed to `init` / `init_fast`
///
/// Resolved once into a [`RefreshMode`]. Partial takes precedence over gray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitOptions {
    /// Use partial refresh for draws
    pub partial: bool,
    /// Use the 4-level gray waveform for full refreshes
    pub gray: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            partial: true,
            gray: false,
        }
    }
}

impl InitOptions {
    /// Full refresh on every draw
    pub fn full() -> Self {
        Self {
            partial: false,
            gray: false,
        }
    }

    /// Partial refresh on every draw
    pub fn partial() -> Self {
        Self {
            partial: true,
            gray: false,
        }
    }

    /// Refresh mode for the given initialization variant
    pub fn refresh_mode(&self, fast: bool) -> RefreshMode {
        if self.partial {
            RefreshMode::Partial
        } else if self.gray {
            RefreshMode::Gray4
        } else if fast {
            RefreshMode::Fast
        } else {
            RefreshMode::Full
        }
    }
}

/// Display configuration
///
/// This struct holds all configurable register values for the SSD1683 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Display update control 1 bytes used at initialization
    pub update_control: [u8; 2],
    /// Border waveform for full refresh
    pub border_waveform: u8,
    /// Border waveform for partial refresh
    pub partial_border_waveform: u8,
    /// Data entry mode byte
    pub data_entry_mode: u8,
    /// Temperature written before fast refresh
    pub fast_temperature: u8,
    /// Deep sleep mode byte
    pub deep_sleep_mode: u8,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1683::{Builder, Dimensions};
///
/// let config = Builder::new()
///     .dimensions(Dimensions::new(300, 400).unwrap())
///     .border_waveform(0x05)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.dimensions.line_bytes(), 50);
/// ```
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Display update control 1 bytes
    update_control: [u8; 2],
    /// Border waveform for full refresh
    border_waveform: u8,
    /// Border waveform for partial refresh
    partial_border_waveform: u8,
    /// Data entry mode byte
    data_entry_mode: u8,
    /// Temperature written before fast refresh
    fast_temperature: u8,
    /// Deep sleep mode byte
    deep_sleep_mode: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            dimensions: None,
            // Bypass RED RAM as 0
            update_control: [0x40, 0x00],
            // Follow LUT, VBD transition LUT1
            border_waveform: 0x05,
            // VBD as VCOM during partial refresh
            partial_border_waveform: 0x80,
            // X increment, Y increment
            data_entry_mode: 0x03,
            fast_temperature: 0x5A,
            // Deep sleep mode 1, RAM retained
            deep_sleep_mode: 0x01,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display update control 1 bytes
    pub fn update_control(mut self, value: [u8; 2]) -> Self {
        self.update_control = value;
        self
    }

    /// Set border waveform for full refresh
    pub fn border_waveform(mut self, value: u8) -> Self {
        self.border_waveform = value;
        self
    }

    /// Set border waveform for partial refresh
    pub fn partial_border_waveform(mut self, value: u8) -> Self {
        self.partial_border_waveform = value;
        self
    }

    /// Set data entry mode
    pub fn data_entry_mode(mut self, value: u8) -> Self {
        self.data_entry_mode = value;
        self
    }

    /// Set the temperature loaded by `init_fast`
    pub fn fast_temperature(mut self, value: u8) -> Self {
        self.fast_temperature = value;
        self
    }

    /// Set deep sleep mode
    pub fn deep_sleep_mode(mut self, value: u8) -> Self {
        self.deep_sleep_mode = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - `BuilderError::MissingDimensions` if dimensions were not set
    /// - `BuilderError::InvalidDimensions` if they exceed the controller limits
    pub fn build(self) -> Result<Config, BuilderError> {
        let dims = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        Ok(Config {
            dimensions: Dimensions::new(dims.rows, dims.cols)?,
            update_control: self.update_control,
            border_waveform: self.border_waveform,
            partial_border_waveform: self.partial_border_waveform,
            data_entry_mode: self.data_entry_mode,
            fast_temperature: self.fast_temperature,
            deep_sleep_mode: self.deep_sleep_mode,
        })
    }
}
