//! Core display operations
//!
//! [`Display`] owns the interface, the register configuration and the frame
//! buffer mirror, and walks the controller through its refresh sequences.
//!
//! ```text
//! Uninitialized --init/init_fast--> Ready(mode) --sleep--> Sleeping
//!                                   ^        |
//!                                   +-init---+
//! ```
//!
//! Leaving `Sleeping` needs an external reset: [`Display::release`] hands the
//! interface back so a fresh `Display` can be built.

use embedded_hal::delay::DelayNs;
use log::{debug, warn};

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::command::*;
use crate::config::{Config, Dimensions, InitOptions, RefreshMode};
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;

/// Lifecycle of the controller as seen by the driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceState {
    /// Not initialized, or the last initialization failed
    Uninitialized,
    /// Initialized; every draw uses the carried refresh mode
    Ready(RefreshMode),
    /// In deep sleep, only an external reset brings it back
    Sleeping,
}

/// Core display driver for SSD1683
///
/// The driver is synchronous and provides no locking: callers sharing a
/// display between threads must serialize access themselves.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Controller lifecycle state
    state: DeviceState,
    /// Complete image currently on (or about to be sent to) the panel
    frame: FrameBuffer,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent to the controller until [`init`](Self::init).
    pub fn new(interface: I, config: Config) -> Self {
        let frame = FrameBuffer::new(config.dimensions);
        Self {
            interface,
            config,
            state: DeviceState::Uninitialized,
            frame,
        }
    }

    /// Bring up the interface, reset and configure the controller, then clear it
    ///
    /// # Errors
    ///
    /// - [`Error::BringUp`] if the interface fails to start; nothing is sent.
    /// - [`Error::InvalidState`] if the display is sleeping.
    /// - [`Error::Interface`] if a bus write fails; the display stays
    ///   uninitialized.
    pub fn init<D: DelayNs>(
        &mut self,
        options: InitOptions,
        delay: &mut D,
    ) -> Result<(), Error<I>> {
        self.initialize(options, false, delay)
    }

    /// Same as [`init`](Self::init), with the temperature preloaded for the fast waveform
    pub fn init_fast<D: DelayNs>(
        &mut self,
        options: InitOptions,
        delay: &mut D,
    ) -> Result<(), Error<I>> {
        self.initialize(options, true, delay)
    }

    fn initialize<D: DelayNs>(
        &mut self,
        options: InitOptions,
        fast: bool,
        delay: &mut D,
    ) -> Result<(), Error<I>> {
        if self.state == DeviceState::Sleeping {
            return Err(self.reject(if fast { "init_fast" } else { "init" }));
        }
        let mode = options.refresh_mode(fast);
        debug!("init: fast={fast}, mode={mode:?}");

        self.state = DeviceState::Uninitialized;
        self.interface.start().map_err(Error::BringUp)?;

        self.interface.reset(delay).map_err(Error::Interface)?;
        self.busy_wait(delay)?;

        self.send_command(SOFT_RESET)?;
        self.busy_wait(delay)?;

        let update_control = self.config.update_control;
        self.send_command(DISPLAY_UPDATE_CTRL1)?;
        self.send_bytes(&update_control)?;

        self.send_command(BORDER_WAVEFORM)?;
        self.send_byte(self.config.border_waveform)?;

        if fast {
            self.send_command(WRITE_TEMP)?;
            self.send_byte(self.config.fast_temperature)?;
            self.activate(CTRL2_LOAD_TEMP, delay)?;
        }

        self.send_command(DATA_ENTRY_MODE)?;
        self.send_byte(self.config.data_entry_mode)?;

        self.set_ram_window()?;
        self.busy_wait(delay)?;

        self.state = DeviceState::Ready(mode);
        if let Err(err) = self.clear(delay) {
            self.state = DeviceState::Uninitialized;
            return Err(err);
        }
        Ok(())
    }

    /// Blank the panel and the mirror to white with a full refresh
    pub fn clear<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.ready("clear")?;
        debug!("clear");

        self.frame.fill(Color::White);
        self.write_ram(WRITE_RAM_BW)?;
        self.write_ram(WRITE_RAM_RED)?;

        self.activate(CTRL2_FULL, delay)
    }

    /// Send the mirror to both RAM planes and run a full refresh
    ///
    /// The waveform follows the refresh mode: fast after `init_fast`, 4-gray
    /// when requested, the regular full waveform otherwise.
    pub fn display_full<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        let mode = self.ready("display_full")?;
        debug!("display_full");

        // Old and new planes must match or the panel ghosts
        self.write_ram(WRITE_RAM_BW)?;
        self.write_ram(WRITE_RAM_RED)?;

        let waveform = match mode {
            RefreshMode::Fast => CTRL2_FAST,
            RefreshMode::Gray4 => CTRL2_GRAY4,
            RefreshMode::Full | RefreshMode::Partial => CTRL2_FULL,
        };
        self.activate(waveform, delay)
    }

    /// Send the mirror to the primary RAM plane and run a partial refresh
    pub fn display_partial<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.ready("display_partial")?;
        debug!("display_partial");

        self.send_command(BORDER_WAVEFORM)?;
        self.send_byte(self.config.partial_border_waveform)?;

        self.send_command(DISPLAY_UPDATE_CTRL1)?;
        self.send_bytes(&[CTRL1_NORMAL, 0x00])?;

        // The window must be set again before every partial write
        self.set_ram_window()?;
        self.write_ram(WRITE_RAM_BW)?;

        self.activate(CTRL2_PARTIAL, delay)
    }

    /// Merge `bitmap` into the mirror at `(x, y)` and refresh the panel
    ///
    /// Partial refresh when initialized for it, full refresh otherwise.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if the bitmap does not fit at `(x, y)`; neither
    /// the mirror nor the panel is touched.
    pub fn draw<D: DelayNs>(
        &mut self,
        x: u16,
        y: u16,
        bitmap: &Bitmap,
        delay: &mut D,
    ) -> Result<(), Error<I>> {
        let mode = self.ready("draw")?;
        debug!(
            "draw: {}x{} at ({x}, {y})",
            bitmap.width(),
            bitmap.height()
        );

        self.frame.merge(x, y, bitmap)?;
        self.refresh(mode, delay)
    }

    /// Replace the whole mirror with a packed frame and refresh the panel
    ///
    /// `data` uses the controller layout: one bit per pixel, set = white,
    /// `dimensions().buffer_size()` bytes.
    pub fn display_frame<D: DelayNs>(
        &mut self,
        data: &[u8],
        delay: &mut D,
    ) -> Result<(), Error<I>> {
        let mode = self.ready("display_frame")?;

        if !self.frame.load(data) {
            return Err(Error::SizeMismatch {
                expected: self.config.dimensions.buffer_size(),
                provided: data.len(),
            });
        }
        self.refresh(mode, delay)
    }

    /// Paint the panel with `color` in full-width bands of `tile_height` rows
    ///
    /// Each band is a separate [`draw`](Self::draw) with its own refresh. A
    /// shorter last band covers the remainder.
    pub fn fill<D: DelayNs>(
        &mut self,
        color: Color,
        tile_height: u16,
        delay: &mut D,
    ) -> Result<(), Error<I>> {
        self.ready("fill")?;
        if tile_height == 0 {
            return Err(Error::InvalidTileHeight);
        }
        debug!("fill: color {color:?}, tile height {tile_height}");

        let (rows, cols) = (self.config.dimensions.rows(), self.config.dimensions.cols());
        let (quotient, remainder) = (rows / tile_height, rows % tile_height);

        if quotient > 0 {
            let tile = Bitmap::new(cols, tile_height, color);
            for i in 0..quotient {
                self.draw(0, i * tile_height, &tile, delay)?;
            }
        }

        if remainder != 0 {
            let tile = Bitmap::new(cols, remainder, color);
            self.draw(0, quotient * tile_height, &tile, delay)?;
        }

        Ok(())
    }

    /// Enter deep sleep mode
    ///
    /// Every later operation fails with [`Error::InvalidState`].
    pub fn sleep(&mut self) -> Result<(), Error<I>> {
        self.ready("sleep")?;
        debug!("sleep");

        self.send_command(DEEP_SLEEP)?;
        self.send_byte(self.config.deep_sleep_mode)?;

        self.state = DeviceState::Sleeping;
        Ok(())
    }

    fn refresh<D: DelayNs>(&mut self, mode: RefreshMode, delay: &mut D) -> Result<(), Error<I>> {
        match mode {
            RefreshMode::Partial => self.display_partial(delay),
            RefreshMode::Full | RefreshMode::Fast | RefreshMode::Gray4 => self.display_full(delay),
        }
    }

    /// Select the waveform, start the update sequence and wait for it to end
    fn activate<D: DelayNs>(&mut self, waveform: u8, delay: &mut D) -> Result<(), Error<I>> {
        self.send_command(DISPLAY_UPDATE_CTRL2)?;
        self.send_byte(waveform)?;
        self.send_command(MASTER_ACTIVATION)?;
        self.busy_wait(delay)
    }

    /// Address window and counters covering the whole panel
    fn set_ram_window(&mut self) -> Result<(), Error<I>> {
        let x_end = (self.config.dimensions.line_bytes() - 1) as u8;
        let y_end = self.config.dimensions.rows() - 1;

        self.send_command(SET_RAM_X_RANGE)?;
        self.send_bytes(&[0x00, x_end])?;

        self.send_command(SET_RAM_Y_RANGE)?;
        self.send_bytes(&[0x00, 0x00, (y_end % 256) as u8, (y_end / 256) as u8])?;

        self.send_command(SET_RAM_X_COUNTER)?;
        self.send_byte(0x00)?;

        self.send_command(SET_RAM_Y_COUNTER)?;
        self.send_bytes(&[0x00, 0x00])?;

        Ok(())
    }

    /// Write the whole mirror to one RAM plane
    fn write_ram(&mut self, command: u8) -> Result<(), Error<I>> {
        self.send_command(command)?;
        self.interface
            .send_bytes(self.frame.as_bytes())
            .map_err(Error::Interface)
    }

    fn ready(&self, operation: &'static str) -> Result<RefreshMode, Error<I>> {
        match self.state {
            DeviceState::Ready(mode) => Ok(mode),
            _ => Err(self.reject(operation)),
        }
    }

    fn reject(&self, operation: &'static str) -> Error<I> {
        warn!("{operation} rejected: display is {:?}", self.state);
        Error::InvalidState {
            operation,
            state: self.state,
        }
    }

    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.interface.busy_wait(delay).map_err(Error::Interface)
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> Result<(), Error<I>> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send one data byte to the display controller
    fn send_byte(&mut self, byte: u8) -> Result<(), Error<I>> {
        self.interface.send_byte(byte).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_bytes(&mut self, data: &[u8]) -> Result<(), Error<I>> {
        self.interface.send_bytes(data).map_err(Error::Interface)
    }

    /// Current lifecycle state
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Refresh mode chosen at initialization, `None` unless ready
    pub fn refresh_mode(&self) -> Option<RefreshMode> {
        match self.state {
            DeviceState::Ready(mode) => Some(mode),
            _ => None,
        }
    }

    /// The frame buffer mirror
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Mutable access to the mirror, sent on the next `display_full`/`display_partial`
    pub fn frame_buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    /// The mirror as a bitmap
    pub fn to_bitmap(&self) -> Bitmap {
        self.frame.to_bitmap()
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }
}
