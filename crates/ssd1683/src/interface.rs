//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the SSD1683 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The SSD1683 requires:
//! - SPI bus (MOSI + SCK + CS). Chip-select is owned by the [`SpiDevice`],
//!   so every command or data frame is a single SPI transaction.
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low)
//!   - **BUSY**: Busy status (input, active high)
//!
//! ## Example
//!
//! ```rust,ignore
//! use ssd1683::{DisplayInterface, Interface};
//!
//! let mut interface = Interface::new(spi_device, dc_pin, rst_pin, busy_pin);
//!
//! interface.start()?;
//! interface.reset(&mut delay)?;
//! interface.send_command(0x12)?; // Soft reset
//! interface.busy_wait(&mut delay)?;
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;
use log::trace;

/// Interval between two reads of the BUSY pin
pub const BUSY_POLL_INTERVAL_MS: u32 = 20;

/// Reset pulse timing: high, low, high
pub const RESET_HIGH_MS: u32 = 100;
pub const RESET_LOW_MS: u32 = 2;

/// Trait for hardware interface to SSD1683 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// A command and its data must be sent back-to-back. The interface is
/// owned exclusively by one display and provides no locking of its own.
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Bring up the bus and pins
    ///
    /// Called once at the start of every initialization. A failure here
    /// aborts the initialization without touching the controller.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send exactly one byte in its own chip-select frame
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send a sequence of data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Send the bytes in order, in a single chip-select frame
    fn send_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Send a single data byte to the controller
    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.send_bytes(&[byte])
    }

    /// Perform hardware reset
    ///
    /// The implementation must drive RST high for 100ms, low for 2ms,
    /// then high again for 100ms.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Wait for the busy pin to go low
    ///
    /// Polls the BUSY pin every [`BUSY_POLL_INTERVAL_MS`] until the
    /// controller reports idle.
    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug, PartialEq)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
    /// Busy pin stayed high past the configured timeout
    Timeout,
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterfaceError::Spi(e) => write!(f, "SPI error: {e:?}"),
            InterfaceError::Pin(e) => write!(f, "Pin error: {e:?}"),
            InterfaceError::Timeout => write!(f, "Timeout waiting for display"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for SSD1683
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`] (drives chip-select)
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BUSY` - Busy pin implementing [`InputPin`]
pub struct Interface<SPI, DC, RST, BUSY> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Busy pin (active high)
    busy: BUSY,
    /// Give up waiting on BUSY after this many milliseconds
    busy_timeout_ms: Option<u32>,
}

impl<SPI, DC, RST, BUSY> Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
{
    /// Create a new Interface
    ///
    /// The busy wait blocks until the controller is idle, with no timeout.
    /// Use [`with_busy_timeout`](Self::with_busy_timeout) for a bounded wait.
    pub fn new(spi: SPI, dc: DC, rst: RST, busy: BUSY) -> Self {
        Self {
            spi,
            dc,
            rst,
            busy,
            busy_timeout_ms: None,
        }
    }

    /// Bound the busy wait
    ///
    /// A BUSY line still high after `timeout_ms` makes
    /// [`busy_wait`](DisplayInterface::busy_wait) fail with
    /// [`InterfaceError::Timeout`].
    pub fn with_busy_timeout(mut self, timeout_ms: u32) -> Self {
        self.busy_timeout_ms = Some(timeout_ms);
        self
    }

    /// Consume the interface and return the bus and pins
    pub fn release(self) -> (SPI, DC, RST, BUSY) {
        (self.spi, self.dc, self.rst, self.busy)
    }
}

impl<SPI, DC, RST, BUSY, PinErr> DisplayInterface for Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BUSY: InputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn start(&mut self) -> Result<(), Self::Error> {
        // Idle levels: out of reset, data mode
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_HIGH_MS);
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_LOW_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_HIGH_MS);
        Ok(())
    }

    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        let mut waited_ms = 0u32;

        while self.busy.is_high().map_err(InterfaceError::Pin)? {
            if let Some(timeout) = self.busy_timeout_ms {
                if waited_ms >= timeout {
                    return Err(InterfaceError::Timeout);
                }
            }
            trace!("busy, waiting");
            delay.delay_ms(BUSY_POLL_INTERVAL_MS);
            waited_ms = waited_ms.saturating_add(BUSY_POLL_INTERVAL_MS);
        }

        Ok(())
    }
}
