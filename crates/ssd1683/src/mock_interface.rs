//! Recording interface for driver tests.
//!
//! Captures every command, data frame, reset and busy wait in order so tests
//! can assert on the exact register stream without real SPI hardware.

use alloc::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::interface::DisplayInterface;

/// One bus-level operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Start,
    Reset,
    BusyWait,
    Command(u8),
    Data(Vec<u8>),
}

#[derive(Debug, PartialEq)]
pub struct MockError;

#[derive(Debug, Default)]
pub struct RecordingInterface {
    pub ops: Vec<Op>,
    /// Make `start` fail
    pub fail_start: bool,
    /// Make `send_command` fail for this opcode
    pub fail_command: Option<u8>,
}

impl RecordingInterface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain recorded operations
    pub fn take(&mut self) -> Vec<Op> {
        core::mem::take(&mut self.ops)
    }
}

impl DisplayInterface for RecordingInterface {
    type Error = MockError;

    fn start(&mut self) -> Result<(), Self::Error> {
        if self.fail_start {
            return Err(MockError);
        }
        self.ops.push(Op::Start);
        Ok(())
    }

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        if self.fail_command == Some(command) {
            return Err(MockError);
        }
        self.ops.push(Op::Command(command));
        Ok(())
    }

    fn send_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.ops.push(Op::Data(data.to_vec()));
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        self.ops.push(Op::Reset);
        Ok(())
    }

    fn busy_wait<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        self.ops.push(Op::BusyWait);
        Ok(())
    }
}

/// Data frames sent right after each occurrence of `command`
pub fn data_after(ops: &[Op], command: u8) -> Vec<&[u8]> {
    ops.windows(2)
        .filter_map(|pair| match pair {
            [Op::Command(c), Op::Data(data)] if *c == command => Some(data.as_slice()),
            _ => None,
        })
        .collect()
}

/// Number of times `command` was sent
pub fn count_command(ops: &[Op], command: u8) -> usize {
    ops.iter().filter(|op| **op == Op::Command(command)).count()
}

/// Position of the first occurrence of `command`
pub fn position(ops: &[Op], command: u8) -> Option<usize> {
    ops.iter().position(|op| *op == Op::Command(command))
}
