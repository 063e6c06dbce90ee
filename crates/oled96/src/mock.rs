//! Recording transport for tests.
//!
//! `MockTransport` keeps every write in memory instead of touching a bus,
//! so tests can assert the exact byte frames a session produced and count
//! how many writes a drawing operation cost.

extern crate alloc;

use alloc::vec::Vec;

use crate::interface::Transport;

/// Failure injected by [`MockTransport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// `open` was refused
    Open,
    /// `select_address` was refused
    Address,
    /// A write was refused
    Write,
}

/// In-memory [`Transport`] that records each write
#[derive(Debug, Default)]
pub struct MockTransport {
    writes: Vec<Vec<u8>>,
    channel: Option<u8>,
    address: Option<u8>,
    fail_open: bool,
    fail_address: bool,
    fail_writes: bool,
}

impl MockTransport {
    /// Transport that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport whose `open` always fails
    pub fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    /// Transport whose `select_address` always fails
    pub fn failing_address() -> Self {
        Self {
            fail_address: true,
            ..Self::default()
        }
    }

    /// Make subsequent writes fail (or succeed again)
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Every successful write, in order
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// Data-mode writes only, control byte stripped
    pub fn data_writes(&self) -> impl Iterator<Item = &[u8]> {
        self.writes
            .iter()
            .filter(|w| w.first() == Some(&crate::command::DATA_MODE))
            .map(|w| &w[1..])
    }

    /// Forget recorded writes
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    /// Channel passed to the last successful `open`, until `close`
    pub fn opened_channel(&self) -> Option<u8> {
        self.channel
    }

    /// Address passed to the last successful `select_address`, until `close`
    pub fn address(&self) -> Option<u8> {
        self.address
    }

    /// Whether the transport is open
    pub fn is_open(&self) -> bool {
        self.channel.is_some()
    }
}

impl Transport for MockTransport {
    type Error = MockError;

    fn open(&mut self, channel: u8) -> Result<(), Self::Error> {
        if self.fail_open {
            return Err(MockError::Open);
        }
        self.channel = Some(channel);
        Ok(())
    }

    fn select_address(&mut self, address: u8) -> Result<(), Self::Error> {
        if self.fail_address {
            return Err(MockError::Address);
        }
        self.address = Some(address);
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockError::Write);
        }
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn close(&mut self) {
        self.channel = None;
        self.address = None;
    }
}
