//! Transport abstraction
//!
//! This module provides the [`Transport`] trait and the [`I2cTransport`] adapter
//! for talking to the controller over a byte-oriented bus.
//!
//! Every bus write starts with a control byte: `0x00` for commands, `0x40`
//! for display RAM data. The session builds those frames itself, so a
//! transport only has to move raw bytes.
//!
//! ## Example
//!
//! ```rust,ignore
//! use oled96::{I2cTransport, Oled};
//! use linux_embedded_hal::I2cdev;
//!
//! let bus = I2cdev::new("/dev/i2c-1")?;
//! let mut oled = Oled::new(I2cTransport::new(bus), config);
//! oled.init()?;
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

/// Byte transport to the display controller
///
/// Timeouts, retries and reconnects are the implementation's business; the
/// session only sees success or failure.
pub trait Transport {
    /// Error type for transport operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Open the bus channel
    ///
    /// # Errors
    ///
    /// Returns an error if the channel does not exist or cannot be opened.
    fn open(&mut self, channel: u8) -> Result<(), Self::Error>;

    /// Select the device address that subsequent writes go to
    fn select_address(&mut self, address: u8) -> Result<(), Self::Error>;

    /// Write a raw byte sequence (control byte included) to the device
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Release the channel. Must be safe to call on a closed transport.
    fn close(&mut self);
}

/// Errors produced by [`I2cTransport`]
#[derive(Debug, PartialEq)]
pub enum TransportError<E> {
    /// Underlying bus error
    Bus(E),
    /// Write attempted on a closed transport
    NotOpen,
    /// Write attempted before an address was selected
    NoAddress,
}

impl<E: Debug> core::fmt::Display for TransportError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransportError::Bus(e) => write!(f, "I2C error: {e:?}"),
            TransportError::NotOpen => write!(f, "Transport not open"),
            TransportError::NoAddress => write!(f, "No device address selected"),
        }
    }
}

impl<E: Debug> core::error::Error for TransportError<E> {}

/// [`Transport`] over an embedded-hal v1.0 I2C bus
///
/// The bus handle is already bound to a physical channel, so `open` only
/// records the channel number for diagnostics.
pub struct I2cTransport<I2C> {
    /// I2C bus
    i2c: I2C,
    /// Selected 7-bit address
    address: Option<u8>,
    /// Channel passed to the last `open`
    channel: Option<u8>,
}

impl<I2C> I2cTransport<I2C>
where
    I2C: I2c,
{
    /// Create a new, closed transport
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: None,
            channel: None,
        }
    }

    /// Channel the transport is open on, if any
    pub fn channel(&self) -> Option<u8> {
        self.channel
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Transport for I2cTransport<I2C>
where
    I2C: I2c,
{
    type Error = TransportError<I2C::Error>;

    fn open(&mut self, channel: u8) -> Result<(), Self::Error> {
        log::debug!("i2c transport open on channel {channel}");
        self.channel = Some(channel);
        Ok(())
    }

    fn select_address(&mut self, address: u8) -> Result<(), Self::Error> {
        if self.channel.is_none() {
            return Err(TransportError::NotOpen);
        }
        self.address = Some(address);
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.channel.is_none() {
            return Err(TransportError::NotOpen);
        }
        let address = self.address.ok_or(TransportError::NoAddress)?;
        self.i2c.write(address, bytes).map_err(TransportError::Bus)
    }

    fn close(&mut self) {
        self.channel = None;
        self.address = None;
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::vec;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn write_requires_open_and_address() {
        let mut bus = I2cMock::new(&[]);
        let mut transport = I2cTransport::new(bus.clone());

        assert_eq!(transport.write(&[0x00]), Err(TransportError::NotOpen));
        assert_eq!(transport.select_address(0x3C), Err(TransportError::NotOpen));

        transport.open(1).unwrap();
        assert_eq!(transport.write(&[0x00]), Err(TransportError::NoAddress));

        bus.done();
    }

    #[test]
    fn write_goes_to_selected_address() {
        let expectations = [I2cTransaction::write(0x3D, vec![0x00, 0xAE])];
        let mut bus = I2cMock::new(&expectations);
        let mut transport = I2cTransport::new(bus.clone());

        transport.open(0).unwrap();
        transport.select_address(0x3D).unwrap();
        transport.write(&[0x00, 0xAE]).unwrap();
        transport.close();
        assert_eq!(transport.channel(), None);

        bus.done();
    }
}
