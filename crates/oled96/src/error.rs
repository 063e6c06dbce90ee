//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and session operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`TransportError`](crate::interface::TransportError) - Low-level bus errors
//!
//! Every runtime error also has a stable numeric [`code`](Error::code), so
//! callers bridging to a C-style status API can keep `0 == success`.
//!
//! ## Example
//!
//! ```
//! use oled96::{Builder, BuilderError};
//!
//! // Missing panel variant
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingVariant)));
//! ```

use core::fmt::Debug;

/// Errors that can occur when interacting with the display
///
/// Generic over the transport error type so callers can match on the
/// underlying bus failure.
#[derive(Debug, PartialEq)]
pub enum Error<E> {
    /// Operation attempted before a successful `init` or after `shutdown`
    NotInitialized,
    /// Pixel or buffer position outside the shadow buffer
    OutOfRange {
        /// Column requested
        x: i32,
        /// Row (or page, for block writes) requested
        y: i32,
    },
    /// Unsupported argument, e.g. unknown font size or text placed past
    /// the last renderable column
    InvalidParameter(&'static str),
    /// Opening the channel or selecting the device address failed
    Open(E),
    /// A write to the device failed
    Transport(E),
}

impl<E> Error<E> {
    /// Numeric status code for this error
    ///
    /// | code | meaning           |
    /// |------|-------------------|
    /// | -1   | not initialized   |
    /// | -2   | out of range      |
    /// | -3   | invalid parameter |
    /// | -4   | transport write   |
    /// | -5   | open / address    |
    pub fn code(&self) -> i32 {
        match self {
            Error::NotInitialized => -1,
            Error::OutOfRange { .. } => -2,
            Error::InvalidParameter(_) => -3,
            Error::Transport(_) => -4,
            Error::Open(_) => -5,
        }
    }
}

impl<E: Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::NotInitialized => write!(f, "Display not initialized"),
            Error::OutOfRange { x, y } => write!(f, "Position out of range: ({x}, {y})"),
            Error::InvalidParameter(what) => write!(f, "Invalid parameter: {what}"),
            Error::Open(e) => write!(f, "Failed to open display: {e:?}"),
            Error::Transport(e) => write!(f, "Transport error: {e:?}"),
        }
    }
}

impl<E: Debug> core::error::Error for Error<E> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Panel variant was not specified
    ///
    /// [`Builder::variant()`](crate::config::Builder::variant) must be called before building.
    MissingVariant,
    /// Device address outside the 7-bit range
    InvalidAddress(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::MissingVariant => write!(f, "Panel variant must be specified"),
            BuilderError::InvalidAddress(addr) => {
                write!(f, "Invalid device address {addr:#04x} (must be 7-bit)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
