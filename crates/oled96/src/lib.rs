//! # oled96
//!
//! Driver for small monochrome OLED panels built on the SSD1306 and SH1106
//! page-addressed controllers (128x32, 128x64, 132x64 and 64x32 glass).
//!
//! The driver keeps a shadow copy of display RAM. [`Oled::set_pixel`] only
//! touches the bus when a pixel actually changes, which makes redrawing
//! unchanged content over a slow I2C link almost free. On top of that sit
//! bitmap-font text rendering and integer rasterizers for lines, circles,
//! ellipses, rectangles, triangles, polygons, arcs, Bezier curves and
//! parabolas.
//!
//! ## Example
//!
//! ```rust,ignore
//! use oled96::{Builder, Color, FontSize, Fonts, I2cTransport, Oled, Variant};
//!
//! let config = Builder::new()
//!     .variant(Variant::Oled128x64)
//!     .address(0x3C)
//!     .fonts(Fonts::new().normal(&FONT_8X8))
//!     .build()?;
//!
//! let mut oled = Oled::new(I2cTransport::new(i2c), config);
//! oled.init()?;
//! oled.fill(0x00)?;
//! oled.write_string(0, 0, "Hello", FontSize::Normal)?;
//! oled.circle(64, 40, 20, Color::On)?;
//! oled.shutdown();
//! ```
//!
//! ## Features
//!
//! - `graphics` (default): embedded-graphics [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget)
//!   support for [`Oled`]
//! - `std`: link the standard library
//! - `mock`: in-memory [`mock::MockTransport`] for host-side tests

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

mod command;

pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod interface;
pub mod raster;
pub mod text;

#[cfg(feature = "graphics")]
#[cfg_attr(docsrs, doc(cfg(feature = "graphics")))]
pub mod graphics;

#[cfg(any(test, feature = "mock"))]
#[cfg_attr(docsrs, doc(cfg(feature = "mock")))]
pub mod mock;

pub use color::Color;
pub use config::{Builder, Config, DEFAULT_ADDRESS, DEFAULT_CHANNEL, Variant};
pub use display::Oled;
pub use error::{BuilderError, Error};
pub use interface::{I2cTransport, Transport, TransportError};
pub use raster::MAX_POLYGON_VERTICES;
pub use text::{FontSize, Fonts, TextBuffer, UnsupportedFontSize};
