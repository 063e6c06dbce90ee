//! Graphics support via embedded-graphics
//!
//! [`Oled`] implements [`DrawTarget`] so any embedded-graphics primitive,
//! mono font or image can be drawn straight onto the panel.
//!
//! Each pixel goes through [`Oled::set_pixel`], so only pixels whose state
//! actually changes reach the bus. Large fills are cheaper with
//! [`Oled::fill`], which [`DrawTarget::clear`] uses.
//!
//! ## Example
//!
//! ```rust,ignore
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//!     text::Text,
//! };
//!
//! Circle::new(Point::new(40, 8), 48)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut oled)?;
//!
//! Text::new("Hello", Point::new(0, 10), MonoTextStyle::new(&FONT_6X10, BinaryColor::On))
//!     .draw(&mut oled)?;
//! ```

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
};

use crate::display::Oled;
use crate::error::Error;
use crate::interface::Transport;

impl<T> DrawTarget for Oled<T>
where
    T: Transport,
{
    type Color = BinaryColor;
    type Error = Error<T::Error>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.ensure_initialized()?;

        for Pixel(point, color) in pixels {
            match self.set_pixel(point.x, point.y, color.into()) {
                Ok(()) | Err(Error::OutOfRange { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(if color.is_on() { 0xFF } else { 0x00 })
    }
}

impl<T> OriginDimensions for Oled<T>
where
    T: Transport,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}
