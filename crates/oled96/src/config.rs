//! Panel configuration types and builder

pub use crate::error::BuilderError;
use crate::text::Fonts;

/// Default 7-bit bus address of SSD1306 modules (0x3D is the common alternative)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Default bus channel (`/dev/i2c-1` on a Raspberry Pi)
pub const DEFAULT_CHANNEL: u8 = 1;

/// Largest shadow buffer of any supported variant (128x64 / 8)
pub const MAX_BUFFER_SIZE: usize = 1024;

/// Supported panel variants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// 128x32 SSD1306
    Oled128x32,
    /// 128x64 SSD1306
    Oled128x64,
    /// SH1106: 128 visible columns centered in 132-column RAM
    Oled132x64,
    /// 64x32 window centered in 128x64 RAM
    Oled64x32,
}

impl Variant {
    /// Logical (visible) width in pixels
    pub fn width(self) -> u16 {
        match self {
            Variant::Oled64x32 => 64,
            _ => 128,
        }
    }

    /// Logical (visible) height in pixels
    pub fn height(self) -> u16 {
        match self {
            Variant::Oled128x32 | Variant::Oled64x32 => 32,
            Variant::Oled128x64 | Variant::Oled132x64 => 64,
        }
    }

    /// Number of 8-row pages
    pub fn pages(self) -> u8 {
        (self.height() / 8) as u8
    }

    /// Shadow buffer size in bytes
    pub fn buffer_size(self) -> usize {
        self.width() as usize * self.height() as usize / 8
    }

    /// Controller RAM is 64 rows tall (selects the tall init table)
    pub fn is_tall(self) -> bool {
        !matches!(self, Variant::Oled128x32)
    }

    /// Column added to the logical x before addressing the controller
    pub fn column_offset(self) -> u8 {
        match self {
            Variant::Oled64x32 => 32,
            Variant::Oled132x64 => 2,
            _ => 0,
        }
    }

    /// Page added to the logical page before addressing the controller
    ///
    /// The 64x32 window starts at page 4 unless the panel is flipped.
    pub fn page_offset(self, flipped: bool) -> u8 {
        match self {
            Variant::Oled64x32 if !flipped => 4,
            _ => 0,
        }
    }
}

/// Display configuration
///
/// Use [`Builder`] to create a Config. It is not modified once handed to
/// a session.
#[derive(Clone, Debug)]
pub struct Config {
    /// Panel variant
    pub variant: Variant,
    /// Bus channel passed to [`Transport::open`](crate::interface::Transport::open)
    pub channel: u8,
    /// 7-bit device address
    pub address: u8,
    /// Rotate the picture 180 degrees
    pub flipped: bool,
    /// Invert pixel polarity
    pub inverted: bool,
    /// Glyph tables used by the text renderer
    pub fonts: Fonts,
}

impl Config {
    /// Logical width in pixels, excluding any column offset
    pub fn width(&self) -> u16 {
        self.variant.width()
    }

    /// Logical height in pixels
    pub fn height(&self) -> u16 {
        self.variant.height()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use oled96::{Builder, Variant};
///
/// let config = Builder::new()
///     .variant(Variant::Oled128x64)
///     .address(0x3D)
///     .flip(true)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.width(), 128);
/// ```
pub struct Builder {
    /// Panel variant (required)
    variant: Option<Variant>,
    channel: u8,
    address: u8,
    flipped: bool,
    inverted: bool,
    fonts: Fonts,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            variant: None,
            channel: DEFAULT_CHANNEL,
            address: DEFAULT_ADDRESS,
            flipped: false,
            inverted: false,
            fonts: Fonts::default(),
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel variant (required)
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Set bus channel
    pub fn channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    /// Set device address
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Rotate the picture 180 degrees
    pub fn flip(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    /// Invert pixel polarity
    pub fn invert(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Set glyph tables for text rendering
    pub fn fonts(mut self, fonts: Fonts) -> Self {
        self.fonts = fonts;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingVariant` if the variant was not set and
    /// `BuilderError::InvalidAddress` for addresses above 0x7F.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.address > 0x7F {
            return Err(BuilderError::InvalidAddress(self.address));
        }
        Ok(Config {
            variant: self.variant.ok_or(BuilderError::MissingVariant)?,
            channel: self.channel,
            address: self.address,
            flipped: self.flipped,
            inverted: self.inverted,
            fonts: self.fonts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_dimensions() {
        assert_eq!((Variant::Oled128x32.width(), Variant::Oled128x32.height()), (128, 32));
        assert_eq!((Variant::Oled128x64.width(), Variant::Oled128x64.height()), (128, 64));
        assert_eq!((Variant::Oled132x64.width(), Variant::Oled132x64.height()), (128, 64));
        assert_eq!((Variant::Oled64x32.width(), Variant::Oled64x32.height()), (64, 32));
        assert_eq!(Variant::Oled128x64.buffer_size(), MAX_BUFFER_SIZE);
        assert_eq!(Variant::Oled64x32.pages(), 4);
    }

    #[test]
    fn addressing_offsets() {
        assert_eq!(Variant::Oled64x32.column_offset(), 32);
        assert_eq!(Variant::Oled64x32.page_offset(false), 4);
        assert_eq!(Variant::Oled64x32.page_offset(true), 0);
        assert_eq!(Variant::Oled132x64.column_offset(), 2);
        assert_eq!(Variant::Oled132x64.page_offset(false), 0);
        assert_eq!(Variant::Oled128x64.column_offset(), 0);
    }

    #[test]
    fn builder_defaults() {
        let config = Builder::new().variant(Variant::Oled128x32).build().unwrap();
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.channel, DEFAULT_CHANNEL);
        assert!(!config.flipped);
        assert!(!config.inverted);
    }

    #[test]
    fn builder_rejects_wide_address() {
        let result = Builder::new()
            .variant(Variant::Oled128x64)
            .address(0x80)
            .build();
        assert_eq!(result.unwrap_err(), BuilderError::InvalidAddress(0x80));
    }
}
