//! Text rendering from externally supplied glyph tables
//!
//! Glyph tables are opaque byte arrays indexed by character code with a fixed
//! stride per font size. They must already be rotated so that bit 0 of each
//! byte is the top row of the glyph, matching the controller's page layout.
//!
//! | size     | cell   | stride | pages |
//! |----------|--------|--------|-------|
//! | `Normal` | 8x8    | 8      | 1     |
//! | `Big`    | 16x24  | 64     | 3     |
//! | `Small`  | 6x8    | 6      | 1     |
//!
//! Big glyphs are stored as four 16-byte rows; only the first three are drawn.

use core::fmt::{self, Write};

use crate::display::Oled;
use crate::error::Error;
use crate::interface::Transport;

/// Capacity of the formatted text buffer used by [`Oled::print_fmt`]
pub const TEXT_CAPACITY: usize = 64;

/// Font size selector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontSize {
    /// 8x8
    Normal,
    /// 16x24
    Big,
    /// 6x8
    Small,
}

impl FontSize {
    /// Width of one character cell in pixels
    pub fn glyph_width(self) -> u16 {
        match self {
            FontSize::Normal => 8,
            FontSize::Big => 16,
            FontSize::Small => 6,
        }
    }

    /// Bytes per glyph in the table
    pub fn stride(self) -> usize {
        match self {
            FontSize::Normal => 8,
            FontSize::Big => 64,
            FontSize::Small => 6,
        }
    }

    /// Pages covered by one line of text
    pub fn pages(self) -> u8 {
        match self {
            FontSize::Big => 3,
            _ => 1,
        }
    }
}

/// Numeric font size outside 0 (normal), 1 (big), 2 (small)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedFontSize(pub u8);

impl TryFrom<u8> for FontSize {
    type Error = UnsupportedFontSize;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FontSize::Normal),
            1 => Ok(FontSize::Big),
            2 => Ok(FontSize::Small),
            other => Err(UnsupportedFontSize(other)),
        }
    }
}

impl<E> From<UnsupportedFontSize> for Error<E> {
    fn from(_: UnsupportedFontSize) -> Self {
        Error::InvalidParameter("unsupported font size")
    }
}

/// Glyph tables, one per font size
#[derive(Clone, Copy, Debug, Default)]
pub struct Fonts {
    pub normal: Option<&'static [u8]>,
    pub big: Option<&'static [u8]>,
    pub small: Option<&'static [u8]>,
}

impl Fonts {
    /// No tables; every font size is unavailable until one is supplied
    pub fn new() -> Self {
        Self::default()
    }

    /// 8-byte-stride table for [`FontSize::Normal`]
    pub fn normal(mut self, table: &'static [u8]) -> Self {
        self.normal = Some(table);
        self
    }

    /// 64-byte-stride table for [`FontSize::Big`]
    pub fn big(mut self, table: &'static [u8]) -> Self {
        self.big = Some(table);
        self
    }

    /// 6-byte-stride table for [`FontSize::Small`]
    pub fn small(mut self, table: &'static [u8]) -> Self {
        self.small = Some(table);
        self
    }

    /// Table for `size`, if one was supplied
    pub fn table(&self, size: FontSize) -> Option<&'static [u8]> {
        match size {
            FontSize::Normal => self.normal,
            FontSize::Big => self.big,
            FontSize::Small => self.small,
        }
    }
}

/// Fixed-capacity text buffer that truncates instead of overflowing
pub struct TextBuffer {
    text: heapless::String<TEXT_CAPACITY>,
    truncated: bool,
}

impl TextBuffer {
    /// Empty buffer holding up to [`TEXT_CAPACITY`] bytes
    pub fn new() -> Self {
        Self {
            text: heapless::String::new(),
            truncated: false,
        }
    }

    /// Text written so far
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Whether formatted output was cut off at capacity
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        for c in s.chars() {
            if self.text.push(c).is_err() {
                self.truncated = true;
                break;
            }
        }
        Ok(())
    }
}

impl<T> Oled<T>
where
    T: Transport,
{
    /// Draw `text` starting at character cell `x` on page `page`
    ///
    /// `x` counts cells of the font's width. Text running past the right edge
    /// is cut to the cells that fit.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when no glyph table was configured for
    /// `size`, a character has no glyph in the table, or `x` leaves no room
    /// for even one character. [`Error::OutOfRange`] when the line would
    /// extend below the last page.
    pub fn write_string(
        &mut self,
        x: i32,
        page: i32,
        text: &str,
        size: FontSize,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;

        let table = self
            .config()
            .fonts
            .table(size)
            .ok_or(Error::InvalidParameter("no glyph table for font size"))?;

        let columns = i32::from(self.width() / size.glyph_width());
        if x < 0 || x >= columns {
            return Err(Error::InvalidParameter("text starts past the last column"));
        }
        let last_page = i32::from(self.pages()) - i32::from(size.pages());
        if page < 0 || page > last_page {
            return Err(Error::OutOfRange { x, y: page });
        }
        let room = columns - x;

        let bytes = text.as_bytes();
        let count = bytes.len().min(room as usize);
        if count < bytes.len() {
            log::debug!("text truncated from {} to {} characters", bytes.len(), count);
        }
        let bytes = &bytes[..count];

        let stride = size.stride();
        if let Some(&highest) = bytes.iter().max() {
            if (highest as usize + 1) * stride > table.len() {
                return Err(Error::InvalidParameter("character outside glyph table"));
            }
        }
        let glyph = |c: u8| &table[c as usize * stride..(c as usize + 1) * stride];

        let glyph_width = size.glyph_width() as i32;
        let page = page as u8;

        match size {
            FontSize::Big => {
                for (i, &c) in bytes.iter().enumerate() {
                    let column = ((x + i as i32) * glyph_width) as u8;
                    for (row, data) in glyph(c).chunks_exact(16).take(3).enumerate() {
                        self.set_position(column, page + row as u8)?;
                        self.write_data_block(data)?;
                    }
                }
            }
            FontSize::Normal | FontSize::Small => {
                self.set_position((x * glyph_width) as u8, page)?;
                for &c in bytes {
                    self.write_data_block(glyph(c))?;
                }
            }
        }

        Ok(())
    }

    /// Format into a bounded buffer and draw it with [`write_string`]
    ///
    /// Output beyond [`TEXT_CAPACITY`] bytes is dropped. See also the
    /// [`oled_printf!`](crate::oled_printf) macro.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when a formatting trait implementation
    /// reports an error, plus everything [`write_string`] returns.
    ///
    /// [`write_string`]: Oled::write_string
    pub fn print_fmt(
        &mut self,
        x: i32,
        page: i32,
        size: FontSize,
        args: fmt::Arguments<'_>,
    ) -> Result<(), Error<T::Error>> {
        let mut buffer = TextBuffer::new();
        if buffer.write_fmt(args).is_err() {
            return Err(Error::InvalidParameter("formatting failed"));
        }
        if buffer.truncated() {
            log::warn!("formatted text exceeds {TEXT_CAPACITY} bytes, truncated");
        }
        self.write_string(x, page, buffer.as_str(), size)
    }
}

/// `printf`-style text drawing
///
/// ```rust,ignore
/// oled_printf!(oled, 0, 5, FontSize::Normal, "Who is {} {}!", name, 2)?;
/// ```
#[macro_export]
macro_rules! oled_printf {
    ($oled:expr, $x:expr, $page:expr, $size:expr, $($arg:tt)*) => {
        $oled.print_fmt($x, $page, $size, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use crate::config::{Builder, Variant};
    use crate::mock::MockTransport;
    use alloc::vec::Vec;

    /// Table where every byte of glyph `c` equals `c`
    fn table(stride: usize) -> &'static [u8] {
        (0..256 * stride)
            .map(|i| (i / stride) as u8)
            .collect::<Vec<u8>>()
            .leak()
    }

    fn session(variant: Variant) -> Oled<MockTransport> {
        let fonts = Fonts::new()
            .normal(table(8))
            .big(table(64))
            .small(table(6));
        let config = Builder::new().variant(variant).fonts(fonts).build().unwrap();
        let mut oled = Oled::new(MockTransport::new(), config);
        oled.init().unwrap();
        oled.fill(0).unwrap();
        oled
    }

    fn data_bytes(oled: &Oled<MockTransport>) -> usize {
        oled.transport().data_writes().map(<[u8]>::len).sum()
    }

    #[test]
    fn small_font_exact_fit_writes_every_column() {
        let mut oled = session(Variant::Oled128x64);
        let before = data_bytes(&oled);

        // 128 / 6 = 21 cells
        oled.write_string(0, 2, "ABCDEFGHIJKLMNOPQRSTU", FontSize::Small)
            .unwrap();
        assert_eq!(data_bytes(&oled) - before, 6 * 21);
        assert_eq!(oled.buffer()[2 * 128], b'A');
        assert_eq!(oled.buffer()[2 * 128 + 20 * 6 + 5], b'U');
    }

    #[test]
    fn one_character_too_many_is_truncated() {
        let mut oled = session(Variant::Oled128x64);
        let before = data_bytes(&oled);

        oled.write_string(1, 0, "ABCDEFGHIJKLMNOPQRSTU", FontSize::Small)
            .unwrap();
        assert_eq!(data_bytes(&oled) - before, 6 * 20);
        // 'U' never reached the panel
        assert_eq!(oled.buffer()[6 + 19 * 6], b'T');
        assert_eq!(oled.buffer()[126], 0);
    }

    #[test]
    fn start_past_last_column_is_rejected() {
        let mut oled = session(Variant::Oled128x64);
        assert_eq!(
            oled.write_string(21, 0, "A", FontSize::Small),
            Err(Error::InvalidParameter("text starts past the last column"))
        );
        assert!(oled.write_string(16, 0, "A", FontSize::Normal).is_err());
        assert!(oled.write_string(-1, 0, "A", FontSize::Normal).is_err());
        assert!(oled.write_string(15, 0, "A", FontSize::Normal).is_ok());
    }

    #[test]
    fn extreme_positions_are_rejected_without_writes() {
        let mut oled = session(Variant::Oled128x64);
        let before = oled.transport().writes().len();

        for x in [i32::MIN, i32::MIN + 1, i32::MAX] {
            assert_eq!(
                oled.write_string(x, 0, "A", FontSize::Normal),
                Err(Error::InvalidParameter("text starts past the last column"))
            );
        }
        for page in [i32::MIN, i32::MAX, i32::MAX - 2] {
            assert_eq!(
                oled.write_string(0, page, "A", FontSize::Big),
                Err(Error::OutOfRange { x: 0, y: page })
            );
        }
        assert_eq!(
            oled.write_string(0, 8, "A", FontSize::Normal),
            Err(Error::OutOfRange { x: 0, y: 8 })
        );
        assert_eq!(oled.transport().writes().len(), before);

        assert!(oled.write_string(0, 7, "A", FontSize::Normal).is_ok());
        assert!(oled.write_string(0, 5, "A", FontSize::Big).is_ok());
    }

    #[test]
    fn normal_font_uses_one_cursor_set() {
        let mut oled = session(Variant::Oled128x32);
        oled.transport_mut().clear_writes();

        oled.write_string(2, 1, "Hi", FontSize::Normal).unwrap();
        let writes = oled.transport().writes();
        assert_eq!(writes.len(), 5);
        assert_eq!(writes[0], [0x00, 0xB1]);
        assert_eq!(writes[1], [0x00, 0x00]);
        assert_eq!(writes[2], [0x00, 0x11]);
        assert_eq!(writes[3], [0x40, b'H', b'H', b'H', b'H', b'H', b'H', b'H', b'H']);
        assert_eq!(oled.buffer()[128 + 16 + 8], b'i');
    }

    #[test]
    fn big_font_spans_three_pages() {
        let mut oled = session(Variant::Oled128x64);
        let before = data_bytes(&oled);

        oled.write_string(1, 2, "AB", FontSize::Big).unwrap();
        assert_eq!(data_bytes(&oled) - before, 2 * 3 * 16);
        for page in 2..5 {
            assert_eq!(oled.buffer()[page * 128 + 16], b'A');
            assert_eq!(oled.buffer()[page * 128 + 47], b'B');
        }
        // reserved fourth row is not drawn
        assert_eq!(oled.buffer()[5 * 128 + 16], 0);

        assert_eq!(
            oled.write_string(0, 6, "A", FontSize::Big),
            Err(Error::OutOfRange { x: 0, y: 6 })
        );
    }

    #[test]
    fn missing_table_and_unknown_size() {
        let config = Builder::new().variant(Variant::Oled128x64).build().unwrap();
        let mut oled = Oled::new(MockTransport::new(), config);
        oled.init().unwrap();

        assert_eq!(
            oled.write_string(0, 0, "A", FontSize::Normal),
            Err(Error::InvalidParameter("no glyph table for font size"))
        );
        assert_eq!(FontSize::try_from(3), Err(UnsupportedFontSize(3)));
        let err: Error<()> = UnsupportedFontSize(3).into();
        assert_eq!(err.code(), -3);
    }

    #[test]
    fn glyph_outside_short_table_is_rejected() {
        static TINY: [u8; 16] = [0; 16];
        let fonts = Fonts::new().normal(&TINY);
        let config = Builder::new()
            .variant(Variant::Oled128x64)
            .fonts(fonts)
            .build()
            .unwrap();
        let mut oled = Oled::new(MockTransport::new(), config);
        oled.init().unwrap();

        assert!(oled.write_string(0, 0, "\u{1}", FontSize::Normal).is_ok());
        assert_eq!(
            oled.write_string(0, 0, "\u{2}", FontSize::Normal),
            Err(Error::InvalidParameter("character outside glyph table"))
        );
    }

    #[test]
    fn printf_formats_and_draws() {
        let mut oled = session(Variant::Oled128x64);
        crate::oled_printf!(oled, 0, 5, FontSize::Normal, "Who is {} {}!", "Kelly", 2).unwrap();
        assert_eq!(oled.buffer()[5 * 128], b'W');
        assert_eq!(oled.buffer()[5 * 128 + 14 * 8], b'!');
    }

    #[test]
    fn failing_display_impl_is_reported() {
        struct Broken;

        impl fmt::Display for Broken {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let mut oled = session(Variant::Oled128x64);
        let before = data_bytes(&oled);
        assert_eq!(
            crate::oled_printf!(oled, 0, 0, FontSize::Normal, "value {}", Broken),
            Err(Error::InvalidParameter("formatting failed"))
        );
        assert_eq!(data_bytes(&oled), before);
    }

    #[test]
    fn text_buffer_truncates_at_capacity() {
        let mut buffer = TextBuffer::new();
        write!(buffer, "{:>70}", "x").unwrap();
        assert!(buffer.truncated());
        assert_eq!(buffer.as_str().len(), TEXT_CAPACITY);

        let mut short = TextBuffer::new();
        write!(short, "{}-{}", 1, 2).unwrap();
        assert!(!short.truncated());
        assert_eq!(short.as_str(), "1-2");
    }
}
