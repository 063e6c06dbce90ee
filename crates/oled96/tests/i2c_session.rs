//! I2C session tests: drive a full `Oled` over an embedded-hal mock bus and
//! check the exact frames that reach the wire.
//!
//! Run with: cargo test -p oled96 --test i2c_session

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Line};
use embedded_graphics::primitives::PrimitiveStyle;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use oled96::{Builder, Color, Error, FontSize, Fonts, I2cTransport, Oled, TransportError, Variant};

const ADDRESS: u8 = 0x3C;

const INIT_TALL: [u8; 22] = [
    0x00, 0xAE, 0xA8, 0x3F, 0xD3, 0x00, 0x40, 0xA1, 0xC8, 0xDA, 0x12, 0x81, 0xFF, 0xA4, 0xA6,
    0xD5, 0x80, 0x8D, 0x14, 0xAF, 0x20, 0x02,
];

const INIT_SHORT: [u8; 24] = [
    0x00, 0xAE, 0xD5, 0x80, 0xA8, 0x1F, 0xD3, 0x00, 0x40, 0x8D, 0x14, 0xA1, 0xC8, 0xDA, 0x02,
    0x81, 0x7F, 0xD9, 0xF1, 0xDB, 0x40, 0xA4, 0xA6, 0xAF,
];

/// 8x8 table where every byte of glyph `c` equals `c`
static FONT_8X8: [u8; 128 * 8] = {
    let mut table = [0u8; 128 * 8];
    let mut i = 0;
    while i < table.len() {
        table[i] = (i / 8) as u8;
        i += 1;
    }
    table
};

fn write(bytes: &[u8]) -> I2cTransaction {
    I2cTransaction::write(ADDRESS, bytes.to_vec())
}

fn command(byte: u8) -> I2cTransaction {
    write(&[0x00, byte])
}

/// Cursor commands for page `page`, column `column`
fn cursor(page: u8, column: u8) -> [I2cTransaction; 3] {
    [
        command(0xB0 | page),
        command(column & 0x0F),
        command(0x10 | (column >> 4)),
    ]
}

fn session(
    variant: Variant,
    expectations: &[I2cTransaction],
) -> (Oled<I2cTransport<I2cMock>>, I2cMock) {
    let bus = I2cMock::new(expectations);
    let config = Builder::new()
        .variant(variant)
        .address(ADDRESS)
        .fonts(Fonts::new().normal(&FONT_8X8))
        .build()
        .unwrap();
    (Oled::new(I2cTransport::new(bus.clone()), config), bus)
}

#[test]
fn init_sends_tall_table_then_draws_and_shuts_down() {
    let mut expected = vec![write(&INIT_TALL)];
    expected.extend(cursor(1, 21));
    expected.push(write(&[0x40, 0x04]));
    expected.push(command(0xAE));

    let (mut oled, mut bus) = session(Variant::Oled128x64, &expected);

    oled.init().unwrap();
    oled.set_pixel(21, 10, Color::On).unwrap();
    // already lit: no bus traffic
    oled.set_pixel(21, 10, Color::On).unwrap();
    oled.shutdown();
    // second shutdown is a no-op
    oled.shutdown();

    assert!(!oled.is_initialized());
    bus.done();
}

#[test]
fn short_panel_uses_short_table_and_inverts() {
    let expected = [write(&INIT_SHORT), command(0xA7)];
    let bus = I2cMock::new(&expected);
    let config = Builder::new()
        .variant(Variant::Oled128x32)
        .invert(true)
        .build()
        .unwrap();

    let mut oled = Oled::new(I2cTransport::new(bus.clone()), config);
    oled.init().unwrap();

    let mut bus = oled.release().release();
    bus.done();
}

#[test]
fn bus_failure_during_init_leaves_session_closed() {
    let expected = [write(&INIT_TALL).with_error(embedded_hal::i2c::ErrorKind::Other)];
    let (mut oled, mut bus) = session(Variant::Oled128x64, &expected);

    let result = oled.init();
    assert!(matches!(result, Err(Error::Transport(TransportError::Bus(_)))));
    assert!(!oled.is_initialized());
    assert_eq!(oled.set_pixel(0, 0, Color::On), Err(Error::NotInitialized));
    assert_eq!(oled.transport().channel(), None);
    bus.done();
}

#[test]
fn text_goes_out_as_one_block_per_glyph() {
    let mut expected = vec![write(&INIT_TALL)];
    expected.extend(cursor(2, 16));
    expected.push(write(&[0x40, 0x48, 0x48, 0x48, 0x48, 0x48, 0x48, 0x48, 0x48]));
    expected.push(write(&[0x40, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69]));

    let (mut oled, mut bus) = session(Variant::Oled128x64, &expected);

    oled.init().unwrap();
    oled.write_string(2, 2, "Hi", FontSize::Normal).unwrap();
    assert_eq!(oled.buffer()[2 * 128 + 16], b'H');

    bus.done();
}

#[test]
fn embedded_graphics_line_only_sends_changed_pixels() {
    let mut expected = vec![write(&INIT_SHORT)];
    for x in 0..4u8 {
        expected.extend(cursor(0, x));
        expected.push(write(&[0x40, 0x01]));
    }

    let (mut oled, mut bus) = session(Variant::Oled128x32, &expected);
    oled.init().unwrap();

    let line = Line::new(Point::new(0, 0), Point::new(3, 0))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1));
    line.draw(&mut oled).unwrap();
    // same pixels again: nothing changes, nothing is written
    line.draw(&mut oled).unwrap();

    bus.done();
}

#[test]
fn sh1106_columns_are_shifted_by_two() {
    let mut expected = vec![write(&INIT_TALL)];
    expected.extend(cursor(7, 2));
    expected.push(write(&[0x40, 0x80]));

    let (mut oled, mut bus) = session(Variant::Oled132x64, &expected);
    oled.init().unwrap();
    oled.set_pixel(0, 63, Color::On).unwrap();

    bus.done();
}
