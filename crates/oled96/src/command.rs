// SSD1306 / SH1106 command definitions

// Control bytes (first byte of every bus write)
pub const COMMAND_MODE: u8 = 0x00; // Following bytes are commands
pub const DATA_MODE: u8 = 0x40; // Following bytes are display RAM data

// Fundamental commands
pub const SET_CONTRAST: u8 = 0x81; // Contrast control, followed by level byte
pub const INVERT_DISPLAY: u8 = 0xA7; // Inverse display (1 = dark pixel)
pub const DISPLAY_OFF: u8 = 0xAE; // Display off (sleep mode)

// Hardware configuration
pub const SEGMENT_REMAP_NORMAL: u8 = 0xA0; // Column 0 mapped to SEG0
pub const COM_SCAN_NORMAL: u8 = 0xC0; // Scan from COM0 to COM[N-1]

// Page addressing
pub const PAGE_ADDRESS: u8 = 0xB0; // OR'd with page number (0-7)
pub const COLUMN_LOW: u8 = 0x00; // OR'd with lower column nibble
pub const COLUMN_HIGH: u8 = 0x10; // OR'd with upper column nibble

/// Init sequence for 64-row panels (128x64, 132x64 and the 64x32 window)
///
/// Sent verbatim, command introducer included.
pub const INIT_TALL: [u8; 22] = [
    0x00, 0xAE, 0xA8, 0x3F, 0xD3, 0x00, 0x40, 0xA1, 0xC8, 0xDA, 0x12, 0x81, 0xFF, 0xA4, 0xA6,
    0xD5, 0x80, 0x8D, 0x14, 0xAF, 0x20, 0x02,
];

/// Init sequence for 32-row panels (128x32)
pub const INIT_SHORT: [u8; 24] = [
    0x00, 0xAE, 0xD5, 0x80, 0xA8, 0x1F, 0xD3, 0x00, 0x40, 0x8D, 0x14, 0xA1, 0xC8, 0xDA, 0x02,
    0x81, 0x7F, 0xD9, 0xF1, 0xDB, 0x40, 0xA4, 0xA6, 0xAF,
];
