//! Session state, addressing and the pixel engine

use crate::color::Color;
use crate::command::*;
use crate::config::{Config, MAX_BUFFER_SIZE};
use crate::error::Error;
use crate::interface::Transport;

/// Largest data payload of a single block write (one full page row)
pub const MAX_BLOCK_SIZE: usize = 128;

/// Driver session for one OLED panel
///
/// Owns the transport, the panel configuration and a byte-exact mirror of
/// the controller's display RAM. All drawing goes through [`set_pixel`],
/// which only touches the bus when a byte actually changes.
///
/// The session is not internally synchronized; share it behind a lock if
/// more than one context draws.
///
/// [`set_pixel`]: Oled::set_pixel
pub struct Oled<T>
where
    T: Transport,
{
    /// Byte transport
    transport: T,
    /// Panel configuration
    config: Config,
    /// Whether `init` succeeded and `shutdown` has not run since
    initialized: bool,
    /// Shadow of the controller RAM, page-major, bit 0 = top row of a page
    buffer: [u8; MAX_BUFFER_SIZE],
    /// Linear shadow offset matching the controller's write cursor
    offset: usize,
}

impl<T> Oled<T>
where
    T: Transport,
{
    /// Create a new, uninitialized session
    pub fn new(transport: T, config: Config) -> Self {
        Self {
            transport,
            config,
            initialized: false,
            buffer: [0; MAX_BUFFER_SIZE],
            offset: 0,
        }
    }

    /// Open the channel, select the device and program the controller
    ///
    /// On failure the transport is closed again and the session stays
    /// uninitialized. No other channel is tried.
    pub fn init(&mut self) -> Result<(), Error<T::Error>> {
        let channel = self.config.channel;
        let address = self.config.address;
        let variant = self.config.variant;

        self.transport.open(channel).map_err(Error::Open)?;
        if let Err(e) = self.transport.select_address(address) {
            self.transport.close();
            return Err(Error::Open(e));
        }

        if let Err(e) = self.program(variant.is_tall()) {
            self.transport.close();
            return Err(e);
        }

        self.buffer = [0; MAX_BUFFER_SIZE];
        self.offset = 0;
        self.initialized = true;

        log::debug!(
            "oled {:?} ready on channel {} address {:#04x}",
            variant,
            channel,
            address
        );
        Ok(())
    }

    /// Send the init table and the optional invert/flip commands
    fn program(&mut self, tall: bool) -> Result<(), Error<T::Error>> {
        if tall {
            self.write_raw(&INIT_TALL)?;
        } else {
            self.write_raw(&INIT_SHORT)?;
        }

        if self.config.inverted {
            self.send_command(INVERT_DISPLAY)?;
        }

        if self.config.flipped {
            self.send_command(SEGMENT_REMAP_NORMAL)?;
            self.send_command(COM_SCAN_NORMAL)?;
        }

        Ok(())
    }

    /// Turn the panel off and release the transport
    ///
    /// Does nothing when the session is not initialized.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }

        if let Err(e) = self.send_command(DISPLAY_OFF) {
            log::warn!("display off failed during shutdown: {e:?}");
        }
        self.transport.close();
        self.initialized = false;

        log::debug!("oled shut down");
    }

    /// Set contrast (0 = dimmest, 255 = brightest)
    pub fn set_contrast(&mut self, level: u8) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        self.write_raw(&[COMMAND_MODE, SET_CONTRAST, level])
    }

    /// Fill every page with `pattern`
    ///
    /// Always writes one full row per page; there is no dirty-check at
    /// this granularity.
    pub fn fill(&mut self, pattern: u8) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;

        let width = self.width() as usize;
        let row = [pattern; MAX_BLOCK_SIZE];

        for page in 0..self.pages() {
            self.set_position(0, page)?;
            self.write_data_block(&row[..width])?;
        }

        Ok(())
    }

    /// Clear the whole panel
    pub fn clear(&mut self) -> Result<(), Error<T::Error>> {
        self.fill(0x00)
    }

    /// Set or clear a single pixel
    ///
    /// The new byte is computed from the shadow buffer. When it equals the
    /// byte already on the device nothing is sent.
    ///
    /// # Errors
    ///
    /// [`Error::NotInitialized`] before `init`, [`Error::OutOfRange`] for
    /// coordinates off the panel.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;

        let (index, bit) = self.locate(x, y).ok_or(Error::OutOfRange { x, y })?;

        let old = self.buffer[index];
        let new = match color {
            Color::On => old | bit,
            Color::Off => old & !bit,
        };

        if new == old {
            return Ok(());
        }

        // on-panel coordinates fit in a u8
        self.set_position(x as u8, (y >> 3) as u8)?;
        self.write_data_block(&[new])
    }

    /// Read a pixel back from the shadow buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (index, bit) = self.locate(x, y)?;
        Some(Color::from(self.buffer[index] & bit != 0))
    }

    /// Shadow buffer index and bit mask for a pixel
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        let width = self.width() as i32;
        let height = self.height() as i32;

        if !(0..width).contains(&x) || !(0..height).contains(&y) {
            return None;
        }

        let index = ((y >> 3) * width + x) as usize;
        Some((index, 1 << (y & 7)))
    }

    /// Point the controller's write cursor at column `x` of page `page`
    ///
    /// Must precede every block write: the controller only auto-increments
    /// within the addressed page.
    pub(crate) fn set_position(&mut self, x: u8, page: u8) -> Result<(), Error<T::Error>> {
        self.offset = page as usize * self.width() as usize + x as usize;

        let variant = self.config.variant;
        let column = x.wrapping_add(variant.column_offset());
        let page = page.wrapping_add(variant.page_offset(self.config.flipped));

        log::trace!("cursor -> page {page} column {column}");

        self.send_command(PAGE_ADDRESS | (page & 0x0F))?;
        self.send_command(COLUMN_LOW | (column & 0x0F))?;
        self.send_command(COLUMN_HIGH | ((column >> 4) & 0x0F))
    }

    /// Write display data at the cursor and mirror it into the shadow buffer
    ///
    /// The payload must fit in the remainder of the current page.
    pub(crate) fn write_data_block(&mut self, data: &[u8]) -> Result<(), Error<T::Error>> {
        if data.len() > MAX_BLOCK_SIZE {
            return Err(Error::InvalidParameter("block larger than one page row"));
        }

        let end = self.offset + data.len();
        if end > self.buffer_size() {
            let width = self.width() as usize;
            return Err(Error::OutOfRange {
                x: (self.offset % width) as i32,
                y: (self.offset / width) as i32,
            });
        }

        let mut frame = [0u8; MAX_BLOCK_SIZE + 1];
        frame[0] = DATA_MODE;
        frame[1..=data.len()].copy_from_slice(data);
        self.write_raw(&frame[..=data.len()])?;

        self.buffer[self.offset..end].copy_from_slice(data);
        self.offset = end;

        Ok(())
    }

    pub(crate) fn ensure_initialized(&self) -> Result<(), Error<T::Error>> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Send a single command byte
    fn send_command(&mut self, command: u8) -> Result<(), Error<T::Error>> {
        self.write_raw(&[COMMAND_MODE, command])
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<(), Error<T::Error>> {
        self.transport.write(bytes).map_err(Error::Transport)
    }

    /// Whether `init` succeeded and `shutdown` has not run since
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Visible width in pixels
    pub fn width(&self) -> u16 {
        self.config.width()
    }

    /// Visible height in pixels
    pub fn height(&self) -> u16 {
        self.config.height()
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u8 {
        self.config.variant.pages()
    }

    fn buffer_size(&self) -> usize {
        self.config.variant.buffer_size()
    }

    /// The shadow buffer, `width * height / 8` bytes
    pub fn buffer(&self) -> &[u8] {
        &self.buffer[..self.buffer_size()]
    }

    /// Access the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Access the transport mutably
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give back the transport
    pub fn release(self) -> T {
        self.transport
    }
}
