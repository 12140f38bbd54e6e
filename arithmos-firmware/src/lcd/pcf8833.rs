//! PCF8833 LCD driver
//!
//! Driver for 130x130 Philips PCF8833-based panels (Nokia 6100 type) over
//! a bit-banged 9-bit SPI link. The RP2040 SPI block only frames 8-16 bit
//! words, so the extra command/data bit is clocked out in software.
//! Optimized for text: 5x7 glyphs in 8x8 cells, 12-bit color.

use embassy_time::{block_for, Duration};
use embedded_hal::digital::OutputPin;

use arithmos_core::traits::display::{Color, SurfaceError, TextSurface, MAX_TEXT_LEN};

use super::font::glyph;

/// Panel dimensions in pixels
const WIDTH: u8 = 130;
const HEIGHT: u8 = 130;

/// Character cell size in pixels
const CELL_W: u8 = 8;
const CELL_H: u8 = 8;

/// PCF8833 commands
#[allow(dead_code)]
mod cmd {
    pub const NOP: u8 = 0x00;
    pub const SLEEP_OUT: u8 = 0x11;
    pub const INVERSION_OFF: u8 = 0x20;
    pub const SET_CONTRAST: u8 = 0x25;
    pub const DISPLAY_ON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const PASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// PCF8833 driver over four GPIO lines
pub struct Pcf8833<SCE, SCLK, MOSI, RST> {
    sce: SCE,
    sclk: SCLK,
    mosi: MOSI,
    rst: RST,
    cursor: (u8, u8),
    fg: Color,
    bg: Color,
}

impl<SCE, SCLK, MOSI, RST> Pcf8833<SCE, SCLK, MOSI, RST>
where
    SCE: OutputPin,
    SCLK: OutputPin,
    MOSI: OutputPin,
    RST: OutputPin,
{
    /// Create a new driver. Call [`init`](Self::init) before drawing.
    pub fn new(sce: SCE, sclk: SCLK, mosi: MOSI, rst: RST) -> Self {
        Self {
            sce,
            sclk,
            mosi,
            rst,
            cursor: (0, 0),
            fg: Color::Yellow,
            bg: Color::Black,
        }
    }

    /// Hardware reset and controller bring-up
    pub fn init(&mut self) -> Result<(), SurfaceError> {
        self.rst.set_low().map_err(|_| SurfaceError::Bus)?;
        block_for(Duration::from_millis(10));
        self.rst.set_high().map_err(|_| SurfaceError::Bus)?;
        block_for(Duration::from_millis(10));

        self.command(cmd::SLEEP_OUT)?;
        self.command(cmd::INVERSION_OFF)?;
        self.command(cmd::COLMOD)?;
        self.data(0x03)?; // 12 bits per pixel
        self.command(cmd::MADCTL)?;
        self.data(0x00)?;
        self.command(cmd::SET_CONTRAST)?;
        self.data(0x30)?;
        // Charge pump needs a moment after sleep-out
        block_for(Duration::from_millis(100));
        self.command(cmd::DISPLAY_ON)
    }

    /// Fill the whole panel with one color
    pub fn clear(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.window(0, 0, WIDTH - 1, HEIGHT - 1)?;
        let v = color.rgb444();
        let pair = pack_pair(v, v);
        for _ in 0..(WIDTH as usize * HEIGHT as usize / 2) {
            self.data(pair[0])?;
            self.data(pair[1])?;
            self.data(pair[2])?;
        }
        Ok(())
    }

    /// Select a drawing window and open RAM write
    fn window(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), SurfaceError> {
        self.command(cmd::CASET)?;
        self.data(x0)?;
        self.data(x1)?;
        self.command(cmd::PASET)?;
        self.data(y0)?;
        self.data(y1)?;
        self.command(cmd::RAMWR)
    }

    /// Draw one character cell at pixel position (x, y)
    fn draw_glyph(&mut self, x: u8, y: u8, ch: u8) -> Result<(), SurfaceError> {
        self.window(x, y, x + CELL_W - 1, y + CELL_H - 1)?;

        let columns = glyph(ch);
        let fg = self.fg.rgb444();
        let bg = self.bg.rgb444();

        // Row-major pixel stream, two 12-bit pixels per three bytes.
        // Glyphs are 5 columns and 7 rows; the rest of the cell is
        // background so adjacent characters get natural spacing.
        for row in 0..CELL_H {
            for col in (0..CELL_W).step_by(2) {
                let p0 = if cell_bit(columns, col, row) { fg } else { bg };
                let p1 = if cell_bit(columns, col + 1, row) { fg } else { bg };
                let bytes = pack_pair(p0, p1);
                self.data(bytes[0])?;
                self.data(bytes[1])?;
                self.data(bytes[2])?;
            }
        }
        Ok(())
    }

    /// Send a command word (ninth bit low)
    fn command(&mut self, byte: u8) -> Result<(), SurfaceError> {
        self.write_word(false, byte)
    }

    /// Send a data word (ninth bit high)
    fn data(&mut self, byte: u8) -> Result<(), SurfaceError> {
        self.write_word(true, byte)
    }

    fn write_word(&mut self, data: bool, byte: u8) -> Result<(), SurfaceError> {
        self.sce.set_low().map_err(|_| SurfaceError::Bus)?;
        self.clock_bit(data)?;
        for i in (0..8).rev() {
            self.clock_bit(byte & (1 << i) != 0)?;
        }
        self.sce.set_high().map_err(|_| SurfaceError::Bus)
    }

    fn clock_bit(&mut self, bit: bool) -> Result<(), SurfaceError> {
        self.sclk.set_low().map_err(|_| SurfaceError::Bus)?;
        if bit {
            self.mosi.set_high().map_err(|_| SurfaceError::Bus)?;
        } else {
            self.mosi.set_low().map_err(|_| SurfaceError::Bus)?;
        }
        // Keep SCLK inside the panel's 6 MHz limit
        cortex_m::asm::delay(8);
        self.sclk.set_high().map_err(|_| SurfaceError::Bus)?;
        cortex_m::asm::delay(8);
        Ok(())
    }
}

impl<SCE, SCLK, MOSI, RST> TextSurface for Pcf8833<SCE, SCLK, MOSI, RST>
where
    SCE: OutputPin,
    SCLK: OutputPin,
    MOSI: OutputPin,
    RST: OutputPin,
{
    fn move_to(&mut self, x: u8, y: u8) -> Result<(), SurfaceError> {
        if x >= WIDTH || y >= HEIGHT {
            return Err(SurfaceError::OutOfBounds);
        }
        self.cursor = (x, y);
        Ok(())
    }

    fn set_colors(&mut self, fg: Color, bg: Color) -> Result<(), SurfaceError> {
        self.fg = fg;
        self.bg = bg;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        if text.len() > MAX_TEXT_LEN {
            return Err(SurfaceError::TextTooLong);
        }
        let (x, y) = self.cursor;
        let end = x as usize + text.len() * CELL_W as usize;
        if end > WIDTH as usize || y + CELL_H > HEIGHT {
            return Err(SurfaceError::OutOfBounds);
        }

        let mut cx = x;
        for ch in text.bytes() {
            self.draw_glyph(cx, y, ch)?;
            cx += CELL_W;
        }
        self.cursor = (cx, y);
        Ok(())
    }
}

/// Whether the cell pixel at (col, row) is part of the glyph
fn cell_bit(columns: &[u8; 5], col: u8, row: u8) -> bool {
    col < 5 && row < 7 && columns[col as usize] & (1 << row) != 0
}

/// Pack two 12-bit pixels into three data bytes
fn pack_pair(p0: u16, p1: u16) -> [u8; 3] {
    [
        (p0 >> 4) as u8,
        (((p0 & 0x00F) << 4) | (p1 >> 8)) as u8,
        (p1 & 0x0FF) as u8,
    ]
}
