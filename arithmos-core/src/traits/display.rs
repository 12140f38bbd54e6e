//! Text surface trait for the counter display
//!
//! The LCD is a dumb surface: position the cursor, pick a color pair,
//! write text. All layout and refresh decisions stay in the render gate.

/// Maximum characters accepted by a single `write_text` call
pub const MAX_TEXT_LEN: usize = 15;

/// Errors that can occur when driving a display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Communication with the panel failed
    Bus,
    /// Cursor or text extends past the drawable area
    OutOfBounds,
    /// Text longer than [`MAX_TEXT_LEN`] characters
    TextTooLong,
}

/// Colors used by the counter UI
///
/// Implementations map these to whatever pixel format the panel wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    Blue,
    Green,
    Red,
    Yellow,
}

impl Color {
    /// RGB444 value as sent to 12-bit panels
    pub const fn rgb444(self) -> u16 {
        match self {
            Color::Black => 0x000,
            Color::Blue => 0x00F,
            Color::Green => 0x0F0,
            Color::Red => 0xF00,
            Color::Yellow => 0xFF0,
        }
    }
}

/// Trait for a character-oriented display surface
pub trait TextSurface {
    /// Move the text cursor to pixel position (x, y)
    fn move_to(&mut self, x: u8, y: u8) -> Result<(), SurfaceError>;

    /// Set foreground/background colors for subsequent text
    fn set_colors(&mut self, fg: Color, bg: Color) -> Result<(), SurfaceError>;

    /// Write text at the cursor, advancing it one cell per character.
    ///
    /// At most [`MAX_TEXT_LEN`] characters per call.
    fn write_text(&mut self, text: &str) -> Result<(), SurfaceError>;
}
