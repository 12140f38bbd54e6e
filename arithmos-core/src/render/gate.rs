//! Dirty-gated screen refresh
//!
//! Compares the counter value against the last value actually drawn and
//! issues draw commands only on change, so an idle loop costs nothing and
//! the panel never flickers.

use core::fmt::Write;

use heapless::String;

use crate::counter::{CNT_MAX, CNT_MIN};
use crate::traits::display::{Color, SurfaceError, TextSurface};

/// Pixel position of the live counter line
const VALUE_POS: (u8, u8) = (5, 50);
/// Pixel position of the static MAX label
const MAX_POS: (u8, u8) = (5, 30);
/// Pixel position of the static MIN label
const MIN_POS: (u8, u8) = (5, 70);
/// Pixel position of the MIN/MAX boundary tag
const TAG_POS: (u8, u8) = (95, 50);

/// Tracks the last rendered value and redraws only on change
#[derive(Debug)]
pub struct RenderGate {
    last_drawn: Option<i32>,
}

impl RenderGate {
    /// Nothing drawn yet, so the first refresh always paints
    pub const fn new() -> Self {
        Self { last_drawn: None }
    }

    /// Last value that reached the panel, if any
    pub fn last_drawn(&self) -> Option<i32> {
        self.last_drawn
    }

    /// Redraw the screen if `value` differs from the last drawn value.
    ///
    /// Returns `Ok(true)` when draw commands were issued. The MIN/MAX
    /// labels never change but are reprinted on every refresh so a
    /// glitched panel self-heals on the next counter change. At a bound
    /// the counter line is repainted in alert colors and tagged.
    pub fn refresh<S: TextSurface>(
        &mut self,
        value: i32,
        surface: &mut S,
    ) -> Result<bool, SurfaceError> {
        if self.last_drawn == Some(value) {
            return Ok(false);
        }

        draw_line(surface, VALUE_POS, Color::Yellow, Color::Blue, "Cnt=", value)?;
        draw_line(surface, MAX_POS, Color::Black, Color::Green, "MAX=", CNT_MAX)?;
        draw_line(surface, MIN_POS, Color::Black, Color::Green, "MIN=", CNT_MIN)?;

        if value == CNT_MAX || value == CNT_MIN {
            draw_line(surface, VALUE_POS, Color::Yellow, Color::Red, "Cnt=", value)?;
            surface.move_to(TAG_POS.0, TAG_POS.1)?;
            surface.set_colors(Color::Yellow, Color::Red)?;
            surface.write_text(if value == CNT_MIN { "MIN" } else { "MAX" })?;
        } else {
            surface.move_to(TAG_POS.0, TAG_POS.1)?;
            surface.set_colors(Color::Black, Color::Black)?;
            surface.write_text("   ")?;
        }

        self.last_drawn = Some(value);
        Ok(true)
    }
}

impl Default for RenderGate {
    fn default() -> Self {
        Self::new()
    }
}

/// One fixed-width line: label, right-aligned value, trailing blank
fn draw_line<S: TextSurface>(
    surface: &mut S,
    (x, y): (u8, u8),
    fg: Color,
    bg: Color,
    label: &str,
    value: i32,
) -> Result<(), SurfaceError> {
    let mut text: String<15> = String::new();
    // Values span -8000..15000, so {:6} always fits the cell
    let _ = write!(text, "{label}{value:6} ");
    surface.move_to(x, y)?;
    surface.set_colors(fg, bg)?;
    surface.write_text(&text)
}
