//! GPIO input sampling
//!
//! Reads the joystick and button lines each tick and decodes them into the
//! core input types. All lines idle high through pull-ups; pressed reads
//! low, so polarity is inverted here and nowhere else.

use embassy_rp::gpio::Input;

use arithmos_core::input::{DirectionalInput, ModifierState};

/// Owns the six input lines and normalizes their polarity
pub struct InputSampler {
    up: Input<'static>,
    down: Input<'static>,
    left: Input<'static>,
    right: Input<'static>,
    sw1: Input<'static>,
    sw2: Input<'static>,
}

impl InputSampler {
    pub fn new(
        up: Input<'static>,
        down: Input<'static>,
        left: Input<'static>,
        right: Input<'static>,
        sw1: Input<'static>,
        sw2: Input<'static>,
    ) -> Self {
        Self {
            up,
            down,
            left,
            right,
            sw1,
            sw2,
        }
    }

    /// Current joystick state
    pub fn directions(&self) -> DirectionalInput {
        DirectionalInput {
            up: self.up.is_low(),
            down: self.down.is_low(),
            left: self.left.is_low(),
            right: self.right.is_low(),
        }
    }

    /// Current modifier button combination
    pub fn modifiers(&self) -> ModifierState {
        ModifierState::from_levels(self.sw1.is_low(), self.sw2.is_low())
    }
}
