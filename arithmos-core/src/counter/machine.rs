//! Counter state machine
//!
//! Owns the bounded counter value and the both-buttons hold timer. All
//! mutation goes through [`CounterMachine::tick`], so the range invariant
//! holds between any two ticks.

use super::step::{self, StepAction, CNT_MAX, CNT_MIN};
use crate::input::{EdgeSet, ModifierState};

/// Consecutive ticks both modifiers must stay held to reset the counter
pub const HOLD_RESET_TICKS: u8 = 10;

/// The bounded counter plus its hold-to-reset timer.
///
/// Invariant: `CNT_MIN <= value <= CNT_MAX` after every tick. A step whose
/// result would land outside the range is dropped for that tick rather than
/// saturated; landing exactly on a bound is a legitimate resting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CounterMachine {
    value: i32,
    hold_ticks: u8,
}

impl CounterMachine {
    /// Counter starts at zero with the hold timer idle
    pub const fn new() -> Self {
        Self {
            value: 0,
            hold_ticks: 0,
        }
    }

    /// Current counter value
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Advance one tick and return the value afterwards.
    ///
    /// While both modifiers are held the hold timer runs and directional
    /// edges are ignored; any break in the hold clears the timer. Otherwise
    /// the first edge in priority order picks a step action, which is
    /// applied only if the result stays in range.
    pub fn tick(&mut self, modifiers: ModifierState, edges: EdgeSet) -> i32 {
        if modifiers == ModifierState::Both {
            self.hold_ticks += 1;
            if self.hold_ticks == HOLD_RESET_TICKS {
                self.value = 0;
                self.hold_ticks = 0;
            }
            return self.value;
        }
        self.hold_ticks = 0;

        let Some(direction) = edges.first() else {
            return self.value;
        };
        let Some(action) = step::select(modifiers, direction) else {
            return self.value;
        };

        let candidate = match action {
            StepAction::Adjust(delta) => self.value + delta,
            StepAction::Set(target) => target,
        };
        // Out-of-range results are discarded, not clamped: a +1 overshoot
        // past either bound skips the mutation for that tick.
        if (CNT_MIN..=CNT_MAX).contains(&candidate) {
            self.value = candidate;
        }
        self.value
    }
}

impl Default for CounterMachine {
    fn default() -> Self {
        Self::new()
    }
}
