//! Step magnitude selection
//!
//! Maps the modifier state and an edge direction to the action applied to
//! the counter that tick.

use crate::input::{Direction, ModifierState};

/// Fine step (no modifier, up/down)
pub const CNT_STEP_1: i32 = 1;
/// Coarse step (no modifier, left/right)
pub const CNT_STEP_2: i32 = 10;
/// Fine step with the primary modifier held
pub const CNT_STEP_3: i32 = 100;
/// Coarse step with the primary modifier held
pub const CNT_STEP_4: i32 = 1000;

/// Lower counter bound, inclusive
pub const CNT_MIN: i32 = -8000;
/// Upper counter bound, inclusive
pub const CNT_MAX: i32 = 15000;
/// Mid-range preset for the secondary modifier
pub const CNT_MID: i32 = (CNT_MAX + CNT_MIN) / 2;

/// Action applied to the counter for one qualifying edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepAction {
    /// Add a signed delta to the current value
    Adjust(i32),
    /// Replace the current value outright
    Set(i32),
}

/// Select the action for an edge under the given modifier state.
///
/// `Both` has no directional action; it is reserved for the hold-reset
/// path in the counter machine.
pub fn select(modifiers: ModifierState, direction: Direction) -> Option<StepAction> {
    use Direction::*;
    use StepAction::*;

    match modifiers {
        ModifierState::None => Some(match direction {
            Up => Adjust(CNT_STEP_1),
            Down => Adjust(-CNT_STEP_1),
            Left => Adjust(-CNT_STEP_2),
            Right => Adjust(CNT_STEP_2),
        }),
        ModifierState::Primary => Some(match direction {
            Up => Adjust(CNT_STEP_3),
            Down => Adjust(-CNT_STEP_3),
            Left => Adjust(-CNT_STEP_4),
            Right => Adjust(CNT_STEP_4),
        }),
        ModifierState::Secondary => Some(match direction {
            Up => Set(CNT_MAX),
            Down => Set(CNT_MIN),
            Left => Set(0),
            Right => Set(CNT_MID),
        }),
        ModifierState::Both => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_modifier_steps() {
        assert_eq!(
            select(ModifierState::None, Direction::Up),
            Some(StepAction::Adjust(1))
        );
        assert_eq!(
            select(ModifierState::None, Direction::Down),
            Some(StepAction::Adjust(-1))
        );
        assert_eq!(
            select(ModifierState::None, Direction::Left),
            Some(StepAction::Adjust(-10))
        );
        assert_eq!(
            select(ModifierState::None, Direction::Right),
            Some(StepAction::Adjust(10))
        );
    }

    #[test]
    fn test_primary_modifier_steps() {
        assert_eq!(
            select(ModifierState::Primary, Direction::Up),
            Some(StepAction::Adjust(100))
        );
        assert_eq!(
            select(ModifierState::Primary, Direction::Down),
            Some(StepAction::Adjust(-100))
        );
        assert_eq!(
            select(ModifierState::Primary, Direction::Left),
            Some(StepAction::Adjust(-1000))
        );
        assert_eq!(
            select(ModifierState::Primary, Direction::Right),
            Some(StepAction::Adjust(1000))
        );
    }

    #[test]
    fn test_secondary_modifier_presets() {
        assert_eq!(
            select(ModifierState::Secondary, Direction::Up),
            Some(StepAction::Set(CNT_MAX))
        );
        assert_eq!(
            select(ModifierState::Secondary, Direction::Down),
            Some(StepAction::Set(CNT_MIN))
        );
        assert_eq!(
            select(ModifierState::Secondary, Direction::Left),
            Some(StepAction::Set(0))
        );
        assert_eq!(
            select(ModifierState::Secondary, Direction::Right),
            Some(StepAction::Set(CNT_MID))
        );
    }

    #[test]
    fn test_both_has_no_directional_action() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(select(ModifierState::Both, direction), None);
        }
    }

    #[test]
    fn test_mid_preset_value() {
        // (15000 + -8000) / 2
        assert_eq!(CNT_MID, 3500);
    }
}
