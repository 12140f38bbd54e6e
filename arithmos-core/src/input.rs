//! Joystick and button input types
//!
//! Raw GPIO levels are decoded into these types at the sampler boundary;
//! everything downstream of the sampler is mask-free and polarity-free.

/// Joystick state for one tick, polarity normalized so `true` = deflected.
///
/// The four flags are treated independently; the hardware decides which
/// combinations can physically occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// One of the four joystick directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Modifier button combination for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModifierState {
    /// Neither button pressed
    #[default]
    None,
    /// SW1 only - large relative steps
    Primary,
    /// SW2 only - absolute presets
    Secondary,
    /// Both buttons - hold-to-reset path, no directional action
    Both,
}

impl ModifierState {
    /// Decode two polarity-normalized button levels
    pub const fn from_levels(primary: bool, secondary: bool) -> Self {
        match (primary, secondary) {
            (false, false) => Self::None,
            (true, false) => Self::Primary,
            (false, true) => Self::Secondary,
            (true, true) => Self::Both,
        }
    }
}

/// Rising edges between two consecutive joystick samples
///
/// Recomputed every tick; never persisted beyond the tick it was computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeSet {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeSet {
    /// `current AND NOT previous`, per flag.
    ///
    /// A direction held across N consecutive ticks produces exactly one
    /// edge, on the first tick of the hold.
    pub fn rising(previous: DirectionalInput, current: DirectionalInput) -> Self {
        Self {
            up: current.up && !previous.up,
            down: current.down && !previous.down,
            left: current.left && !previous.left,
            right: current.right && !previous.right,
        }
    }

    /// First active edge in priority order Up, Down, Left, Right.
    ///
    /// Simultaneous edges should not survive the upstream deglitch filter,
    /// but the policy is one action per tick, so later matches are ignored.
    pub fn first(&self) -> Option<Direction> {
        if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Check if no edge fired this tick
    pub fn is_empty(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(up: bool, down: bool, left: bool, right: bool) -> DirectionalInput {
        DirectionalInput {
            up,
            down,
            left,
            right,
        }
    }

    #[test]
    fn test_rising_edge_on_first_tick_only() {
        let released = DirectionalInput::default();
        let held = dir(true, false, false, false);

        // Press: edge fires once
        let edges = EdgeSet::rising(released, held);
        assert_eq!(edges.first(), Some(Direction::Up));

        // Still held: no edge, no matter how many ticks pass
        for _ in 0..20 {
            let edges = EdgeSet::rising(held, held);
            assert!(edges.is_empty());
        }

        // Release and re-press: edge fires again
        let edges = EdgeSet::rising(held, released);
        assert!(edges.is_empty());
        let edges = EdgeSet::rising(released, held);
        assert_eq!(edges.first(), Some(Direction::Up));
    }

    #[test]
    fn test_release_produces_no_edge() {
        let edges = EdgeSet::rising(dir(false, true, false, false), DirectionalInput::default());
        assert!(edges.is_empty());
        assert_eq!(edges.first(), None);
    }

    #[test]
    fn test_edge_priority_order() {
        let released = DirectionalInput::default();

        // All four pressed at once: Up wins
        let edges = EdgeSet::rising(released, dir(true, true, true, true));
        assert_eq!(edges.first(), Some(Direction::Up));

        // Down + Left + Right: Down wins
        let edges = EdgeSet::rising(released, dir(false, true, true, true));
        assert_eq!(edges.first(), Some(Direction::Down));

        // Left + Right: Left wins
        let edges = EdgeSet::rising(released, dir(false, false, true, true));
        assert_eq!(edges.first(), Some(Direction::Left));

        let edges = EdgeSet::rising(released, dir(false, false, false, true));
        assert_eq!(edges.first(), Some(Direction::Right));
    }

    #[test]
    fn test_edges_are_per_flag() {
        // Up already held, Right newly pressed: only Right edges
        let previous = dir(true, false, false, false);
        let current = dir(true, false, false, true);
        let edges = EdgeSet::rising(previous, current);
        assert!(!edges.up);
        assert!(edges.right);
        assert_eq!(edges.first(), Some(Direction::Right));
    }

    #[test]
    fn test_modifier_decode() {
        assert_eq!(ModifierState::from_levels(false, false), ModifierState::None);
        assert_eq!(
            ModifierState::from_levels(true, false),
            ModifierState::Primary
        );
        assert_eq!(
            ModifierState::from_levels(false, true),
            ModifierState::Secondary
        );
        assert_eq!(ModifierState::from_levels(true, true), ModifierState::Both);
    }
}
