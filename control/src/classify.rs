//! Vehicle state classification
//!
//! Derived from scratch every iteration from the current steering angle and
//! ESC command. The two modes use different right-turn dead zone bounds:
//! autonomous is neutral on 83..=93 degrees, manual on 80..=93 degrees.
//! Bounds themselves are neutral.

use crate::config::{
    AUTONOMOUS_TURN_RIGHT_BELOW_DEG, MANUAL_TURN_RIGHT_BELOW_DEG, REVERSING_THRESHOLD_US,
    TURN_LEFT_ABOVE_DEG,
};

/// Turning direction implied by a steering angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Turn {
    Left,
    Right,
    #[default]
    Neutral,
}

impl Turn {
    fn with_right_bound(angle: u8, right_below: u8) -> Self {
        if angle > TURN_LEFT_ABOVE_DEG {
            Turn::Left
        } else if angle < right_below {
            Turn::Right
        } else {
            Turn::Neutral
        }
    }

    /// Classification of an autonomous steering angle
    pub fn autonomous(angle: u8) -> Self {
        Self::with_right_bound(angle, AUTONOMOUS_TURN_RIGHT_BELOW_DEG)
    }

    /// Classification of a manual steering angle
    pub fn manual(angle: u8) -> Self {
        Self::with_right_bound(angle, MANUAL_TURN_RIGHT_BELOW_DEG)
    }
}

/// Manual mode vehicle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ManualState {
    pub turn: Turn,
    /// ESC command is below the reversing threshold
    pub reversing: bool,
}

impl ManualState {
    /// Both parts are computed independently of each other
    pub fn classify(angle: u8, esc_us: u16) -> Self {
        Self {
            turn: Turn::manual(angle),
            reversing: esc_us < REVERSING_THRESHOLD_US,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autonomous_dead_zone_bounds_are_neutral() {
        assert_eq!(Turn::autonomous(93), Turn::Neutral);
        assert_eq!(Turn::autonomous(83), Turn::Neutral);
        assert_eq!(Turn::autonomous(90), Turn::Neutral);
        assert_eq!(Turn::autonomous(94), Turn::Left);
        assert_eq!(Turn::autonomous(82), Turn::Right);
    }

    #[test]
    fn test_manual_dead_zone_bounds_are_neutral() {
        assert_eq!(Turn::manual(93), Turn::Neutral);
        assert_eq!(Turn::manual(80), Turn::Neutral);
        assert_eq!(Turn::manual(94), Turn::Left);
        assert_eq!(Turn::manual(79), Turn::Right);
    }

    #[test]
    fn test_dead_zones_differ_between_modes() {
        for angle in 80..83 {
            assert_eq!(Turn::autonomous(angle), Turn::Right);
            assert_eq!(Turn::manual(angle), Turn::Neutral);
        }
    }

    #[test]
    fn test_reversing_threshold_is_strict() {
        assert!(ManualState::classify(90, 1449).reversing);
        assert!(!ManualState::classify(90, 1450).reversing);
        assert!(!ManualState::classify(90, 1560).reversing);
    }

    #[test]
    fn test_turn_computed_while_reversing() {
        let state = ManualState::classify(120, 1440);
        assert!(state.reversing);
        assert_eq!(state.turn, Turn::Left);
    }
}
