//! Indicator light selection
//!
//! Two independent lights, red and green. Red marks a left turn, green a
//! right turn. In manual mode both lit means reversing, which takes
//! precedence over turning.

use crate::classify::{ManualState, Turn};

/// Desired state of both indicator lights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Indicators {
    pub red: bool,
    pub green: bool,
}

impl Indicators {
    pub const OFF: Self = Self {
        red: false,
        green: false,
    };

    fn for_turn(turn: Turn) -> Self {
        match turn {
            Turn::Left => Self {
                red: true,
                green: false,
            },
            Turn::Right => Self {
                red: false,
                green: true,
            },
            Turn::Neutral => Self::OFF,
        }
    }

    /// Lights for autonomous mode, turning direction only
    pub fn autonomous(turn: Turn) -> Self {
        Self::for_turn(turn)
    }

    /// Lights for manual mode
    pub fn manual(state: ManualState) -> Self {
        if state.reversing {
            Self {
                red: true,
                green: true,
            }
        } else {
            Self::for_turn(state.turn)
        }
    }
}
