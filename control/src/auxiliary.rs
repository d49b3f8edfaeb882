//! Auxiliary actuator control
//!
//! The second auxiliary channel drives a release mechanism with two
//! positions. It is evaluated every iteration regardless of drive mode.

use crate::config::{AUX_ACTIVE_DEG, AUX_INACTIVE_DEG, AUX_THRESHOLD_US};
use crate::mailbox::PulseMailbox;

/// Position of the auxiliary actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AuxPosition {
    #[default]
    Inactive,
    Active,
}

impl AuxPosition {
    /// Position selected by an auxiliary channel pulse width
    pub fn from_pulse(width_us: u16) -> Self {
        if width_us > AUX_THRESHOLD_US {
            AuxPosition::Active
        } else {
            AuxPosition::Inactive
        }
    }

    /// Actuator angle in degrees
    pub fn angle(self) -> u8 {
        match self {
            AuxPosition::Inactive => AUX_INACTIVE_DEG,
            AuxPosition::Active => AUX_ACTIVE_DEG,
        }
    }
}

/// Consumes a fresh auxiliary channel measurement, if any
pub fn poll(channel: &PulseMailbox) -> Option<AuxPosition> {
    channel.consume().map(AuxPosition::from_pulse)
}
