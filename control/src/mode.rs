//! Drive mode arbitration
//!
//! The mode channel is a plain threshold comparator: a fresh pulse above
//! 1500 µs selects autonomous control, anything else selects manual control.
//! There is no hysteresis. Without a fresh pulse the mode is left unchanged.

use crate::config::MODE_THRESHOLD_US;
use crate::mailbox::PulseMailbox;

/// Who is driving the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveMode {
    /// Throttle and steering come from the radio receiver
    #[default]
    Manual,
    /// Steering comes from the serial link, throttle is fixed
    Autonomous,
}

impl DriveMode {
    /// Mode selected by a mode channel pulse width
    pub fn from_pulse(width_us: u16) -> Self {
        if width_us > MODE_THRESHOLD_US {
            DriveMode::Autonomous
        } else {
            DriveMode::Manual
        }
    }
}

/// Holds the current drive mode
#[derive(Debug, Default)]
pub struct ModeArbiter {
    mode: DriveMode,
}

impl ModeArbiter {
    /// Starts in manual mode
    pub const fn new() -> Self {
        Self {
            mode: DriveMode::Manual,
        }
    }

    pub fn mode(&self) -> DriveMode {
        self.mode
    }

    /// Consumes a fresh mode channel measurement, if any
    ///
    /// Returns the new mode only when it changed.
    pub fn update(&mut self, channel: &PulseMailbox) -> Option<DriveMode> {
        let new_mode = DriveMode::from_pulse(channel.consume()?);
        if new_mode == self.mode {
            return None;
        }
        self.mode = new_mode;
        Some(new_mode)
    }
}
