//! Throttle governor
//!
//! Manual mode attenuates stick deflection to 20% around neutral, so the
//! vehicle never runs at full radio authority. Autonomous mode drives at one
//! of two fixed forward speeds, slower while turning sharply.

use crate::config::{
    AUTONOMOUS_CRUISE_US, AUTONOMOUS_TURN_US, PULSE_NEUTRAL_US, SHARP_TURN_DEG,
    STEERING_CENTER_DEG, THROTTLE_ATTENUATION,
};
use core::cmp::Ordering;

/// ESC command for a measured manual throttle pulse (µs)
///
/// Integer division truncates towards neutral on both sides.
pub fn governed_pulse(measured_us: u16) -> u16 {
    let neutral = PULSE_NEUTRAL_US;
    match measured_us.cmp(&neutral) {
        Ordering::Greater => neutral + (measured_us - neutral) / THROTTLE_ATTENUATION,
        Ordering::Less => neutral - (neutral - measured_us) / THROTTLE_ATTENUATION,
        Ordering::Equal => neutral,
    }
}

/// ESC command for an autonomous steering angle (µs)
pub fn autonomous_pulse(steering_deg: u8) -> u16 {
    if steering_deg.abs_diff(STEERING_CENTER_DEG) > SHARP_TURN_DEG {
        AUTONOMOUS_TURN_US
    } else {
        AUTONOMOUS_CRUISE_US
    }
}
