//! Steering mapper
//!
//! Manual mode maps the receiver pulse linearly onto the servo travel.
//! Autonomous mode offsets the servo from center by the received command.
//! Both clamp to the mechanical limits of the steering linkage.

use crate::config::{
    STEERING_CENTER_DEG, STEERING_MAX_DEG, STEERING_MIN_DEG, STEERING_OFFSET_LIMIT,
    STEERING_PULSE_MAX_US, STEERING_PULSE_MIN_US,
};

/// Re-maps `value` from one range onto another using integer arithmetic
///
/// Not clamped: values outside the input range land outside the output
/// range. The division truncates towards zero.
pub fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

fn clamp_angle(angle: i32) -> u8 {
    // the clamp keeps the value within u8 range
    angle.clamp(i32::from(STEERING_MIN_DEG), i32::from(STEERING_MAX_DEG)) as u8
}

/// Servo angle for a measured manual steering pulse (degrees)
pub fn manual_angle(pulse_us: u16) -> u8 {
    clamp_angle(map_range(
        i32::from(pulse_us),
        STEERING_PULSE_MIN_US,
        STEERING_PULSE_MAX_US,
        i32::from(STEERING_MIN_DEG),
        i32::from(STEERING_MAX_DEG),
    ))
}

/// Servo angle for an autonomous steering offset (degrees)
pub fn autonomous_angle(offset: i32) -> u8 {
    let offset = offset.clamp(-STEERING_OFFSET_LIMIT, STEERING_OFFSET_LIMIT);
    clamp_angle(i32::from(STEERING_CENTER_DEG) + offset)
}
