//! Servo angle to pulse width conversion
//!
//! Standard hobby servos take a 50 Hz frame whose pulse width selects the
//! horn position. The full 0..=180 degree travel spans 544..=2400 µs.

use crate::config::{SERVO_MAX_PULSE_US, SERVO_MIN_PULSE_US};

/// Pulse width for a servo angle (µs); angles past 180 degrees saturate
pub fn angle_to_pulse_us(degrees: u8) -> u16 {
    let degrees = u32::from(degrees.min(180));
    let min = u32::from(SERVO_MIN_PULSE_US);
    let max = u32::from(SERVO_MAX_PULSE_US);

    // Linear interpolation between min and max pulse, at most 2400
    (min + degrees * (max - min) / 180) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_and_center() {
        assert_eq!(angle_to_pulse_us(0), 544);
        assert_eq!(angle_to_pulse_us(90), 1472);
        assert_eq!(angle_to_pulse_us(180), 2400);
    }

    #[test]
    fn test_steering_limits() {
        assert_eq!(angle_to_pulse_us(40), 956);
        assert_eq!(angle_to_pulse_us(140), 1987);
    }

    #[test]
    fn test_saturates_past_full_travel() {
        assert_eq!(angle_to_pulse_us(255), 2400);
    }
}
