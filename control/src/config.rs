//! Fixed control thresholds
//!
//! The vehicle has no runtime configuration. All numbers that shape its
//! behavior are collected here.

/// Neutral pulse width of a standard RC channel (µs)
pub const PULSE_NEUTRAL_US: u16 = 1500;

/// Mode channel pulse above which the vehicle is under autonomous control (µs)
pub const MODE_THRESHOLD_US: u16 = 1500;

/// Auxiliary channel pulse above which the auxiliary actuator is active (µs)
pub const AUX_THRESHOLD_US: u16 = 1500;

/// Auxiliary actuator angle when inactive (degrees)
pub const AUX_INACTIVE_DEG: u8 = 0;

/// Auxiliary actuator angle when active (degrees)
pub const AUX_ACTIVE_DEG: u8 = 180;

/// Manual throttle deflection is divided by this around neutral (20%)
pub const THROTTLE_ATTENUATION: u16 = 5;

/// Manual throttle command below which the vehicle counts as reversing (µs)
pub const REVERSING_THRESHOLD_US: u16 = 1450;

/// Lower bound of the receiver steering pulse range (µs)
pub const STEERING_PULSE_MIN_US: i32 = 1000;

/// Upper bound of the receiver steering pulse range (µs)
pub const STEERING_PULSE_MAX_US: i32 = 2000;

/// Steering servo limits and center (degrees)
pub const STEERING_MIN_DEG: u8 = 40;
pub const STEERING_MAX_DEG: u8 = 140;
pub const STEERING_CENTER_DEG: u8 = 90;

/// Serial steering offsets are clamped to +/- this value
pub const STEERING_OFFSET_LIMIT: i32 = 50;

/// Deviation from center beyond which an autonomous turn counts as sharp (degrees)
pub const SHARP_TURN_DEG: u8 = 30;

/// Autonomous ESC command during a sharp turn (µs)
pub const AUTONOMOUS_TURN_US: u16 = 1553;

/// Autonomous ESC command while near-straight (µs)
pub const AUTONOMOUS_CRUISE_US: u16 = 1555;

/// Steering angle above which the vehicle is turning left, both modes (degrees)
pub const TURN_LEFT_ABOVE_DEG: u8 = 93;

/// Autonomous steering angle below which the vehicle is turning right (degrees)
pub const AUTONOMOUS_TURN_RIGHT_BELOW_DEG: u8 = 83;

/// Manual steering angle below which the vehicle is turning right (degrees)
pub const MANUAL_TURN_RIGHT_BELOW_DEG: u8 = 80;

/// Manual channel sampling timeout per channel (µs)
pub const SAMPLE_TIMEOUT_US: u64 = 25_000;

/// Serial line terminator
pub const LINE_TERMINATOR: u8 = b'\n';

/// Serial line buffer capacity (bytes)
pub const LINE_CAPACITY: usize = 32;

/// Serial link baud rate
pub const SERIAL_BAUD: u32 = 9600;

/// Delay between neutral outputs at startup and enabling inputs (ms)
pub const ARMING_DELAY_MS: u64 = 2000;

/// Pause between control loop iterations (ms)
pub const CONTROL_INTERVAL_MS: u64 = 2;

/// Servo pulse width at 0 degrees (µs)
pub const SERVO_MIN_PULSE_US: u16 = 544;

/// Servo pulse width at 180 degrees (µs)
pub const SERVO_MAX_PULSE_US: u16 = 2400;

/// Servo and ESC frame period (µs), 50 Hz
pub const SERVO_FRAME_US: u32 = 20_000;
