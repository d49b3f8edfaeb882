//! Servo and ESC output
//!
//! Drives a standard 50 Hz servo signal on channel A of a PWM slice. The slice
//! counter is clocked at 1 MHz, so the compare value is the pulse width in
//! microseconds.

use embassy_rp::pwm::{self, Pwm};
use rc_car_control::config::SERVO_FRAME_US;
use rc_car_control::servo::angle_to_pulse_us;

/// PWM slice configuration for a 20 ms frame with 1 µs resolution
pub fn frame_config() -> pwm::Config {
    let clock_freq_hz = embassy_rp::clocks::clk_sys_freq(); // 150MHz

    // Divide the system clock down to 1MHz
    let divider = (clock_freq_hz / 1_000_000) as u8;

    let mut config = pwm::Config::default();
    config.divider = divider.into();
    config.top = (SERVO_FRAME_US - 1) as u16;
    config.compare_a = 0;
    config
}

/// One pulse-width controlled actuator
pub struct Servo {
    pwm: Pwm<'static>,
    config: pwm::Config,
}

impl Servo {
    /// Wraps a PWM output created with [`frame_config`]
    pub fn new(pwm: Pwm<'static>, config: pwm::Config) -> Self {
        Self { pwm, config }
    }

    /// Commands a pulse width in microseconds
    pub fn write_us(&mut self, pulse_us: u16) {
        self.config.compare_a = pulse_us;
        self.pwm.set_config(&self.config);
    }

    /// Commands a servo angle in degrees
    pub fn write_angle(&mut self, degrees: u8) {
        self.write_us(angle_to_pulse_us(degrees));
    }
}
