//! Control loop state
//!
//! [`Controller`] owns everything the control loop carries between
//! iterations: the drive mode, the partially received serial line and the
//! last commanded steering angle. The firmware calls it once per iteration:
//!
//! 1. [`Controller::update_mode`] with the mode channel mailbox
//! 2. [`Controller::update_aux`] with the auxiliary channel mailbox
//! 3. depending on [`Controller::mode`], either
//!    - [`Controller::receive`] followed by [`Controller::autonomous_step`], or
//!    - [`Controller::manual_step`] with freshly sampled receiver pulses
//!
//! and writes the returned [`Actuation`] to the ESC, steering servo and
//! indicator lights.

use crate::auxiliary::{self, AuxPosition};
use crate::classify::{ManualState, Turn};
use crate::command::LineBuffer;
use crate::config::{PULSE_NEUTRAL_US, STEERING_CENTER_DEG};
use crate::error::CommandError;
use crate::indicator::Indicators;
use crate::mailbox::PulseMailbox;
use crate::mode::{DriveMode, ModeArbiter};
use crate::{steering, throttle};

/// Outputs computed by one control path iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Actuation {
    /// ESC pulse width (µs)
    pub esc_us: u16,
    /// Steering servo angle (degrees)
    pub steering_deg: u8,
    pub indicators: Indicators,
}

impl Actuation {
    /// Outputs commanded before the control loop starts
    pub const NEUTRAL: Self = Self {
        esc_us: PULSE_NEUTRAL_US,
        steering_deg: STEERING_CENTER_DEG,
        indicators: Indicators::OFF,
    };
}

/// Control loop state carried between iterations
#[derive(Debug)]
pub struct Controller {
    arbiter: ModeArbiter,
    line: LineBuffer,
    steering_deg: u8,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Manual mode, empty line, centered steering
    pub const fn new() -> Self {
        Self {
            arbiter: ModeArbiter::new(),
            line: LineBuffer::new(),
            steering_deg: STEERING_CENTER_DEG,
        }
    }

    pub fn mode(&self) -> DriveMode {
        self.arbiter.mode()
    }

    /// Last steering angle written by either control path
    pub fn steering_angle(&self) -> u8 {
        self.steering_deg
    }

    /// Applies a fresh mode channel measurement; returns the mode if it changed
    pub fn update_mode(&mut self, channel: &PulseMailbox) -> Option<DriveMode> {
        self.arbiter.update(channel)
    }

    /// Applies a fresh auxiliary channel measurement
    pub fn update_aux(&self, channel: &PulseMailbox) -> Option<AuxPosition> {
        auxiliary::poll(channel)
    }

    /// Drains serial bytes from `next_byte` into the line buffer
    ///
    /// Stops after the first terminator so at most one line completes per
    /// iteration; later bytes stay with the source. Bytes that overflow the
    /// line buffer are dropped and reported once the draining is done.
    pub fn receive(&mut self, mut next_byte: impl FnMut() -> Option<u8>) -> Result<(), CommandError> {
        let mut result = Ok(());
        while !self.line.is_complete() {
            let Some(byte) = next_byte() else {
                break;
            };
            if let Err(e) = self.line.push(byte) {
                result = Err(e);
            }
        }
        result
    }

    /// Autonomous path: acts on a completed serial line, if any
    ///
    /// Returns `None` when no line completed, in which case nothing should be
    /// written and all actuators hold their last command.
    pub fn autonomous_step(&mut self) -> Option<Actuation> {
        let offset = self.line.take_command()?;
        let steering_deg = steering::autonomous_angle(offset);
        self.steering_deg = steering_deg;

        Some(Actuation {
            esc_us: throttle::autonomous_pulse(steering_deg),
            steering_deg,
            indicators: Indicators::autonomous(Turn::autonomous(steering_deg)),
        })
    }

    /// Manual path: maps freshly sampled receiver pulses
    ///
    /// A channel that timed out is passed as 0 and maps like any other
    /// width; there is no failsafe.
    pub fn manual_step(&mut self, throttle_us: u16, steering_us: u16) -> Actuation {
        let esc_us = throttle::governed_pulse(throttle_us);
        let steering_deg = steering::manual_angle(steering_us);
        self.steering_deg = steering_deg;

        Actuation {
            esc_us,
            steering_deg,
            indicators: Indicators::manual(ManualState::classify(steering_deg, esc_us)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(text: &[u8]) -> impl FnMut() -> Option<u8> + '_ {
        let mut iter = text.iter().copied();
        move || iter.next()
    }

    fn autonomous_controller() -> Controller {
        let mode_channel = PulseMailbox::new();
        let mut controller = Controller::new();
        mode_channel.publish(1600);
        assert_eq!(
            controller.update_mode(&mode_channel),
            Some(DriveMode::Autonomous)
        );
        controller
    }

    #[test]
    fn test_initial_state() {
        let controller = Controller::new();
        assert_eq!(controller.mode(), DriveMode::Manual);
        assert_eq!(controller.steering_angle(), 90);
    }

    #[test]
    fn test_autonomous_line_steers_left() {
        let mut controller = autonomous_controller();
        controller.receive(bytes(b"30\n")).unwrap();

        let actuation = controller.autonomous_step().unwrap();
        assert_eq!(actuation.steering_deg, 120);
        assert_eq!(actuation.esc_us, 1555);
        assert_eq!(
            actuation.indicators,
            Indicators {
                red: true,
                green: false
            }
        );
    }

    #[test]
    fn test_autonomous_out_of_range_line_is_clamped() {
        let mut controller = autonomous_controller();
        controller.receive(bytes(b"999\n")).unwrap();

        let actuation = controller.autonomous_step().unwrap();
        assert_eq!(actuation.steering_deg, 140);
        assert_eq!(actuation.esc_us, 1553);
        assert_eq!(
            actuation.indicators,
            Indicators {
                red: true,
                green: false
            }
        );
    }

    #[test]
    fn test_autonomous_right_turn() {
        let mut controller = autonomous_controller();
        controller.receive(bytes(b"-40\n")).unwrap();

        let actuation = controller.autonomous_step().unwrap();
        assert_eq!(actuation.steering_deg, 50);
        assert_eq!(actuation.esc_us, 1553);
        assert_eq!(
            actuation.indicators,
            Indicators {
                red: false,
                green: true
            }
        );
    }

    #[test]
    fn test_autonomous_garbage_line_centers() {
        let mut controller = autonomous_controller();
        controller.receive(bytes(b"left\n")).unwrap();

        let actuation = controller.autonomous_step().unwrap();
        assert_eq!(actuation.steering_deg, 90);
        assert_eq!(actuation.esc_us, 1555);
        assert_eq!(actuation.indicators, Indicators::OFF);
    }

    #[test]
    fn test_partial_line_holds_steering() {
        let mut controller = autonomous_controller();
        controller.receive(bytes(b"-20\n")).unwrap();
        controller.autonomous_step().unwrap();

        controller.receive(bytes(b"4")).unwrap();
        assert_eq!(controller.autonomous_step(), None);
        assert_eq!(controller.steering_angle(), 70);

        controller.receive(bytes(b"5\n")).unwrap();
        assert_eq!(controller.autonomous_step().unwrap().steering_deg, 135);
    }

    #[test]
    fn test_one_line_per_iteration() {
        let mut controller = autonomous_controller();
        let mut source = bytes(b"10\n-10\n");

        controller.receive(&mut source).unwrap();
        assert_eq!(controller.autonomous_step().unwrap().steering_deg, 100);

        controller.receive(&mut source).unwrap();
        assert_eq!(controller.autonomous_step().unwrap().steering_deg, 80);

        controller.receive(&mut source).unwrap();
        assert_eq!(controller.autonomous_step(), None);
    }

    #[test]
    fn test_autonomous_repeat_without_new_line_is_idle() {
        let mut controller = autonomous_controller();
        controller.receive(bytes(b"15\n")).unwrap();
        controller.autonomous_step().unwrap();

        controller.receive(bytes(b"")).unwrap();
        assert_eq!(controller.autonomous_step(), None);
        assert_eq!(controller.steering_angle(), 105);
    }

    #[test]
    fn test_overlong_line_reports_and_still_parses() {
        let mut controller = autonomous_controller();
        let mut line = [b'0'; 40];
        line[38] = b'7';
        line[39] = b'\n';

        assert_eq!(
            controller.receive(bytes(&line)),
            Err(CommandError::LineTooLong)
        );
        // only the leading zeros fit
        assert_eq!(controller.autonomous_step().unwrap().steering_deg, 90);
    }

    #[test]
    fn test_manual_forward_straight() {
        let mut controller = Controller::new();
        let actuation = controller.manual_step(1800, 1500);
        assert_eq!(actuation.esc_us, 1560);
        assert_eq!(actuation.steering_deg, 90);
        assert_eq!(actuation.indicators, Indicators::OFF);
    }

    #[test]
    fn test_manual_reverse_lights_both() {
        let mut controller = Controller::new();
        for steering_us in [1000, 1500, 2000] {
            let actuation = controller.manual_step(1200, steering_us);
            assert_eq!(actuation.esc_us, 1440);
            assert_eq!(
                actuation.indicators,
                Indicators {
                    red: true,
                    green: true
                }
            );
        }
    }

    #[test]
    fn test_manual_turn_lights() {
        let mut controller = Controller::new();
        let left = controller.manual_step(1500, 1800);
        assert_eq!(left.steering_deg, 120);
        assert_eq!(
            left.indicators,
            Indicators {
                red: true,
                green: false
            }
        );

        let right = controller.manual_step(1500, 1200);
        assert_eq!(right.steering_deg, 60);
        assert_eq!(
            right.indicators,
            Indicators {
                red: false,
                green: true
            }
        );
        assert_eq!(controller.steering_angle(), 60);
    }

    #[test]
    fn test_manual_signal_loss_maps_to_extremes() {
        let mut controller = Controller::new();
        let actuation = controller.manual_step(0, 0);
        assert_eq!(actuation.esc_us, 1200);
        assert_eq!(actuation.steering_deg, 40);
        assert_eq!(
            actuation.indicators,
            Indicators {
                red: true,
                green: true
            }
        );
    }

    #[test]
    fn test_manual_step_is_idempotent() {
        let mut controller = Controller::new();
        let first = controller.manual_step(1650, 1320);
        let second = controller.manual_step(1650, 1320);
        assert_eq!(first, second);
    }

    #[test]
    fn test_aux_runs_in_any_mode() {
        let aux_channel = PulseMailbox::new();
        let controller = autonomous_controller();

        aux_channel.publish(1900);
        assert_eq!(controller.update_aux(&aux_channel), Some(AuxPosition::Active));
        assert_eq!(controller.update_aux(&aux_channel), None);

        let controller = Controller::new();
        aux_channel.publish(1100);
        assert_eq!(
            controller.update_aux(&aux_channel),
            Some(AuxPosition::Inactive)
        );
    }
}
