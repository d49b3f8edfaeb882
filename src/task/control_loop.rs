//! Control Loop Module
//!
//! The vehicle's main loop. Each iteration:
//! 1. consumes a fresh mode channel pulse and switches mode if needed
//! 2. consumes a fresh aux channel pulse and moves the aux servo
//! 3. runs the active control path
//!    - autonomous: decode serial bytes, steer on each completed line
//!    - manual: sample throttle and steering from the receiver
//! 4. writes ESC, steering and indicator outputs
//!
//! In autonomous mode the outputs are only written when a serial line
//! completed; otherwise they hold their last command.

use crate::system::actuators::Actuators;
use crate::system::pulse_channel::{AUX_CHANNEL, MODE_CHANNEL};
use crate::system::receiver::sample_pulse;
use crate::system::resources::ReceiverResources;
use crate::system::serial_link;
use defmt::{debug, info, warn};
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Timer};
use rc_car_control::config::CONTROL_INTERVAL_MS;
use rc_car_control::{Controller, DriveMode};

/// Pause between iterations, lets the capture and serial tasks run
const CONTROL_INTERVAL: Duration = Duration::from_millis(CONTROL_INTERVAL_MS);

/// Main control task
#[embassy_executor::task]
pub async fn control_loop(r: ReceiverResources, mut actuators: Actuators) {
    let mut throttle_in = Input::new(r.throttle_pin, Pull::None);
    let mut steering_in = Input::new(r.steering_pin, Pull::None);

    let mut controller = Controller::new();
    let mut aux_position = None;
    info!("Control loop started in {} mode", controller.mode());

    loop {
        if let Some(mode) = controller.update_mode(&MODE_CHANNEL) {
            info!("Drive mode changed to {}", mode);
        }

        if let Some(position) = controller.update_aux(&AUX_CHANNEL) {
            if aux_position != Some(position) {
                info!("Aux actuator {}", position);
                aux_position = Some(position);
            }
            actuators.set_aux(position);
        }

        match controller.mode() {
            DriveMode::Autonomous => {
                if let Err(e) = controller.receive(serial_link::try_read_byte) {
                    warn!("{}", e);
                }
                if let Some(actuation) = controller.autonomous_step() {
                    debug!("autonomous {}", actuation);
                    actuators.apply(actuation);
                }
            }
            DriveMode::Manual => {
                let throttle_us = sample_pulse(&mut throttle_in).await;
                let steering_us = sample_pulse(&mut steering_in).await;
                let actuation = controller.manual_step(throttle_us, steering_us);
                debug!(
                    "manual throttle {}us steering {}us -> {}",
                    throttle_us, steering_us, actuation
                );
                actuators.apply(actuation);
            }
        }

        Timer::after(CONTROL_INTERVAL).await;
    }
}
