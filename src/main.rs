//! RC car firmware entry point
//!
//! Puts every actuator into its neutral state, waits for the ESC to arm,
//! then spawns the receiver capture, serial and control tasks.

#![no_std]
#![no_main]

use crate::system::actuators::Actuators;
use crate::system::resources::{
    ActuatorResources, AssignedResources, AuxChannelResources, ModeChannelResources,
    ReceiverResources, SerialResources,
};
use crate::task::{
    control_loop::control_loop,
    rc_capture::{aux_capture, mode_capture},
    serial_read::serial_read,
};
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_time::{Duration, Timer};
use rc_car_control::config::ARMING_DELAY_MS;
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[unsafe(link_section = ".start_block")]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// System core modules
mod system;
/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups for each task
    let r = split_resources!(p);

    // Neutral outputs first, the ESC arms on a steady neutral pulse
    let actuators = Actuators::new(r.actuators);
    info!("Outputs neutral, waiting {} ms for ESC arming", ARMING_DELAY_MS);
    Timer::after(Duration::from_millis(ARMING_DELAY_MS)).await;

    // Inputs are only listened to once the vehicle is armed
    spawner.spawn(mode_capture(r.mode_channel)).unwrap();
    spawner.spawn(aux_capture(r.aux_channel)).unwrap();
    spawner.spawn(serial_read(r.serial)).unwrap();
    spawner.spawn(control_loop(r.receiver, actuators)).unwrap();
}
