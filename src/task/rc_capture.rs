//! RC channel pulse capture
//!
//! Times the HIGH phase of the mode and auxiliary receiver channels on every
//! edge and publishes each completed pulse width to the channel's mailbox.

use crate::system::pulse_channel::{AUX_CHANNEL, MODE_CHANNEL};
use crate::system::resources::{AuxChannelResources, ModeChannelResources};
use embassy_rp::gpio::{Input, Pull};
use embassy_time::Instant;
use rc_car_control::PulseMailbox;
use rc_car_control::capture::{Edge, PulseCapture};

/// Mode channel capture
#[embassy_executor::task]
pub async fn mode_capture(r: ModeChannelResources) {
    let mut input = Input::new(r.pin, Pull::Up);
    capture_pulses(&mut input, &MODE_CHANNEL).await;
}

/// Auxiliary channel capture
#[embassy_executor::task]
pub async fn aux_capture(r: AuxChannelResources) {
    let mut input = Input::new(r.pin, Pull::Up);
    capture_pulses(&mut input, &AUX_CHANNEL).await;
}

/// Feeds every edge of `input` to a capture and publishes completed pulses
async fn capture_pulses(input: &mut Input<'static>, channel: &PulseMailbox) -> ! {
    let mut capture = PulseCapture::new();
    loop {
        input.wait_for_any_edge().await;
        let now_us = Instant::now().as_micros();

        let edge = if input.is_high() {
            Edge::Rising
        } else {
            Edge::Falling
        };

        if let Some(width_us) = capture.on_edge(edge, now_us) {
            channel.publish(width_us);
        }
    }
}
