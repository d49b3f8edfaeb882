//! Receiver pulse sampling
//!
//! Measures one HIGH pulse on a receiver channel, the way the control loop
//! reads throttle and steering in manual mode. The whole measurement is
//! bounded by a timeout, so a silent channel costs at most 25 ms and reads 0.

use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, with_timeout};
use rc_car_control::config::SAMPLE_TIMEOUT_US;

/// Upper bound for one pulse measurement
const SAMPLE_TIMEOUT: Duration = Duration::from_micros(SAMPLE_TIMEOUT_US);

/// Measures the next complete HIGH pulse in microseconds, 0 on timeout
///
/// A pulse already in progress is skipped since its start was missed.
pub async fn sample_pulse(input: &mut Input<'static>) -> u16 {
    let measure = async {
        input.wait_for_low().await;
        input.wait_for_high().await;
        let rise = Instant::now();
        input.wait_for_low().await;
        rise.elapsed().as_micros()
    };

    match with_timeout(SAMPLE_TIMEOUT, measure).await {
        Ok(width_us) => u16::try_from(width_us).unwrap_or(u16::MAX),
        Err(_) => 0,
    }
}
