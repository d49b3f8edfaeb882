//! Serial command reception
//!
//! Receives the autonomy computer's steering commands over UART and forwards
//! the raw bytes to the control loop. Decoding happens in the control loop.

use crate::system::resources::{Irqs, SerialResources};
use crate::system::serial_link;
use defmt::{info, warn};
use embassy_rp::uart::{self, BufferedUartRx};
use embedded_io_async::Read;
use rc_car_control::config::SERIAL_BAUD;

/// Size of the UART receive ring buffer
const RX_BUFFER_SIZE: usize = 64;

/// UART reader task
#[embassy_executor::task]
pub async fn serial_read(r: SerialResources) {
    let mut config = uart::Config::default();
    config.baudrate = SERIAL_BAUD;

    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut rx = BufferedUartRx::new(r.uart, Irqs, r.rx_pin, &mut rx_buffer, config);
    info!("Serial link listening at {} baud", SERIAL_BAUD);

    let mut chunk = [0u8; 16];
    loop {
        match rx.read(&mut chunk).await {
            Ok(0) => {}
            Ok(n) => serial_link::forward(&chunk[..n]).await,
            Err(e) => warn!("serial read failed: {}", e),
        }
    }
}
