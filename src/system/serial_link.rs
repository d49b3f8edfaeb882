//! Serial Link Module
//!
//! Byte pipe between the UART reader task and the control loop. The reader
//! pushes everything it receives; the control loop pulls single bytes without
//! waiting, so a line that is only partly received never stalls an iteration.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::pipe::Pipe;

/// Bytes received but not yet decoded
static SERIAL_PIPE: Pipe<CriticalSectionRawMutex, 64> = Pipe::new();

/// Queues received bytes, waiting while the pipe is full
pub async fn forward(bytes: &[u8]) {
    SERIAL_PIPE.write_all(bytes).await;
}

/// Takes the next received byte, if one is available
pub fn try_read_byte() -> Option<u8> {
    let mut byte = [0u8; 1];
    match SERIAL_PIPE.try_read(&mut byte) {
        Ok(1) => Some(byte[0]),
        _ => None,
    }
}
