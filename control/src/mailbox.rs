//! Single-slot pulse width mailbox
//!
//! Shared between an edge capture producer and the control loop. The producer
//! only ever publishes, the control loop only ever consumes. Consuming takes
//! the value and clears the "updated" flag in one step, so a measurement
//! published between a flag check and the read can never be lost or torn.
//!
//! ```rust
//! use rc_car_control::PulseMailbox;
//!
//! static MODE_CHANNEL: PulseMailbox = PulseMailbox::new();
//!
//! // producer side
//! MODE_CHANNEL.publish(1620);
//!
//! // control loop side
//! if let Some(width_us) = MODE_CHANNEL.consume() {
//!     // act on width_us
//! }
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Latest completed pulse width of one receiver channel, plus its "updated" flag
pub struct PulseMailbox {
    latest: Signal<CriticalSectionRawMutex, u16>,
}

impl Default for PulseMailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseMailbox {
    pub const fn new() -> Self {
        Self {
            latest: Signal::new(),
        }
    }

    /// Stores a completed measurement, replacing any unconsumed one
    pub fn publish(&self, width_us: u16) {
        self.latest.signal(width_us);
    }

    /// Takes the latest measurement if one arrived since the last call
    pub fn consume(&self) -> Option<u16> {
        self.latest.try_take()
    }

    /// Whether a measurement is waiting to be consumed
    pub fn is_updated(&self) -> bool {
        self.latest.signaled()
    }
}
