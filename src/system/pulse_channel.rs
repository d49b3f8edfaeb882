//! Edge-captured receiver channels
//!
//! One single-slot mailbox per interrupt-driven receiver channel. The capture
//! tasks publish completed pulse widths, the control loop consumes them.

use rc_car_control::PulseMailbox;

/// Latest mode channel pulse width
pub static MODE_CHANNEL: PulseMailbox = PulseMailbox::new();

/// Latest auxiliary channel pulse width
pub static AUX_CHANNEL: PulseMailbox = PulseMailbox::new();
