#![cfg_attr(not(test), no_std)]

//! rc-car control logic
//!
//! Everything the firmware decides per control loop iteration lives here,
//! free of any hardware access: pulse capture bookkeeping, mode arbitration,
//! serial command decoding, throttle and steering mapping, state
//! classification and indicator selection.
//!
//! The firmware owns the peripherals and feeds measurements in; this crate
//! hands actuator commands back.

pub mod auxiliary;
pub mod capture;
pub mod classify;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod indicator;
pub mod mailbox;
pub mod mode;
pub mod servo;
pub mod steering;
pub mod throttle;

// Re-export commonly used types
pub use controller::{Actuation, Controller};
pub use error::CommandError;
pub use mailbox::PulseMailbox;
pub use mode::DriveMode;
