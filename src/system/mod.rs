//! Core system components for vehicle operation
pub mod actuators;
pub mod indicator;
pub mod pulse_channel;
pub mod receiver;
pub mod resources;
pub mod serial_link;
pub mod servo;
