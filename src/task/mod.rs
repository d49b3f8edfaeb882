pub mod control_loop;
pub mod rc_capture;
pub mod serial_read;
