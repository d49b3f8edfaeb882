//! Control error types using thiserror 2.0

use thiserror::Error;

/// Serial command decoding errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    #[error("serial line exceeds buffer capacity, bytes dropped")]
    LineTooLong,
}
