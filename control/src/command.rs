//! Serial command decoding
//!
//! The autonomy computer sends one steering offset per line as ASCII decimal
//! text terminated by `\n`. Bytes are collected into a fixed-capacity line
//! buffer; once the terminator arrives the line is parsed with a best-effort
//! leading-integer policy and the buffer is reset.
//!
//! # Parsing policy
//! - Leading ASCII whitespace is skipped
//! - One optional `+` or `-` sign
//! - Decimal digits up to the first non-digit
//! - No digits at all yields 0
//! - The value saturates at the `i32` bounds

use crate::config::{LINE_CAPACITY, LINE_TERMINATOR};
use crate::error::CommandError;
use heapless::Vec;

/// Parses the leading signed decimal integer of `line`
pub fn parse_leading_int(line: &[u8]) -> i32 {
    let mut rest = line;
    while let [first, tail @ ..] = rest {
        if !first.is_ascii_whitespace() {
            break;
        }
        rest = tail;
    }

    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };

    let mut value: i32 = 0;
    for digit in rest.iter().take_while(|b| b.is_ascii_digit()) {
        let digit = i32::from(digit - b'0');
        // accumulate towards the sign so i32::MIN stays reachable
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

/// Characters of the serial line currently being received
#[derive(Debug, Default)]
pub struct LineBuffer {
    bytes: Vec<u8, LINE_CAPACITY>,
    complete: bool,
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            complete: false,
        }
    }

    /// Appends one received byte
    ///
    /// The terminator marks the line complete instead of being stored. A byte
    /// that does not fit is dropped and reported.
    pub fn push(&mut self, byte: u8) -> Result<(), CommandError> {
        if byte == LINE_TERMINATOR {
            self.complete = true;
            return Ok(());
        }
        self.bytes.push(byte).map_err(|_| CommandError::LineTooLong)
    }

    /// Whether a terminator has been received since the last parsed line
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Parses and clears a completed line
    ///
    /// Returns `None` while the line is still incomplete.
    pub fn take_command(&mut self) -> Option<i32> {
        if !self.complete {
            return None;
        }
        let value = parse_leading_int(&self.bytes);
        self.bytes.clear();
        self.complete = false;
        Some(value)
    }
}
