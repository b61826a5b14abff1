//! Calculator core: a four-function accumulator driven by key presses.
//!
//! This module provides functionality to:
//! - Model the keypad and its operators
//! - Run the accumulator state machine
//! - Parse typed key sequences
//! - Keep a tape of completed calculations
//! - Copy results to the clipboard

mod button;
mod clipboard;
mod format;
mod keys;
mod operator;
mod state;
mod tape;

pub use button::{Button, Digit};
pub use clipboard::{copy_and_wait, copy_to_clipboard};
pub use format::{ERROR_MARKER, format_number, parse_display};
pub use keys::parse_keys;
pub use operator::Operator;
pub use state::{CalculatorState, Evaluation};
pub use tape::{Tape, TapeEntry};
