//! A four-function button calculator.
//!
//! The [`calculator`] module holds the accumulator state machine and its
//! keypad vocabulary; [`session`] is a terminal front end that feeds it.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;

pub use calculator::{Button, CalculatorState, Operator};
pub use config::Config;
pub use session::Session;
