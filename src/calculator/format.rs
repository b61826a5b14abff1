//! Conversion between display text and numbers.
//!
//! The display always holds either a number in its default text form or
//! the error marker. Integral values keep a trailing `.0` so a result is
//! visibly distinct from a number still being typed.

/// Shown in place of a result when dividing by zero.
pub const ERROR_MARKER: &str = "Error";

/// Parse the display as a number.
///
/// Returns `None` for anything that is not a number, including the error
/// marker and a lone decimal point.
pub fn parse_display(display: &str) -> Option<f64> {
    display.parse::<f64>().ok()
}

/// Format a number for the display.
///
/// Uses the shortest text that parses back to the same value, always with a
/// fractional part or exponent (`10.0`, `0.25`, `1e16`).
pub fn format_number(value: f64) -> String {
    format!("{:?}", value)
}
