//! Key sequence parsing for typed input.
//!
//! Turns text such as `12 + 3 =` or `5/0=` into button presses. Besides the
//! exact keypad labels, a few ASCII stand-ins are accepted for keys that are
//! awkward to type.

use lazy_static::lazy_static;
use regex::Regex;

use super::button::Button;
use super::operator::Operator;
use crate::error::KeyError;

lazy_static! {
    /// Matches one key: a canonical label or an ASCII stand-in.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"[0-9]|\.|[Cc]|±|~|_|%|\+|-|×|[*xX]|÷|/|="
    ).unwrap();
}

/// Parse a key sequence into buttons, in order.
///
/// Whitespace between keys is ignored. The first character that is not a
/// key is reported with its position (in characters).
pub fn parse_keys(input: &str) -> Result<Vec<Button>, KeyError> {
    let mut buttons = Vec::new();
    let mut last_end = 0;

    for token in KEY_TOKEN.find_iter(input) {
        check_gap(input, last_end, token.start())?;
        let button = token_to_button(token.as_str()).ok_or_else(|| KeyError::Unrecognized {
            key: token.as_str().chars().next().unwrap_or_default(),
            offset: input[..token.start()].chars().count(),
        })?;
        buttons.push(button);
        last_end = token.end();
    }
    check_gap(input, last_end, input.len())?;

    Ok(buttons)
}

/// Ensure the text between two keys is only whitespace.
fn check_gap(input: &str, start: usize, end: usize) -> Result<(), KeyError> {
    match input[start..end].chars().find(|c| !c.is_whitespace()) {
        None => Ok(()),
        Some(key) => {
            let byte = start + input[start..end].find(key).unwrap_or(0);
            Err(KeyError::Unrecognized {
                key,
                offset: input[..byte].chars().count(),
            })
        }
    }
}

fn token_to_button(token: &str) -> Option<Button> {
    match token {
        "c" => Some(Button::Clear),
        "~" | "_" => Some(Button::ToggleSign),
        "*" | "x" | "X" => Some(Button::Operator(Operator::Multiply)),
        "/" => Some(Button::Operator(Operator::Divide)),
        label => Button::from_label(label),
    }
}
