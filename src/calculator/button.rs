//! The keypad vocabulary.
//!
//! Every event the presentation layer can send is one of these buttons.
//! Labels are the exact strings printed on the keys.

use std::fmt;

use super::operator::Operator;

/// A decimal digit, always in `0..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` unless `value` is a single decimal digit.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Self(value)) } else { None }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// A single calculator key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// A digit key, `0` to `9`.
    Digit(Digit),
    /// The decimal point.
    Decimal,
    /// `C`: reset everything.
    Clear,
    /// `±`: negate the display.
    ToggleSign,
    /// `%`: divide the display by 100.
    Percent,
    /// One of `+ - × ÷`.
    Operator(Operator),
    /// `=`: evaluate the pending operator.
    Equals,
}

impl Button {
    /// All 19 keys in keypad order, row by row.
    pub const ALL: [Button; 19] = [
        Button::Clear,
        Button::ToggleSign,
        Button::Percent,
        Button::Operator(Operator::Divide),
        Button::Digit(Digit(7)),
        Button::Digit(Digit(8)),
        Button::Digit(Digit(9)),
        Button::Operator(Operator::Multiply),
        Button::Digit(Digit(4)),
        Button::Digit(Digit(5)),
        Button::Digit(Digit(6)),
        Button::Operator(Operator::Subtract),
        Button::Digit(Digit(1)),
        Button::Digit(Digit(2)),
        Button::Digit(Digit(3)),
        Button::Operator(Operator::Add),
        Button::Digit(Digit(0)),
        Button::Decimal,
        Button::Equals,
    ];

    /// Number of keys in each keypad row.
    pub const ROWS: [usize; 5] = [4, 4, 4, 4, 3];

    /// The digit key for `value`, if it is in `0..=9`.
    pub const fn digit(value: u8) -> Option<Self> {
        match Digit::new(value) {
            Some(d) => Some(Self::Digit(d)),
            None => None,
        }
    }

    /// The label printed on this key.
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Digit(d) => DIGITS[usize::from(d.value())],
            Self::Decimal => ".",
            Self::Clear => "C",
            Self::ToggleSign => "±",
            Self::Percent => "%",
            Self::Operator(op) => op.label(),
            Self::Equals => "=",
        }
    }

    /// Look up a key by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "." => Some(Self::Decimal),
            "C" => Some(Self::Clear),
            "±" => Some(Self::ToggleSign),
            "%" => Some(Self::Percent),
            "=" => Some(Self::Equals),
            _ => {
                if let [b] = label.as_bytes()
                    && b.is_ascii_digit()
                {
                    return Self::digit(b - b'0');
                }
                Operator::from_label(label).map(Self::Operator)
            }
        }
    }

    /// Render the keypad as text, one row per line.
    pub fn keypad() -> String {
        let mut lines = Vec::with_capacity(Self::ROWS.len());
        let mut keys = Self::ALL.iter();
        for width in Self::ROWS {
            let row: Vec<String> = keys
                .by_ref()
                .take(width)
                .map(|b| format!("[{:^3}]", b.label()))
                .collect();
            lines.push(row.join(" "));
        }
        lines.join("\n")
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
