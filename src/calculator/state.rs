//! The accumulator state machine.
//!
//! One display string, one stored operand and at most one pending operator.
//! Every key press mutates the state in place; nothing here can fail; bad
//! input degrades to a display value.

use serde::Serialize;

use super::button::{Button, Digit};
use super::format::{ERROR_MARKER, format_number, parse_display};
use super::operator::Operator;

/// A completed `=` press.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// The operand captured when the operator was pressed.
    pub lhs: f64,
    /// The operator that was pending.
    pub operator: Operator,
    /// The operand read from the display at `=`.
    pub rhs: f64,
    /// The display after evaluation (a number or the error marker).
    pub display: String,
}

impl Evaluation {
    /// Whether the evaluation produced the error marker.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }
}

/// Calculator state owned by the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorState {
    display: String,
    first_operand: f64,
    pending_operator: Option<Operator>,
    is_entering_number: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            first_operand: 0.0,
            pending_operator: None,
            is_entering_number: false,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text currently shown.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn first_operand(&self) -> f64 {
        self.first_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn is_entering_number(&self) -> bool {
        self.is_entering_number
    }

    /// Press a key by its label.
    ///
    /// Labels outside the keypad vocabulary are ignored.
    pub fn press_label(&mut self, label: &str) -> Option<Evaluation> {
        match Button::from_label(label) {
            Some(button) => self.press(button),
            None => {
                tracing::trace!(label, "ignoring unknown button label");
                None
            }
        }
    }

    /// Press a key.
    ///
    /// Returns the evaluation when `=` computed a result.
    pub fn press(&mut self, button: Button) -> Option<Evaluation> {
        match button {
            Button::Digit(digit) => self.enter_digit(digit),
            Button::Decimal => self.enter_decimal(),
            Button::Clear => self.clear(),
            Button::ToggleSign => self.map_display(|value| -value),
            Button::Percent => self.map_display(|value| value / 100.0),
            Button::Operator(op) => self.set_operator(op),
            Button::Equals => return self.evaluate(),
        }
        None
    }

    fn enter_digit(&mut self, digit: Digit) {
        let label = Button::Digit(digit).label();
        if self.is_entering_number {
            self.display.push_str(label);
        } else {
            self.display = label.to_string();
            self.is_entering_number = true;
        }
    }

    fn enter_decimal(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
            self.is_entering_number = true;
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn map_display(&mut self, f: impl FnOnce(f64) -> f64) {
        match parse_display(&self.display) {
            Some(value) => self.display = format_number(f(value)),
            None => tracing::trace!(display = %self.display, "display is not a number"),
        }
    }

    fn set_operator(&mut self, op: Operator) {
        self.first_operand = parse_display(&self.display).unwrap_or(0.0);
        self.is_entering_number = false;
        self.pending_operator = Some(op);
    }

    fn evaluate(&mut self) -> Option<Evaluation> {
        let operator = self.pending_operator.take()?;
        let lhs = self.first_operand;
        let rhs = parse_display(&self.display).unwrap_or(0.0);

        self.display = match operator.apply(lhs, rhs) {
            Some(result) => format_number(result),
            None => ERROR_MARKER.to_string(),
        };
        self.is_entering_number = false;

        Some(Evaluation {
            lhs,
            operator,
            rhs,
            display: self.display.clone(),
        })
    }
}
