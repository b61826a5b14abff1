//! The tape: a bounded record of completed calculations.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use super::format::format_number;
use super::state::Evaluation;

/// One completed calculation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TapeEntry {
    /// The calculation as typed, e.g. `7.0 + 3.0`.
    pub expression: String,
    /// The result as displayed (a number or the error marker).
    pub display_result: String,
    /// Whether this is an error result.
    pub is_error: bool,
}

impl TapeEntry {
    /// Create a tape entry from an evaluation.
    pub fn from_evaluation(eval: &Evaluation) -> Self {
        Self {
            expression: format!(
                "{} {} {}",
                format_number(eval.lhs),
                eval.operator.label(),
                format_number(eval.rhs)
            ),
            display_result: eval.display.clone(),
            is_error: eval.is_error(),
        }
    }

    /// Get the text to copy to clipboard.
    /// Errors copy the marker itself so the user still gets what they saw.
    pub fn text_for_clipboard(&self) -> &str {
        &self.display_result
    }
}

impl fmt::Display for TapeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.display_result)
    }
}

/// Most recent calculations, oldest first.
#[derive(Clone, Debug)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    capacity: usize,
}

impl Tape {
    /// Create an empty tape holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, dropping the oldest one when full.
    pub fn record(&mut self, eval: &Evaluation) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(TapeEntry::from_evaluation(eval));
    }

    pub fn entries(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
