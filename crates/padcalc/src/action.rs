//! Abstract calculator actions.
//!
//! Adapters (keypad buttons, keyboard handlers) translate raw input events
//! into these actions; the state machine consumes nothing else.

use serde::{Deserialize, Serialize};

use crate::op::{Digit, Operator};

/// The abstract actions the calculator consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Append a decimal digit to the current input
    Digit(Digit),
    /// Append the decimal separator
    Decimal,
    /// Select an operator, chaining any pending operation first
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset all state
    Clear,
    /// Remove the last input character (or clear a displayed result)
    Backspace,
}

impl Action {
    /// Maps a raw input character to an action, rejecting anything that is
    /// not part of the calculator's alphabet.
    ///
    /// `,` is accepted as a decimal separator for keyboards that use it.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if let Some(digit) = Digit::from_char(ch) {
            return Some(Self::Digit(digit));
        }
        if let Some(op) = Operator::from_symbol(ch) {
            return Some(Self::Operator(op));
        }
        match ch {
            '.' | ',' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }
}
