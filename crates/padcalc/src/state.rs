//! Calculator input state machine.
//!
//! Four fields govern how digit entry, operator chaining, equals, clear,
//! and backspace interact. State is mutated exclusively through
//! [`CalculatorState::apply`]; no other writer exists.

use crate::action::Action;
use crate::display::{format_display, format_number};
use crate::error::CalcResult;
use crate::op::{Digit, Operator};

/// Informal machine phase, derived from the field combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No input, no operator
    Idle,
    /// Building a number in the current input
    Entering,
    /// Operator selected, awaiting the second operand
    OperatorPending,
    /// Display holds a freshly computed result
    ResultShown,
}

/// Whether an action changed the state (and the display must refresh)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// State changed; refresh the display
    Updated,
    /// Action was a no-op; nothing to refresh
    Ignored,
}

/// The calculator's complete mutable state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    /// Number being typed, or the last computed result; empty means
    /// "no input yet, display shows 0"
    current_input: String,
    /// Left operand pending an operator
    previous_value: Option<f64>,
    /// Pending operator
    operator: Option<Operator>,
    /// True exactly when `current_input` holds a freshly computed result
    result_displayed: bool,
}

impl CalculatorState {
    /// Creates a state machine with all fields at initial values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw input text (never truncated)
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Returns the captured left operand, if an operation is in progress
    #[must_use]
    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    /// Returns the pending operator, if any
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Returns true when the input holds a freshly computed result
    #[must_use]
    pub fn result_displayed(&self) -> bool {
        self.result_displayed
    }

    /// Derives the informal machine phase from the fields
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.result_displayed {
            Phase::ResultShown
        } else if !self.current_input.is_empty() {
            Phase::Entering
        } else if self.operator.is_some() {
            Phase::OperatorPending
        } else {
            Phase::Idle
        }
    }

    /// Returns the text to present: the input (or "0" when empty),
    /// truncated for display only
    #[must_use]
    pub fn display_text(&self) -> String {
        format_display(&self.current_input)
    }

    /// Applies one action, run to completion.
    ///
    /// Division by zero leaves the state untouched so the caller can show
    /// the error indicator and schedule a reset.
    pub fn apply(&mut self, action: Action) -> CalcResult<Transition> {
        match action {
            Action::Digit(digit) => Ok(self.press_digit(digit)),
            Action::Decimal => Ok(self.press_decimal()),
            Action::Operator(op) => self.press_operator(op),
            Action::Equals => self.press_equals(),
            Action::Clear => {
                self.clear();
                Ok(Transition::Updated)
            }
            Action::Backspace => Ok(self.press_backspace()),
        }
    }

    /// Resets all fields to their initial values
    pub fn clear(&mut self) {
        self.current_input.clear();
        self.previous_value = None;
        self.operator = None;
        self.result_displayed = false;
    }

    fn press_digit(&mut self, digit: Digit) -> Transition {
        self.discard_displayed_result();
        if self.current_input == "0" {
            // Suppress leading zeros: "0" then "5" reads "5", not "05"
            self.current_input.clear();
        }
        self.current_input.push(digit.as_char());
        Transition::Updated
    }

    fn press_decimal(&mut self) -> Transition {
        self.discard_displayed_result();
        if !self.current_input.contains('.') {
            if self.current_input.is_empty() {
                self.current_input.push('0');
            }
            self.current_input.push('.');
        }
        Transition::Updated
    }

    fn press_operator(&mut self, op: Operator) -> CalcResult<Transition> {
        match (self.operator, self.previous_value) {
            (Some(pending), Some(prev)) if !self.current_input.is_empty() => {
                // Operator chaining: evaluate the pending operation
                // left-to-right before accepting the new operator.
                let chained = pending.apply(prev, self.operand())?;
                self.previous_value = Some(chained);
            }
            (Some(_), _) => {
                // Operator re-selected before a second operand was typed;
                // only the stored operator changes.
            }
            (None, _) => {
                if self.current_input.is_empty() {
                    // Idle: no operand to attach the operator to.
                    return Ok(Transition::Ignored);
                }
                self.previous_value = Some(self.operand());
            }
        }
        self.operator = Some(op);
        self.current_input.clear();
        self.result_displayed = false;
        Ok(Transition::Updated)
    }

    fn press_equals(&mut self) -> CalcResult<Transition> {
        let (Some(op), Some(prev)) = (self.operator, self.previous_value) else {
            return Ok(Transition::Ignored);
        };
        if self.current_input.is_empty() {
            return Ok(Transition::Ignored);
        }
        let result = op.apply(prev, self.operand())?;
        self.current_input = format_number(result);
        self.previous_value = None;
        self.operator = None;
        self.result_displayed = true;
        Ok(Transition::Updated)
    }

    fn press_backspace(&mut self) -> Transition {
        if self.result_displayed {
            // A result cannot be partially erased; erasing it wipes everything.
            self.clear();
            Transition::Updated
        } else if self.current_input.is_empty() {
            Transition::Ignored
        } else {
            self.current_input.pop();
            Transition::Updated
        }
    }

    /// Starts a fresh entry when the display still holds a computed result
    fn discard_displayed_result(&mut self) {
        if self.result_displayed {
            self.current_input.clear();
            self.result_displayed = false;
        }
    }

    /// Parses the current input as the right operand.
    ///
    /// The input is built character-by-character under the digit/decimal
    /// rules, so the parse cannot fail; callers guard against empty input.
    fn operand(&self) -> f64 {
        self.current_input.parse().unwrap_or_default()
    }
}
