//! Button-driven arithmetic calculator core.
//!
//! The crate centers on one state machine: digit entry, operator chaining
//! (left-to-right, no precedence), equals, clear, and backspace, with a
//! 12-character display rule and an error indicator that clears itself
//! after 1.2 seconds. Adapters translate raw button or key events into
//! [`Action`]s; the engine renders display text through an outbound
//! callback after every state-changing action.
//!
//! # Example
//!
//! ```rust
//! use padcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.dispatch(Action::Digit(Digit::new(5).unwrap()));
//! calc.dispatch(Action::Operator(Operator::Add));
//! calc.dispatch(Action::Digit(Digit::new(3).unwrap()));
//! calc.dispatch(Action::Equals);
//! assert_eq!(calc.display(), "8");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod action;
pub mod display;
pub mod engine;
pub mod error;
pub mod op;
pub mod state;

pub use action::Action;
pub use display::{format_display, format_number, MAX_DISPLAY_LEN};
pub use engine::{Calculator, NullRender, Render, AUTO_CLEAR_DELAY, ERROR_TEXT};
pub use error::{CalcError, CalcResult};
pub use op::{Digit, Operator};
pub use state::{CalculatorState, Phase, Transition};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::display::{format_display, format_number, MAX_DISPLAY_LEN};
    pub use crate::engine::{Calculator, NullRender, Render, AUTO_CLEAR_DELAY, ERROR_TEXT};
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::op::{Digit, Operator};
    pub use crate::state::{CalculatorState, Phase, Transition};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        calc.dispatch(Action::Digit(Digit::new(2).unwrap()));
        calc.dispatch(Action::Operator(Operator::Multiply));
        calc.dispatch(Action::Digit(Digit::new(3).unwrap()));
        calc.dispatch(Action::Equals);
        assert_eq!(calc.display(), "6");
    }

    #[test]
    fn test_state_machine_direct() {
        let mut state = CalculatorState::new();
        state.apply(Action::Digit(Digit::new(9).unwrap())).unwrap();
        assert_eq!(state.phase(), Phase::Entering);
        assert_eq!(state.display_text(), "9");
    }

    #[test]
    fn test_error_propagation() {
        let mut state = CalculatorState::new();
        for action in [
            Action::Digit(Digit::new(1).unwrap()),
            Action::Operator(Operator::Divide),
            Action::Digit(Digit::new(0).unwrap()),
        ] {
            state.apply(action).unwrap();
        }
        assert_eq!(state.apply(Action::Equals), Err(CalcError::DivisionByZero));
    }
}
