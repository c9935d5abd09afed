//! Event-driven calculator engine.
//!
//! Wraps the state machine with the render callback and the auto-clearing
//! error display. Exactly one action is processed at a time, run to
//! completion; the only time-based element is the one-shot auto-clear
//! deadline, modeled as an explicit [`Instant`] that the surrounding event
//! loop polls via [`Calculator::tick`].

use std::fmt;
use std::time::{Duration, Instant};

use crate::action::Action;
use crate::display::EMPTY_DISPLAY;
use crate::error::CalcError;
use crate::state::{CalculatorState, Transition};

/// Text shown while the error indicator is up
pub const ERROR_TEXT: &str = "Error";

/// Delay before an error display clears itself
pub const AUTO_CLEAR_DELAY: Duration = Duration::from_millis(1200);

/// Outbound display callback, invoked after every state-changing action
/// (or error) with the exact text to present
pub trait Render {
    /// Presents the given text to the user
    fn render(&mut self, text: &str);
}

impl<F: FnMut(&str)> Render for F {
    fn render(&mut self, text: &str) {
        self(text);
    }
}

/// Renderer that discards updates; pull-model frontends read
/// [`Calculator::display`] each frame instead
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRender;

impl Render for NullRender {
    fn render(&mut self, _text: &str) {}
}

/// The calculator engine: state machine, render callback, and the
/// cancelable auto-clear timer
pub struct Calculator<R: Render = NullRender> {
    state: CalculatorState,
    renderer: R,
    display: String,
    clear_at: Option<Instant>,
}

impl Default for Calculator<NullRender> {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator<NullRender> {
    /// Creates an engine without a render callback
    #[must_use]
    pub fn new() -> Self {
        Self::with_renderer(NullRender)
    }
}

impl<R: Render> Calculator<R> {
    /// Creates an engine with the given render callback
    #[must_use]
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            state: CalculatorState::new(),
            renderer,
            display: EMPTY_DISPLAY.to_string(),
            clear_at: None,
        }
    }

    /// Returns the text currently presented on the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the underlying state machine
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns true while an error auto-clear is scheduled
    #[must_use]
    pub fn clear_pending(&self) -> bool {
        self.clear_at.is_some()
    }

    /// Time remaining until the scheduled auto-clear fires, for use as an
    /// event-loop poll timeout
    #[must_use]
    pub fn time_until_clear(&self, now: Instant) -> Option<Duration> {
        self.clear_at
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Processes one action against the current time
    pub fn dispatch(&mut self, action: Action) {
        self.dispatch_at(action, Instant::now());
    }

    /// Processes one action, run to completion.
    ///
    /// Any action supersedes a scheduled error reset before being applied,
    /// so at most one auto-clear deadline ever exists and a stale reset
    /// can never fire onto a newer computation.
    pub fn dispatch_at(&mut self, action: Action, now: Instant) {
        tracing::debug!(?action, "dispatch");
        self.clear_at = None;
        match self.state.apply(action) {
            Ok(Transition::Updated) => self.refresh(),
            Ok(Transition::Ignored) => {
                tracing::trace!(?action, "no-op");
            }
            Err(CalcError::DivisionByZero) => {
                tracing::warn!(?action, "division by zero; auto-clear scheduled");
                self.display = ERROR_TEXT.to_string();
                self.clear_at = Some(now + AUTO_CLEAR_DELAY);
                self.renderer.render(&self.display);
            }
        }
    }

    /// Fires the scheduled auto-clear once its deadline has passed.
    ///
    /// Returns true if the clear fired. Idempotent when nothing is
    /// pending.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                tracing::debug!("error display auto-clear fired");
                self.clear_at = None;
                self.state.clear();
                self.refresh();
                true
            }
            _ => false,
        }
    }

    fn refresh(&mut self) {
        self.display = self.state.display_text();
        self.renderer.render(&self.display);
    }
}

impl<R: Render> fmt::Debug for Calculator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("state", &self.state)
            .field("display", &self.display)
            .field("clear_at", &self.clear_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::{Digit, Operator};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn digit(d: u8) -> Action {
        Action::Digit(Digit::new(d).unwrap())
    }

    fn op(o: Operator) -> Action {
        Action::Operator(o)
    }

    fn dispatch_all(calc: &mut Calculator<impl Render>, actions: &[Action]) {
        for action in actions {
            calc.dispatch(*action);
        }
    }

    /// Engine wired to a shared render log
    fn logging_calculator() -> (Calculator<impl Render>, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let calc = Calculator::with_renderer(move |text: &str| {
            sink.borrow_mut().push(text.to_string());
        });
        (calc, log)
    }

    // ===== Construction tests =====

    #[test]
    fn test_new_shows_zero() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert!(!calc.clear_pending());
    }

    #[test]
    fn test_default_equals_new() {
        let calc = Calculator::default();
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_debug_output() {
        let calc = Calculator::new();
        let debug = format!("{calc:?}");
        assert!(debug.contains("Calculator"));
    }

    // ===== Dispatch and render tests =====

    #[test]
    fn test_digit_updates_display_and_renders() {
        let (mut calc, log) = logging_calculator();
        dispatch_all(&mut calc, &[digit(4), digit(2)]);
        assert_eq!(calc.display(), "42");
        assert_eq!(*log.borrow(), vec!["4".to_string(), "42".to_string()]);
    }

    #[test]
    fn test_round_trip_addition() {
        let mut calc = Calculator::new();
        dispatch_all(
            &mut calc,
            &[digit(5), op(Operator::Add), digit(3), Action::Equals],
        );
        assert_eq!(calc.display(), "8");
    }

    #[test]
    fn test_chained_operators_display() {
        let mut calc = Calculator::new();
        dispatch_all(
            &mut calc,
            &[
                digit(2),
                op(Operator::Add),
                digit(3),
                op(Operator::Multiply),
                digit(4),
                Action::Equals,
            ],
        );
        assert_eq!(calc.display(), "20");
    }

    #[test]
    fn test_noop_action_does_not_render() {
        let (mut calc, log) = logging_calculator();
        calc.dispatch(Action::Equals);
        calc.dispatch(Action::Backspace);
        assert!(log.borrow().is_empty());
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_operator_clears_visible_input() {
        let mut calc = Calculator::new();
        dispatch_all(&mut calc, &[digit(5), op(Operator::Add)]);
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_display_truncation_preserves_input() {
        let mut calc = Calculator::new();
        for _ in 0..15 {
            calc.dispatch(digit(7));
        }
        assert_eq!(calc.display(), "777777777777\u{2026}");
        assert_eq!(calc.state().current_input().len(), 15);
    }

    // ===== Error and auto-clear tests =====

    #[test]
    fn test_division_by_zero_shows_error() {
        let (mut calc, log) = logging_calculator();
        let now = Instant::now();
        for action in [digit(5), op(Operator::Divide), digit(0)] {
            calc.dispatch_at(action, now);
        }
        calc.dispatch_at(Action::Equals, now);
        assert_eq!(calc.display(), "Error");
        assert!(calc.clear_pending());
        assert_eq!(log.borrow().last().map(String::as_str), Some("Error"));
    }

    #[test]
    fn test_error_state_retained_until_clear() {
        let mut calc = Calculator::new();
        let now = Instant::now();
        for action in [digit(5), op(Operator::Divide), digit(0), Action::Equals] {
            calc.dispatch_at(action, now);
        }
        // The failed Equals leaves the operands in place.
        assert_eq!(calc.state().previous_value(), Some(5.0));
        assert_eq!(calc.state().operator(), Some(Operator::Divide));
        assert_eq!(calc.state().current_input(), "0");
    }

    #[test]
    fn test_tick_before_deadline_does_nothing() {
        let mut calc = Calculator::new();
        let now = Instant::now();
        for action in [digit(5), op(Operator::Divide), digit(0), Action::Equals] {
            calc.dispatch_at(action, now);
        }
        assert!(!calc.tick(now + Duration::from_millis(1199)));
        assert_eq!(calc.display(), "Error");
        assert!(calc.clear_pending());
    }

    #[test]
    fn test_tick_after_deadline_clears() {
        let (mut calc, log) = logging_calculator();
        let now = Instant::now();
        for action in [digit(5), op(Operator::Divide), digit(0), Action::Equals] {
            calc.dispatch_at(action, now);
        }
        assert!(calc.tick(now + AUTO_CLEAR_DELAY));
        assert_eq!(calc.display(), "0");
        assert!(!calc.clear_pending());
        assert_eq!(calc.state(), &crate::state::CalculatorState::new());
        assert_eq!(log.borrow().last().map(String::as_str), Some("0"));
    }

    #[test]
    fn test_tick_is_idempotent_after_firing() {
        let mut calc = Calculator::new();
        let now = Instant::now();
        for action in [digit(5), op(Operator::Divide), digit(0), Action::Equals] {
            calc.dispatch_at(action, now);
        }
        assert!(calc.tick(now + AUTO_CLEAR_DELAY));
        assert!(!calc.tick(now + AUTO_CLEAR_DELAY * 2));
    }

    #[test]
    fn test_tick_without_pending_clear_does_nothing() {
        let mut calc = Calculator::new();
        calc.dispatch(digit(5));
        assert!(!calc.tick(Instant::now() + Duration::from_secs(10)));
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_action_cancels_pending_clear() {
        let mut calc = Calculator::new();
        let now = Instant::now();
        for action in [digit(5), op(Operator::Divide), digit(0), Action::Equals] {
            calc.dispatch_at(action, now);
        }
        calc.dispatch_at(Action::Clear, now + Duration::from_millis(100));
        assert!(!calc.clear_pending());
        assert_eq!(calc.display(), "0");
        // The superseded deadline must not fire later.
        assert!(!calc.tick(now + AUTO_CLEAR_DELAY * 2));
    }

    #[test]
    fn test_repeated_errors_keep_single_deadline() {
        let mut calc = Calculator::new();
        let first = Instant::now();
        for action in [digit(5), op(Operator::Divide), digit(0), Action::Equals] {
            calc.dispatch_at(action, first);
        }
        let second = first + Duration::from_millis(600);
        calc.dispatch_at(Action::Equals, second);
        assert!(calc.clear_pending());
        // Rescheduled from the second error, not the first.
        assert!(!calc.tick(first + AUTO_CLEAR_DELAY));
        assert!(calc.tick(second + AUTO_CLEAR_DELAY));
    }

    #[test]
    fn test_time_until_clear() {
        let mut calc = Calculator::new();
        let now = Instant::now();
        assert_eq!(calc.time_until_clear(now), None);
        for action in [digit(5), op(Operator::Divide), digit(0), Action::Equals] {
            calc.dispatch_at(action, now);
        }
        assert_eq!(calc.time_until_clear(now), Some(AUTO_CLEAR_DELAY));
        assert_eq!(
            calc.time_until_clear(now + Duration::from_millis(200)),
            Some(Duration::from_millis(1000))
        );
        assert_eq!(
            calc.time_until_clear(now + Duration::from_secs(5)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_input_resumes_after_error_cancel() {
        let mut calc = Calculator::new();
        let now = Instant::now();
        for action in [digit(5), op(Operator::Divide), digit(0), Action::Equals] {
            calc.dispatch_at(action, now);
        }
        // A digit during the error window cancels the reset and keeps
        // typing; the retained "0" operand is replaced, not extended.
        calc.dispatch_at(digit(2), now + Duration::from_millis(300));
        assert!(!calc.clear_pending());
        assert_eq!(calc.display(), "2");
        assert_eq!(calc.state().current_input(), "2");
    }
}
