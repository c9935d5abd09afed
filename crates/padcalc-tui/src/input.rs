//! Keyboard input handling.
//!
//! Maps raw crossterm key events to abstract calculator actions; anything
//! outside the calculator's alphabet is rejected here, never inside the
//! core.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use padcalc::Action;

/// What a key event means to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A calculator action
    Calc(Action),
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Input handler that maps key events to input events
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an input event
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> InputEvent {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => InputEvent::Quit,
                _ => InputEvent::None,
            };
        }

        match code {
            KeyCode::Char('q') => InputEvent::Quit,
            KeyCode::Char(c) => Action::from_char(c).map_or(InputEvent::None, InputEvent::Calc),
            KeyCode::Enter => InputEvent::Calc(Action::Equals),
            KeyCode::Backspace => InputEvent::Calc(Action::Backspace),
            KeyCode::Delete | KeyCode::Esc => InputEvent::Calc(Action::Clear),
            _ => InputEvent::None,
        }
    }
}
