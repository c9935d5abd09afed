//! Application state: one calculator engine plus the keypad and quit flag.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use padcalc::{Action, Calculator, CalculatorState, ERROR_TEXT};
use ratatui::layout::Rect;

use crate::input::{InputEvent, InputHandler};
use crate::keypad::Keypad;

/// Calculator application state
#[derive(Debug)]
pub struct App {
    /// The calculator engine
    calculator: Calculator,
    /// On-screen keypad, tracks the last pressed button
    keypad: Keypad,
    /// Keyboard mapping
    input: InputHandler,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new app with a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
            keypad: Keypad::new(),
            input: InputHandler::new(),
            should_quit: false,
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// Returns whether the display currently shows the error indicator
    #[must_use]
    pub fn showing_error(&self) -> bool {
        self.calculator.display() == ERROR_TEXT
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the underlying calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.calculator.state()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handles a key event
    pub fn on_key(&mut self, event: KeyEvent, now: Instant) {
        match self.input.handle_key(event) {
            InputEvent::Calc(action) => self.apply(action, now),
            InputEvent::Quit => self.quit(),
            InputEvent::None => {}
        }
    }

    /// Handles a mouse event against the keypad rendered at `keypad_area`
    pub fn on_mouse(&mut self, event: MouseEvent, keypad_area: Rect, now: Instant) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(action) = self.keypad.hit_test(keypad_area, event.column, event.row) {
            self.apply(action, now);
        }
    }

    /// Dispatches an action and highlights its keypad button
    pub fn apply(&mut self, action: Action, now: Instant) {
        self.keypad.highlight_action(action);
        self.calculator.dispatch_at(action, now);
    }

    /// Fires the pending error auto-clear if its deadline has passed.
    /// Returns true when the display changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.calculator.tick(now)
    }

    /// How long the event loop may sleep before the next auto-clear is due
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.calculator.time_until_clear(now)
    }
}
