//! Terminal frontend for the padcalc engine.
//!
//! Maps keyboard and mouse input to calculator actions, renders the
//! display and a clickable keypad with ratatui, and drives the error
//! auto-clear timer from the event loop.

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod app;
pub mod input;
pub mod keypad;
pub mod ui;

pub use app::App;
pub use input::{InputEvent, InputHandler};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{layout_areas, render, Areas};
