//! Button keypad for the calculator.
//!
//! A 5x4 grid mirroring the original button panel, clickable with the
//! mouse and highlighted when the corresponding key is pressed.

use padcalc::{Action, Digit, Operator};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The character shown on the button
    pub label: char,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
    /// The action this button dispatches
    pub action: Action,
}

impl KeypadButton {
    fn new(label: char, action: Action) -> Self {
        Self {
            label,
            pressed: false,
            action,
        }
    }

    /// Creates a digit button
    #[must_use]
    pub fn digit(digit: Digit) -> Self {
        Self::new(digit.as_char(), Action::Digit(digit))
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: Operator) -> Self {
        Self::new(op.symbol(), Action::Operator(op))
    }

    /// Creates the decimal point button
    #[must_use]
    pub fn decimal() -> Self {
        Self::new('.', Action::Decimal)
    }

    /// Creates the equals button
    #[must_use]
    pub fn equals() -> Self {
        Self::new('=', Action::Equals)
    }

    /// Creates the clear button
    #[must_use]
    pub fn clear() -> Self {
        Self::new('C', Action::Clear)
    }

    /// Creates the backspace button
    #[must_use]
    pub fn backspace() -> Self {
        Self::new('\u{2190}', Action::Backspace)
    }
}

/// The keypad layout - a 5x4 grid with two unused cells
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ / ]
/// [ 4 ] [ 5 ] [ 6 ] [ * ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ = ] [ + ]
/// [ C ] [ <-]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Grid cells in row-major order; `None` is an empty cell
    cells: Vec<Option<KeypadButton>>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

fn digit_button(d: u8) -> Option<KeypadButton> {
    Digit::new(d).map(KeypadButton::digit)
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let cells = vec![
            // Row 1: 7 8 9 /
            digit_button(7),
            digit_button(8),
            digit_button(9),
            Some(KeypadButton::operator(Operator::Divide)),
            // Row 2: 4 5 6 *
            digit_button(4),
            digit_button(5),
            digit_button(6),
            Some(KeypadButton::operator(Operator::Multiply)),
            // Row 3: 1 2 3 -
            digit_button(1),
            digit_button(2),
            digit_button(3),
            Some(KeypadButton::operator(Operator::Subtract)),
            // Row 4: 0 . = +
            digit_button(0),
            Some(KeypadButton::decimal()),
            Some(KeypadButton::equals()),
            Some(KeypadButton::operator(Operator::Add)),
            // Row 5: C <-
            Some(KeypadButton::clear()),
            Some(KeypadButton::backspace()),
            None,
            None,
        ];

        Self {
            cells,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons (empty cells excluded)
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by cell index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.cells.get(index).and_then(Option::as_ref)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.get_button(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the cell index of the button dispatching the given action
    #[must_use]
    pub fn find_button(&self, action: Action) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.map(|b| b.action) == Some(action))
    }

    /// Finds the cell index of a button by its label character
    #[must_use]
    pub fn find_button_by_label(&self, label: char) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.map(|b| b.label) == Some(label))
    }

    /// Sets a button as pressed by cell index
    pub fn press_button(&mut self, index: usize) {
        if let Some(Some(btn)) = self.cells.get_mut(index) {
            btn.pressed = true;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in self.cells.iter_mut().flatten() {
            btn.pressed = false;
        }
    }

    /// Highlights the button dispatching the given action, if any
    pub fn highlight_action(&mut self, action: Action) {
        self.release_all();
        if let Some(idx) = self.find_button(action) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(
        &self,
    ) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref().map(|btn| ((i / self.cols, i % self.cols), btn))
        })
    }

    /// Converts a click position inside the rendered widget area to the
    /// clicked button's action
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Action> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for the border (1 char on each side).
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.get_button_at(row, col).map(|btn| btn.action)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if usize::from(inner.width) < cols || usize::from(inner.height) < rows {
            return; // Too small to render
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    Action::Digit(_) | Action::Decimal => Style::default().fg(Color::White),
                    Action::Operator(_) => Style::default().fg(Color::Yellow),
                    Action::Equals => Style::default().fg(Color::Green),
                    Action::Clear | Action::Backspace => Style::default().fg(Color::Red),
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_x = x + (btn_width.saturating_sub(3)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
