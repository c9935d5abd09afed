//! TUI rendering.

use padcalc::format_number;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use crate::app::App;
use crate::keypad::KeypadWidget;

/// Application title shown on the outer frame
pub const APP_TITLE: &str = " padcalc ";

/// Keyboard shortcuts for the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "Digits"),
    (". ,", "Decimal"),
    ("+-*/", "Operator"),
    ("Enter =", "Evaluate"),
    ("Bksp", "Delete digit"),
    ("Esc Del", "Clear"),
    ("Click", "Press button"),
    ("q", "Quit"),
];

/// The screen regions of the calculator layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// Display panel
    pub display: Rect,
    /// Pending-operation status panel
    pub status: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// Help sidebar
    pub help: Rect,
}

/// Splits the frame area into the calculator's screen regions.
///
/// The event loop uses the same split to hit-test mouse clicks against
/// the keypad, so this must stay in lockstep with [`render`].
#[must_use]
pub fn layout_areas(area: Rect) -> Areas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(26),    // Display + status
            Constraint::Length(22), // Keypad
            Constraint::Length(24), // Help sidebar
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Min(4),    // Status
        ])
        .split(columns[0]);

    Areas {
        display: main[0],
        status: main[1],
        keypad: columns[1],
        help: columns[2],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a App,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    /// Renders the display panel
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.showing_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        let paragraph = Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        paragraph.render(area, buf);
    }

    /// Renders the pending-operation status panel
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.state();

        let mut lines = Vec::new();
        // A failed division retains its operands, so the error check must
        // come before the pending-operation arm.
        match (state.previous_value(), state.operator()) {
            _ if self.app.showing_error() => {
                lines.push(Line::from(Span::styled(
                    "Clearing shortly",
                    Style::default().fg(Color::Red),
                )));
            }
            (Some(prev), Some(op)) => {
                lines.push(Line::from(vec![
                    Span::styled(format_number(prev), Style::default().fg(Color::Cyan)),
                    Span::raw(" "),
                    Span::styled(
                        op.symbol().to_string(),
                        Style::default().fg(Color::Yellow),
                    ),
                ]));
            }
            _ if state.result_displayed() => {
                lines.push(Line::from(Span::styled(
                    "Result",
                    Style::default().fg(Color::Green),
                )));
            }
            _ => {
                lines.push(Line::from(Span::styled(
                    "Ready",
                    Style::default().fg(Color::Gray),
                )));
            }
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(" Pending ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        paragraph.render(area, buf);
    }

    /// Renders the help sidebar
    fn render_help(area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(keys, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{keys:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        list.render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let areas = layout_areas(area);
        self.render_display(areas.display, buf);
        self.render_status(areas.status, buf);
        KeypadWidget::new(self.app.keypad()).render(areas.keypad, buf);
        Self::render_help(areas.help, buf);
    }
}
