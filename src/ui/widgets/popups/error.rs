//! Blocking error popup with a single `[OK]` button
//!
//! Drawing and hit-testing both go through `ErrorPopupGeometry`, so a click
//! lands on exactly the cells the button was painted on.

use crate::ui::EventStatus;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const OK_LABEL: &str = "[OK]";

/// Title, message and button rows
const POPUP_HEIGHT: u16 = 7;

/// Popup width as a percentage of the frame width
const POPUP_WIDTH_PERCENT: u16 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPopupGeometry {
    pub popup: Rect,
    pub message: Rect,
    pub button: Rect,
}

impl ErrorPopupGeometry {
    pub fn compute(frame: Rect) -> Self {
        let width = (frame.width as u32 * POPUP_WIDTH_PERCENT as u32 / 100) as u16;
        let height = POPUP_HEIGHT.min(frame.height);
        let popup = Rect {
            x: frame.x + (frame.width - width) / 2,
            y: frame.y + (frame.height - height) / 2,
            width,
            height,
        };

        let inner = Block::default().borders(Borders::ALL).inner(popup);
        let [message, _spacer, button_row] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let label_width = (OK_LABEL.len() as u16).min(button_row.width);
        let button = Rect {
            x: button_row.x + (button_row.width - label_width) / 2,
            y: button_row.y,
            width: label_width,
            height: button_row.height,
        };

        ErrorPopupGeometry {
            popup,
            message,
            button,
        }
    }
}

/// Centered over whatever area it is rendered into
pub struct ErrorPopup<'a> {
    message: &'a str,
}

impl<'a> ErrorPopup<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for ErrorPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let geometry = ErrorPopupGeometry::compute(area);

        Clear.render(geometry.popup, buf);
        Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .render(geometry.popup, buf);

        Paragraph::new(self.message)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .render(geometry.message, buf);

        Paragraph::new(OK_LABEL)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .render(geometry.button, buf);
    }
}

/// Dismiss on Esc, Enter, or a left click on `[OK]`
pub fn handle_error_popup_event<F>(frame: Rect, event: &Event, mut dismiss: F) -> EventStatus
where
    F: FnMut(),
{
    let dismissed = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            matches!(key.code, KeyCode::Esc | KeyCode::Enter)
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            ErrorPopupGeometry::compute(frame)
                .button
                .contains(Position::new(mouse.column, mouse.row))
        }
        _ => false,
    };

    if dismissed {
        dismiss();
        EventStatus::Consumed
    } else {
        EventStatus::Ignored
    }
}
