//! Modal dialog shell
//!
//! The shell draws a centered, bordered overlay with a caller-supplied header,
//! a fixed-height clipped content region, and a footer holding a single Close
//! button. Whether it is shown is decided entirely by the `is_open` flag the
//! caller passes in; close requests are reported back through a closure.

use crate::constants::{
    CLOSE_LABEL, DIALOG_CONTENT_HEIGHT, DIALOG_FOOTER_HEIGHT, DIALOG_HEADER_HEIGHT,
    DIALOG_MAX_WIDTH_PERCENT, DIALOG_MIN_WIDTH, DIALOG_WIDTH,
};
use crate::ui::EventStatus;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Screen regions of the dialog for a given frame area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogGeometry {
    pub dialog: Rect,
    pub header: Rect,
    pub content: Rect,
    pub footer: Rect,
    pub close_button: Rect,
}

impl DialogGeometry {
    pub fn compute(frame: Rect) -> Self {
        let capped = (frame.width as u32 * DIALOG_MAX_WIDTH_PERCENT as u32 / 100) as u16;
        let width = DIALOG_WIDTH
            .min(capped)
            .max(DIALOG_MIN_WIDTH)
            .min(frame.width);
        let height = (DIALOG_HEADER_HEIGHT + DIALOG_CONTENT_HEIGHT + DIALOG_FOOTER_HEIGHT + 2)
            .min(frame.height);

        let dialog = Rect {
            x: frame.x + (frame.width - width) / 2,
            y: frame.y + (frame.height - height) / 2,
            width,
            height,
        };

        let [header, content, footer] = Layout::vertical([
            Constraint::Length(DIALOG_HEADER_HEIGHT),
            Constraint::Length(DIALOG_CONTENT_HEIGHT),
            Constraint::Length(DIALOG_FOOTER_HEIGHT),
        ])
        .areas(dialog.inner(Margin::new(1, 1)));

        // Button sits on the row below the footer's top border, right-aligned
        let label_width = (CLOSE_LABEL.chars().count() as u16).min(footer.width);
        let close_button = if footer.height >= 2 {
            Rect {
                x: footer.right().saturating_sub(label_width + 1).max(footer.x),
                y: footer.y + 1,
                width: label_width,
                height: 1,
            }
        } else {
            Rect::default()
        };

        DialogGeometry {
            dialog,
            header,
            content,
            footer,
            close_button,
        }
    }
}

pub struct DialogShell<H, C> {
    is_open: bool,
    header: H,
    content: C,
    close_focused: bool,
}

impl<H: Widget, C: Widget> DialogShell<H, C> {
    pub fn new(is_open: bool, header: H, content: C) -> Self {
        Self {
            is_open,
            header,
            content,
            close_focused: false,
        }
    }

    /// Highlight the Close button as the keyboard target
    pub fn close_focused(mut self, focused: bool) -> Self {
        self.close_focused = focused;
        self
    }
}

impl<H: Widget, C: Widget> Widget for DialogShell<H, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.is_open {
            return;
        }

        let geometry = DialogGeometry::compute(area);

        // Clear the area behind the dialog
        Clear.render(geometry.dialog, buf);

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .render(geometry.dialog, buf);

        self.header.render(geometry.header, buf);

        // Content gets its own buffer so nothing it draws can leave the region
        let mut clipped = Buffer::empty(geometry.content);
        self.content.render(geometry.content, &mut clipped);
        buf.merge(&clipped);

        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(geometry.footer, buf);

        let button_style = if self.close_focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        Paragraph::new(CLOSE_LABEL)
            .style(button_style)
            .render(geometry.close_button, buf);
    }
}

/// Translate a terminal event into a close request
///
/// `set_is_open(false)` is called once for a click on Close, a click outside
/// the dialog, Esc, or Enter while the Close button is focused. A closed
/// dialog ignores everything, and the dialog never asks to be opened.
pub fn handle_dialog_event<F>(
    is_open: bool,
    close_focused: bool,
    frame: Rect,
    event: &Event,
    mut set_is_open: F,
) -> EventStatus
where
    F: FnMut(bool),
{
    if !is_open {
        return EventStatus::Ignored;
    }

    let close_requested = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Esc => true,
            KeyCode::Enter => close_focused,
            _ => false,
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            let geometry = DialogGeometry::compute(frame);
            let position = Position::new(mouse.column, mouse.row);
            geometry.close_button.contains(position) || !geometry.dialog.contains(position)
        }
        _ => false,
    };

    if close_requested {
        tracing::debug!("Dialog close requested by {:?}", event);
        set_is_open(false);
        EventStatus::Consumed
    } else {
        EventStatus::Ignored
    }
}
