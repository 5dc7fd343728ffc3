//! Loading spinner shown while asset keys are read

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::time::Instant;

/// Braille dots, one frame every `SPINNER_FRAME_MS`
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const SPINNER_FRAME_MS: u128 = 80;

fn spinner_frame(elapsed_ms: u128) -> &'static str {
    let idx = (elapsed_ms / SPINNER_FRAME_MS % SPINNER_FRAMES.len() as u128) as usize;
    SPINNER_FRAMES[idx]
}

/// Single-line spinner with a message, vertically centered in its area
pub struct LoadingWidget {
    message: String,
    start_time: Instant,
}

impl LoadingWidget {
    pub fn new(message: impl Into<String>, start_time: Instant) -> Self {
        Self {
            message: message.into(),
            start_time,
        }
    }
}

impl Widget for LoadingWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spinner_char = spinner_frame(self.start_time.elapsed().as_millis());

        let line = Line::from(vec![
            Span::styled(
                spinner_char,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(self.message, Style::default().fg(Color::White)),
        ]);

        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(ratatui::layout::Flex::Center)
            .areas(area);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::buffer_lines;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), "⠋");
        assert_eq!(spinner_frame(79), "⠋");
        assert_eq!(spinner_frame(80), "⠙");
        assert_eq!(spinner_frame(800), "⠋");
    }

    #[test]
    fn test_message_rendered_mid_area() {
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        LoadingWidget::new("Loading asset keys", Instant::now()).render(area, &mut buf);

        let lines = buffer_lines(&buf);
        let row = lines
            .iter()
            .position(|l| l.contains("Loading asset keys"))
            .unwrap();
        assert_eq!(row, 2);
    }
}
