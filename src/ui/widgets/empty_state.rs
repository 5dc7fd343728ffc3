use crate::constants::{EMPTY_STATE_PADDING_COLS, EMPTY_STATE_PADDING_ROWS, SEARCH_ICON};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};

/// Centered placeholder shown in place of an empty list
pub struct DialogEmptyState<'a> {
    title: &'a str,
    description: Text<'a>,
}

impl<'a> DialogEmptyState<'a> {
    pub fn new(title: &'a str, description: impl Into<Text<'a>>) -> Self {
        Self {
            title,
            description: description.into(),
        }
    }
}

impl Widget for DialogEmptyState<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(SEARCH_ICON),
            Line::from(""),
            Line::styled(
                self.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        lines.extend(self.description.lines);

        Paragraph::new(lines)
            .block(Block::default().padding(Padding::new(
                EMPTY_STATE_PADDING_COLS,
                EMPTY_STATE_PADDING_COLS,
                EMPTY_STATE_PADDING_ROWS,
                EMPTY_STATE_PADDING_ROWS,
            )))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::buffer_lines;

    fn render(state: DialogEmptyState) -> Vec<String> {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        state.render(area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn test_renders_icon_title_description() {
        let lines = render(DialogEmptyState::new(
            "No matching assets",
            "Try a different filter.",
        ));

        let icon_row = lines.iter().position(|l| l.contains(SEARCH_ICON)).unwrap();
        let title_row = lines
            .iter()
            .position(|l| l.contains("No matching assets"))
            .unwrap();
        let description_row = lines
            .iter()
            .position(|l| l.contains("Try a different filter."))
            .unwrap();
        assert!(icon_row < title_row);
        assert!(title_row < description_row);
    }

    #[test]
    fn test_padding_applied() {
        let lines = render(DialogEmptyState::new("Empty", "Nothing here"));
        for row in &lines[..EMPTY_STATE_PADDING_ROWS as usize] {
            assert!(row.trim().is_empty());
        }
        let icon_row = lines.iter().position(|l| l.contains(SEARCH_ICON)).unwrap();
        assert_eq!(icon_row, EMPTY_STATE_PADDING_ROWS as usize);
    }

    #[test]
    fn test_title_and_description_verbatim() {
        let lines = render(DialogEmptyState::new(
            "  Spaced   Title  ",
            Text::from(vec![Line::from("first line"), Line::from("SECOND line")]),
        ));
        let all = lines.join("\n");
        assert!(all.contains("Spaced   Title"));
        assert!(all.contains("first line"));
        assert!(all.contains("SECOND line"));
    }

    #[test]
    fn test_content_centered() {
        let lines = render(DialogEmptyState::new("Empty", ""));
        let row = lines.iter().find(|l| l.contains("Empty")).unwrap();
        let left = row.find("Empty").unwrap();
        let right = row.len() - left - "Empty".len();
        assert!(left.abs_diff(right) <= 1);
    }
}
