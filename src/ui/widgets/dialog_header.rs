//! Dialog header bar with an optional search input

use crate::constants::{SEARCH_ICON, SEARCH_INPUT_WIDTH};
use crate::ui::EventStatus;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget},
};

/// Icon is two cells wide, followed by a space
const ICON_CELLS: u16 = 3;

pub struct DialogHeader<'a> {
    title: Line<'a>,
    show_search: bool,
    placeholder: &'a str,
    query_string: &'a str,
}

impl<'a> DialogHeader<'a> {
    pub fn new(
        title: impl Into<Line<'a>>,
        show_search: bool,
        placeholder: &'a str,
        query_string: &'a str,
    ) -> Self {
        Self {
            title: title.into(),
            show_search,
            placeholder,
            query_string,
        }
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::new(1, 1, 1, 0))
    }

    /// Split the bar into title and search input areas
    fn areas(&self, area: Rect) -> (Rect, Option<Rect>) {
        let inner = Self::block().inner(area);
        if !self.show_search {
            return (inner, None);
        }

        let [title_area, search_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(SEARCH_INPUT_WIDTH),
        ])
        .flex(Flex::SpaceBetween)
        .areas(inner);
        (title_area, Some(search_area))
    }

    /// Tail of the query that fits in the input, and its length in cells
    ///
    /// One cell is held back for the cursor, so the last typed character is
    /// always visible.
    fn visible_query(&self, search_area: Rect) -> (&'a str, u16) {
        let room = search_area.width.saturating_sub(ICON_CELLS + 1) as usize;
        let count = self.query_string.chars().count();
        let skip = count.saturating_sub(room);
        let start = self
            .query_string
            .char_indices()
            .nth(skip)
            .map_or(self.query_string.len(), |(idx, _)| idx);

        let shown = u16::try_from(count - skip).unwrap_or(u16::MAX);
        (&self.query_string[start..], shown)
    }

    /// Where the terminal cursor belongs while typing, if the input is shown
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let (_, search_area) = self.areas(area);
        let search_area = search_area?;
        if search_area.width == 0 || search_area.height == 0 {
            return None;
        }

        let (_, shown) = self.visible_query(search_area);
        let x = search_area
            .x
            .saturating_add(ICON_CELLS)
            .saturating_add(shown)
            .min(search_area.right().saturating_sub(1));
        Some(Position::new(x, search_area.y))
    }
}

impl Widget for DialogHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title_area, search_area) = self.areas(area);
        let visible = search_area.map(|search_area| self.visible_query(search_area).0);
        Self::block().render(area, buf);

        Paragraph::new(self.title)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(title_area, buf);

        if let (Some(search_area), Some(visible)) = (search_area, visible) {
            let text = if self.query_string.is_empty() {
                Span::styled(self.placeholder, Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(
                    visible,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            };

            Paragraph::new(Line::from(vec![Span::raw(SEARCH_ICON), Span::raw(" "), text]))
                .style(Style::default().bg(Color::Rgb(40, 40, 50)))
                .render(search_area, buf);
        }
    }
}

/// Turn a keystroke in the search input into a full-value update
///
/// `set_query_string` receives the complete new query, never a delta. The
/// value is passed through raw. Without a search input nothing is consumed.
pub fn handle_search_key<F>(
    show_search: bool,
    query_string: &str,
    key: KeyEvent,
    mut set_query_string: F,
) -> EventStatus
where
    F: FnMut(String),
{
    if !show_search || key.kind != KeyEventKind::Press {
        return EventStatus::Ignored;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return EventStatus::Ignored;
    }

    match key.code {
        KeyCode::Char(c) => {
            let mut value = query_string.to_string();
            value.push(c);
            set_query_string(value);
            EventStatus::Consumed
        }
        KeyCode::Backspace => {
            if !query_string.is_empty() {
                let mut value = query_string.to_string();
                value.pop();
                set_query_string(value);
            }
            EventStatus::Consumed
        }
        _ => EventStatus::Ignored,
    }
}

/// Append pasted text to the query as a single update
pub fn handle_search_paste<F>(
    show_search: bool,
    query_string: &str,
    pasted: &str,
    mut set_query_string: F,
) -> EventStatus
where
    F: FnMut(String),
{
    if !show_search || pasted.is_empty() {
        return EventStatus::Ignored;
    }

    set_query_string(format!("{}{}", query_string, pasted));
    EventStatus::Consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DIALOG_HEADER_HEIGHT;
    use crate::ui::widgets::buffer_lines;

    fn render(header: DialogHeader) -> Vec<String> {
        let area = Rect::new(0, 0, 70, DIALOG_HEADER_HEIGHT);
        let mut buf = Buffer::empty(area);
        header.render(area, &mut buf);
        buffer_lines(&buf)
    }

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_search_hidden() {
        let lines = render(DialogHeader::new("Assets", false, "Filter", "foo"));
        let all = lines.join("\n");
        assert!(all.contains("Assets"));
        assert!(!all.contains(SEARCH_ICON));
        assert!(!all.contains("foo"));
        assert!(!all.contains("Filter"));
    }

    #[test]
    fn test_search_shown_with_placeholder() {
        let lines = render(DialogHeader::new("Assets", true, "Filter", ""));
        let all = lines.join("\n");
        assert!(all.contains("Assets"));
        assert!(all.contains(SEARCH_ICON));
        assert!(all.contains("Filter"));
    }

    #[test]
    fn test_search_shows_query_over_placeholder() {
        let lines = render(DialogHeader::new("Assets", true, "Filter", "orders"));
        let all = lines.join("\n");
        assert!(all.contains("orders"));
        assert!(!all.contains("Filter"));
    }

    #[test]
    fn test_title_left_search_right() {
        let lines = render(DialogHeader::new("Assets", true, "Filter", ""));
        let row = lines.iter().find(|l| l.contains("Assets")).unwrap();
        let title_at = row.find("Assets").unwrap();
        let icon_at = row.find(SEARCH_ICON).unwrap();
        assert!(title_at < icon_at);
    }

    #[test]
    fn test_typing_sends_full_value() {
        let mut query = "foo".to_string();
        let mut calls = Vec::new();
        for c in "bar".chars() {
            let current = query.clone();
            handle_search_key(true, &current, press(c), |value| {
                calls.push(value.clone());
                query = value;
            });
        }
        assert_eq!(calls, vec!["foob", "fooba", "foobar"]);
        assert_eq!(query, "foobar");
    }

    #[test]
    fn test_value_is_not_trimmed() {
        let mut calls = Vec::new();
        handle_search_key(true, "a", press(' '), |value| calls.push(value));
        assert_eq!(calls, vec!["a "]);
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut calls = Vec::new();
        let key = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        handle_search_key(true, "orders", key, |value| calls.push(value));
        handle_search_key(true, "", key, |value| calls.push(value));
        assert_eq!(calls, vec!["order"]);
    }

    #[test]
    fn test_hidden_search_consumes_nothing() {
        let status = handle_search_key(false, "foo", press('x'), |_| panic!("no input shown"));
        assert_eq!(status, EventStatus::Ignored);
    }

    #[test]
    fn test_control_chords_ignored() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let status = handle_search_key(true, "", key, |_| panic!("chord typed"));
        assert_eq!(status, EventStatus::Ignored);
    }

    #[test]
    fn test_paste_appends_once() {
        let mut calls = Vec::new();
        handle_search_paste(true, "raw/", "orders", |value| calls.push(value));
        assert_eq!(calls, vec!["raw/orders"]);
    }

    #[test]
    fn test_cursor_follows_query() {
        let area = Rect::new(0, 0, 70, DIALOG_HEADER_HEIGHT);
        let empty = DialogHeader::new("Assets", true, "Filter", "");
        let typed = DialogHeader::new("Assets", true, "Filter", "abc");
        let hidden = DialogHeader::new("Assets", false, "Filter", "abc");

        let start = empty.cursor_position(area).unwrap();
        let end = typed.cursor_position(area).unwrap();
        assert_eq!(end.x, start.x + 3);
        assert!(hidden.cursor_position(area).is_none());
    }

    #[test]
    fn test_long_query_shows_tail() {
        let query = format!("{}TAIL", "a".repeat(60));
        let lines = render(DialogHeader::new("Assets", true, "Filter", &query));
        let all = lines.join("\n");
        assert!(all.contains("aaaTAIL"));
        assert!(!all.contains(&query));
    }

    #[test]
    fn test_cursor_stays_inside_input_for_huge_query() {
        let area = Rect::new(0, 0, 70, DIALOG_HEADER_HEIGHT);
        let huge = "x".repeat(u16::MAX as usize + 10);
        let header = DialogHeader::new("Assets", true, "Filter", &huge);

        let (_, search_area) = header.areas(area);
        let search_area = search_area.unwrap();
        let position = header.cursor_position(area).unwrap();
        assert_eq!(position.x, search_area.right() - 1);
        assert_eq!(position.y, search_area.y);

        let mut buf = Buffer::empty(area);
        header.render(area, &mut buf);
    }
}
