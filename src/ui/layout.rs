use crate::app::AppState;
use crate::types::{DialogFocus, LoadingState, UiMode};
use crate::ui::widgets::{
    AssetKeyList, DialogEmptyState, DialogGeometry, DialogHeader, DialogShell, LoadingWidget,
    popups::ErrorPopup,
};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};

pub fn render(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Titlebar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Statusbar
        ])
        .split(f.area());

    render_titlebar(f, app, chunks[0]);
    render_summary(f, app, chunks[1]);
    render_statusbar(f, app, chunks[2]);

    render_dialog(f, app);

    if let UiMode::ErrorPopup(message) = &app.ui_mode {
        f.render_widget(ErrorPopup::new(message), f.area());
    }
}

fn render_titlebar(f: &mut Frame, app: &AppState, area: Rect) {
    let title_text = match &app.source_path {
        Some(path) => format!("keyscope - {}", path),
        None => "keyscope".to_string(),
    };

    let title = Paragraph::new(title_text)
        .style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .alignment(Alignment::Center);

    f.render_widget(title, area);
}

fn render_summary(f: &mut Frame, app: &AppState, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(format!("{} asset keys loaded", app.asset_keys.len())),
    ];
    if let Some(key) = &app.last_picked {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Last picked: {}", key)));
    }

    let text = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(text, area);
}

fn render_statusbar(f: &mut Frame, app: &AppState, area: Rect) {
    let status_text = if app.is_open {
        "Esc close | Tab focus | ↑/↓ select | Enter pick"
    } else {
        "o or / browse asset keys | q quit"
    };

    let status =
        Paragraph::new(status_text).style(Style::default().fg(Color::White).bg(Color::DarkGray));

    f.render_widget(status, area);
}

/// Compose header and content inside the shell
fn render_dialog(f: &mut Frame, app: &AppState) {
    let area = f.area();
    let show_search = app.config.show_search;
    let header = DialogHeader::new(
        app.config.title.as_str(),
        show_search,
        &app.config.placeholder,
        &app.query_string,
    );

    if app.is_open && app.focus == DialogFocus::Search && app.ui_mode == UiMode::Normal {
        let geometry = DialogGeometry::compute(area);
        if let Some(position) = header.cursor_position(geometry.header) {
            f.set_cursor_position(position);
        }
    }

    let keys = app.filtered_keys();
    let content = DialogContent { app, keys: &keys };

    let shell = DialogShell::new(app.is_open, header, content)
        .close_focused(app.focus == DialogFocus::Close);
    f.render_widget(shell, area);
}

/// Either the loading spinner, the key list, or the empty state
struct DialogContent<'a> {
    app: &'a AppState,
    keys: &'a [&'a crate::types::AssetKey],
}

impl Widget for DialogContent<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let LoadingState::LoadingKeys { .. } = self.app.loading_state {
            LoadingWidget::new("Loading asset keys", self.app.loading_started).render(area, buf);
        } else if self.keys.is_empty() {
            let config = &self.app.config;
            DialogEmptyState::new(
                &config.empty_title,
                Text::from(config.empty_description.as_str()),
            )
            .render(area, buf);
        } else {
            AssetKeyList::new(self.keys, self.app.selected_idx).render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AssetKey, Config};
    use crate::ui::widgets::buffer_lines;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        buffer_lines(terminal.backend().buffer()).join("\n")
    }

    fn app_with_keys() -> AppState {
        let mut app = AppState::new(Config::default());
        app.set_asset_keys(
            vec![AssetKey::new(vec!["raw".to_string(), "orders".to_string()])],
            "keys.json".to_string(),
        );
        app
    }

    #[test]
    fn test_closed_dialog_hidden() {
        let app = app_with_keys();
        let screen = draw(&app);
        assert!(!screen.contains("[ Close ]"));
        assert!(screen.contains("1 asset keys loaded"));
    }

    #[test]
    fn test_open_dialog_lists_keys() {
        let mut app = app_with_keys();
        app.set_is_open(true);
        let screen = draw(&app);
        assert!(screen.contains("[ Close ]"));
        assert!(screen.contains("Asset keys"));
        assert!(screen.contains("raw/orders"));
    }

    #[test]
    fn test_no_matches_shows_empty_state() {
        let mut app = app_with_keys();
        app.set_is_open(true);
        app.set_query_string("zzz".to_string());
        let screen = draw(&app);
        assert!(screen.contains(&app.config.empty_title));
        assert!(screen.contains(&app.config.empty_description));
        assert!(!screen.contains("raw/orders"));
    }

    #[test]
    fn test_loading_shows_spinner() {
        let mut app = AppState::new(Config::default());
        app.start_loading("keys.json".to_string());
        app.set_is_open(true);
        let screen = draw(&app);
        assert!(screen.contains("Loading asset keys"));
    }

    #[test]
    fn test_huge_pasted_query_renders() {
        use crate::ui::input_handler::InputHandler;
        use crossterm::event::Event;

        let mut app = app_with_keys();
        app.update_viewport_size(100, 30);
        app.set_is_open(true);
        let paste = Event::Paste("x".repeat(70_000));
        InputHandler::handle_event(&mut app, &paste).unwrap();
        assert_eq!(app.query_string.len(), 70_000);

        let screen = draw(&app);
        assert!(screen.contains("xxxxxxxxxx"));
        assert!(screen.contains(&app.config.empty_title));
    }

    #[test]
    fn test_error_popup_over_dialog() {
        let mut app = app_with_keys();
        app.set_is_open(true);
        app.ui_mode = UiMode::ErrorPopup("bad file".to_string());
        let screen = draw(&app);
        assert!(screen.contains("bad file"));
    }
}
