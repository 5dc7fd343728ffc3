use crate::app::AppState;
use crate::error::Result;
use crate::types::{DialogFocus, UiMode};
use crate::ui::EventStatus;
use crate::ui::widgets::{
    handle_dialog_event, handle_search_key, handle_search_paste, popups::handle_error_popup_event,
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_event(app: &mut AppState, event: &Event) -> Result<()> {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
                return Ok(());
            }
        }

        match app.ui_mode {
            UiMode::ErrorPopup(_) => Self::handle_error_popup(app, event),
            UiMode::Normal if app.is_open => Self::handle_dialog(app, event),
            UiMode::Normal => Self::handle_background(app, event),
        }
        Ok(())
    }

    fn handle_error_popup(app: &mut AppState, event: &Event) {
        let frame = Self::frame(app);
        handle_error_popup_event(frame, event, || app.ui_mode = UiMode::Normal);
    }

    fn frame(app: &AppState) -> Rect {
        Rect::new(0, 0, app.viewport.width, app.viewport.height)
    }

    fn handle_background(app: &mut AppState, event: &Event) {
        let Event::Key(key) = event else {
            return;
        };
        match key.code {
            KeyCode::Char('q') => {
                app.should_quit = true;
            }
            KeyCode::Char('o') | KeyCode::Char('/') => {
                app.set_is_open(true);
            }
            _ => {}
        }
    }

    fn handle_dialog(app: &mut AppState, event: &Event) {
        let frame = Self::frame(app);
        let is_open = app.is_open;
        let close_focused = app.focus == DialogFocus::Close;

        // Close paths take priority over everything typed into the dialog
        if handle_dialog_event(is_open, close_focused, frame, event, |open| {
            app.set_is_open(open)
        }) == EventStatus::Consumed
        {
            return;
        }

        match event {
            Event::Key(key) => Self::handle_dialog_key(app, *key),
            Event::Paste(text) => {
                let show_search = app.config.show_search;
                let query = app.query_string.clone();
                handle_search_paste(show_search, &query, text, |value| {
                    app.set_query_string(value)
                });
            }
            _ => {}
        }
    }

    fn handle_dialog_key(app: &mut AppState, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                app.cycle_focus();
            }
            KeyCode::Down => {
                app.select_next();
            }
            KeyCode::Up => {
                app.select_previous();
            }
            KeyCode::Enter => {
                app.pick_selected();
            }
            _ => {
                let show_search = app.config.show_search;
                let query = app.query_string.clone();
                handle_search_key(show_search, &query, key, |value| {
                    app.set_query_string(value)
                });
            }
        }
    }
}
