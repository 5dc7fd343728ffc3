use crate::asset_keys::filter_keys;
use crate::types::{AssetKey, Config, DialogFocus, LoadingState, UiMode, Viewport};
use std::time::Instant;

/// Owner of all mutable view state
///
/// The dialog components read `is_open` and `query_string` from here and
/// request changes through `set_is_open` / `set_query_string`.
pub struct AppState {
    pub config: Config,
    pub viewport: Viewport,
    pub should_quit: bool,
    pub ui_mode: UiMode,
    pub loading_state: LoadingState,
    pub loading_started: Instant,

    // Dialog
    pub is_open: bool,
    pub query_string: String,
    pub focus: DialogFocus,

    // Asset keys
    pub asset_keys: Vec<AssetKey>,
    pub source_path: Option<String>,
    pub selected_idx: Option<usize>,
    pub last_picked: Option<AssetKey>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            viewport: Viewport {
                width: 80,
                height: 24,
            },
            should_quit: false,
            ui_mode: UiMode::Normal,
            loading_state: LoadingState::Idle,
            loading_started: Instant::now(),
            is_open: false,
            query_string: String::new(),
            focus: DialogFocus::Search,
            asset_keys: Vec::new(),
            source_path: None,
            selected_idx: None,
            last_picked: None,
        }
    }

    pub fn set_is_open(&mut self, open: bool) {
        if open == self.is_open {
            return;
        }
        tracing::debug!("Dialog {}", if open { "opened" } else { "closed" });

        self.is_open = open;
        if open {
            self.focus = DialogFocus::Search;
            self.clamp_selection();
        }
    }

    pub fn set_query_string(&mut self, query: String) {
        self.query_string = query;
        self.selected_idx = None;
        self.clamp_selection();
    }

    pub fn set_asset_keys(&mut self, keys: Vec<AssetKey>, source_path: String) {
        tracing::info!("{} asset keys available from {}", keys.len(), source_path);
        self.asset_keys = keys;
        self.source_path = Some(source_path);
        self.loading_state = LoadingState::Idle;
        self.clamp_selection();
    }

    pub fn start_loading(&mut self, file_path: String) {
        self.loading_state = LoadingState::LoadingKeys { file_path };
        self.loading_started = Instant::now();
    }

    pub fn filtered_keys(&self) -> Vec<&AssetKey> {
        filter_keys(&self.asset_keys, &self.query_string)
    }

    pub fn select_next(&mut self) {
        let count = self.filtered_keys().len();
        if count == 0 {
            return;
        }
        self.selected_idx = Some(match self.selected_idx {
            Some(idx) => (idx + 1).min(count - 1),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if let Some(idx) = self.selected_idx {
            self.selected_idx = Some(idx.saturating_sub(1));
        }
    }

    /// Remember the highlighted key as the user's choice
    pub fn pick_selected(&mut self) {
        let picked = self
            .selected_idx
            .and_then(|idx| self.filtered_keys().get(idx).map(|key| (*key).clone()));

        if let Some(key) = picked {
            tracing::info!("Picked asset key: {}", key);
            self.last_picked = Some(key);
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            DialogFocus::Search => DialogFocus::Close,
            DialogFocus::Close => DialogFocus::Search,
        };
    }

    pub fn update_viewport_size(&mut self, width: u16, height: u16) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    /// Keep the selection pointing at a visible key
    fn clamp_selection(&mut self) {
        let count = self.filtered_keys().len();
        self.selected_idx = match (count, self.selected_idx) {
            (0, _) => None,
            (_, None) => Some(0),
            (n, Some(idx)) => Some(idx.min(n - 1)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(path: &str) -> AssetKey {
        AssetKey::new(path.split('/').map(str::to_string).collect())
    }

    fn app_with_keys() -> AppState {
        let mut app = AppState::new(Config::default());
        app.set_asset_keys(
            vec![
                key("analytics/revenue"),
                key("raw/customers"),
                key("raw/orders"),
            ],
            "keys.json".to_string(),
        );
        app
    }

    #[test]
    fn test_open_resets_focus() {
        let mut app = app_with_keys();
        app.focus = DialogFocus::Close;
        app.set_is_open(true);
        assert!(app.is_open);
        assert_eq!(app.focus, DialogFocus::Search);
    }

    #[test]
    fn test_query_filters_and_resets_selection() {
        let mut app = app_with_keys();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected_idx, Some(2));

        app.set_query_string("raw".to_string());
        assert_eq!(app.filtered_keys().len(), 2);
        assert_eq!(app.selected_idx, Some(0));
    }

    #[test]
    fn test_query_stored_raw() {
        let mut app = app_with_keys();
        app.set_query_string("  Raw ".to_string());
        assert_eq!(app.query_string, "  Raw ");
        assert_eq!(app.filtered_keys().len(), 2);
    }

    #[test]
    fn test_no_match_clears_selection() {
        let mut app = app_with_keys();
        app.set_query_string("zzz".to_string());
        assert!(app.filtered_keys().is_empty());
        assert_eq!(app.selected_idx, None);

        app.select_next();
        assert_eq!(app.selected_idx, None);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app_with_keys();
        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.selected_idx, Some(2));
        for _ in 0..10 {
            app.select_previous();
        }
        assert_eq!(app.selected_idx, Some(0));
    }

    #[test]
    fn test_pick_selected_uses_filtered_view() {
        let mut app = app_with_keys();
        app.set_query_string("orders".to_string());
        app.pick_selected();
        assert_eq!(app.last_picked, Some(key("raw/orders")));
    }

    #[test]
    fn test_cycle_focus() {
        let mut app = AppState::new(Config::default());
        app.cycle_focus();
        assert_eq!(app.focus, DialogFocus::Close);
        app.cycle_focus();
        assert_eq!(app.focus, DialogFocus::Search);
    }
}
