use std::fmt;

/// Identifier for a data asset, stored as its path segments
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetKey {
    pub path: Vec<String>,
}

impl AssetKey {
    pub fn new(path: Vec<String>) -> Self {
        AssetKey { path }
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join("/"))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Which dialog element receives Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogFocus {
    Search,
    Close,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub placeholder: String,
    pub show_search: bool,
    pub empty_title: String,
    pub empty_description: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: "Asset keys".to_string(),
            placeholder: "Filter by asset key…".to_string(),
            show_search: true,
            empty_title: "No matching assets".to_string(),
            empty_description: "No asset keys match the current filter.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Idle,
    LoadingKeys { file_path: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiMode {
    Normal,
    ErrorPopup(String),
}
