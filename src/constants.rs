//! Application-wide constants
//!
//! Dialog dimensions are expressed in terminal cells. One column stands in for
//! 10px and one row for 16px of the web console layout.

/// Minimum terminal width required to run the application
pub const MIN_TERMINAL_WIDTH: u16 = 60;

/// Minimum terminal height required to run the application
pub const MIN_TERMINAL_HEIGHT: u16 = 24;

/// Preferred dialog width in columns (750px)
pub const DIALOG_WIDTH: u16 = 75;

/// Dialog width cap as a percentage of the frame width
pub const DIALOG_MAX_WIDTH_PERCENT: u16 = 80;

/// Dialog width floor in columns (500px), applied after the percentage cap
pub const DIALOG_MIN_WIDTH: u16 = 50;

/// Height of the clipped content region in rows (272px)
pub const DIALOG_CONTENT_HEIGHT: u16 = 17;

/// Height of the header slot: one title/search row plus the bottom border
pub const DIALOG_HEADER_HEIGHT: u16 = 3;

/// Height of the footer: top border plus the button row
pub const DIALOG_FOOTER_HEIGHT: u16 = 2;

/// Width of the search input in columns (252px)
pub const SEARCH_INPUT_WIDTH: u16 = 25;

/// Empty state vertical padding in rows (32px)
pub const EMPTY_STATE_PADDING_ROWS: u16 = 2;

/// Empty state horizontal padding in columns (32px)
pub const EMPTY_STATE_PADDING_COLS: u16 = 3;

/// Glyph used for the search input and the empty state
pub const SEARCH_ICON: &str = "🔍";

/// Label of the footer button
pub const CLOSE_LABEL: &str = "[ Close ]";

/// Maximum length for the search placeholder (characters)
pub const MAX_PLACEHOLDER_LENGTH: usize = 64;

/// Frame duration in milliseconds for the UI render loop (targeting 60 FPS)
pub const FRAME_DURATION_MS: u64 = 16;
