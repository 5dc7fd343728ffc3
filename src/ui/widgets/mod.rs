//! UI widget components
//!
//! The dialog building blocks (shell, header, empty state) plus the list,
//! loading indicator and error popup composed around them.

pub mod asset_key_list;
pub mod dialog;
pub mod dialog_header;
pub mod empty_state;
pub mod loading;
pub mod popups;

pub use asset_key_list::AssetKeyList;
pub use dialog::{DialogGeometry, DialogShell, handle_dialog_event};
pub use dialog_header::{DialogHeader, handle_search_key, handle_search_paste};
pub use empty_state::DialogEmptyState;
pub use loading::LoadingWidget;

/// Flatten a buffer into one string per row
#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let width = buf.area.width as usize;
    buf.content
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}
