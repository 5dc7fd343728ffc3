//! Modal popup components layered above the dialog

pub mod error;

pub use error::{ErrorPopup, ErrorPopupGeometry, handle_error_popup_event};
