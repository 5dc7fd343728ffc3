pub mod input_handler;
pub mod layout;
pub mod widgets;

/// Whether a component acted on an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Consumed,
    Ignored,
}
