//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `mouse`: Pointer press/drag/release routing through the drag controller

pub(crate) mod keys;
pub(crate) mod mouse;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

pub use keys::handle_key;

/// Result of processing a message
///
/// Every state change is applied synchronously inside `update`; the only
/// thing left for the event loop is an optional follow-up message.
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
