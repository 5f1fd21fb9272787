//! opnpage-app - Application state and orchestration for the opnpage dashboard
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the layout store and its persistence backends, the drag
//! controller, the configuration modal, annotation popups and config loading.
//! It has no terminal dependency; opnpage-tui renders [`AppState`] and feeds
//! [`Message`]s back into [`handler::update`].

pub mod annotation_popup;
pub mod config;
pub mod config_modal;
pub mod confirm_dialog;
pub mod drag;
pub mod grid;
pub mod handler;
pub mod input_key;
pub mod layout_store;
pub mod message;
pub mod preferences;
pub mod signals;
pub mod state;
pub mod storage;
pub mod widget_view;

// Re-export primary types
pub use handler::{update, UpdateResult};
pub use input_key::{InputKey, InputMouse, MouseAction};
pub use layout_store::{LayoutStore, LAYOUT_KEY};
pub use message::Message;
pub use state::{AppPhase, AppState, UiMode};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
