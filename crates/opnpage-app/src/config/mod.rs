//! Configuration file parsing for opnpage
//!
//! Supports `<data_dir>/config.toml` for global settings. Runtime state
//! (layout, theme preference) lives in the key-value store instead.

pub mod settings;
pub mod types;

pub use settings::{default_data_dir, init_config_dir, load_settings};
pub use types::*;
