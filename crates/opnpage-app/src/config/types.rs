//! Configuration types for opnpage
//!
//! Defines `Settings` and its sections as read from `config.toml`.

use serde::{Deserialize, Serialize};

/// Global application settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub drag: DragSettings,
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Show the welcome popup on startup
    #[serde(default = "default_true")]
    pub show_welcome: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { show_welcome: true }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Initial theme when no preference has been stored yet
    #[serde(default)]
    pub dark_mode: bool,
}

/// Drag gesture settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DragSettings {
    /// Pointer travel in terminal cells required before a press becomes a drag
    #[serde(default = "default_activation_distance")]
    pub activation_distance: u16,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            activation_distance: default_activation_distance(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_activation_distance() -> u16 {
    1
}
