//! Settings parser for `<data_dir>/config.toml`

use super::types::Settings;
use opnpage_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "opnpage";

/// Default data directory: `<data_local_dir>/opnpage`
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|base| base.join(APP_DIR))
        .ok_or_else(|| Error::data_dir("<no local data directory>"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `<data_dir>/config.toml`
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(data_dir: &Path) -> Settings {
    let config_path = data_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the data directory and a commented default `config.toml`
///
/// Existing files are left untouched.
pub fn init_config_dir(data_dir: &Path) -> Result<()> {
    if !data_dir.exists() {
        std::fs::create_dir_all(data_dir).map_err(|_| Error::data_dir(data_dir))?;
    }

    let config_path = data_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

fn generate_default_config() -> String {
    r#"# opnpage Configuration

[behavior]
show_welcome = true     # Show the welcome popup on startup

[ui]
dark_mode = false       # Initial theme until toggled with 't'

[drag]
activation_distance = 1 # Cells the pointer must travel before a drag starts
"#
    .to_string()
}
