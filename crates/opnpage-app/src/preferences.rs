//! Persisted UI preferences stored alongside the layout

use opnpage_core::prelude::*;

use crate::storage::KeyValueStore;

/// Key for the dark-mode flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Stored dark-mode flag, or `default` when absent or unreadable
pub fn load_dark_mode(store: &dyn KeyValueStore, default: bool) -> bool {
    match store.get(DARK_MODE_KEY) {
        Ok(Some(value)) => match value.as_str() {
            "true" => true,
            "false" => false,
            other => {
                warn!("Ignoring invalid {} value {:?}", DARK_MODE_KEY, other);
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            warn!("Failed to read {}: {}", DARK_MODE_KEY, e);
            default
        }
    }
}

/// Persist the dark-mode flag; failures are logged
pub fn save_dark_mode(store: &mut dyn KeyValueStore, dark: bool) {
    if let Err(e) = store.set(DARK_MODE_KEY, if dark { "true" } else { "false" }) {
        warn!("Failed to save {}: {}", DARK_MODE_KEY, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_when_absent() {
        let store = MemoryStore::new();
        assert!(load_dark_mode(&store, true));
        assert!(!load_dark_mode(&store, false));
    }

    #[test]
    fn test_round_trip() {
        let mut store = MemoryStore::new();
        save_dark_mode(&mut store, true);
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
        assert!(load_dark_mode(&store, false));
    }

    #[test]
    fn test_invalid_value_falls_back() {
        let store = MemoryStore::with_entry(DARK_MODE_KEY, "yes please");
        assert!(!load_dark_mode(&store, false));
    }
}
