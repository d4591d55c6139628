//! Generic settings persistence coordination.
//!
//! Type-safe loading and saving of serializable reader settings (font size,
//! page width) to eframe's persistent storage. Values are stored as JSON
//! strings.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// Returns the deserialized value if found and valid, otherwise the
    /// provided default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rnovel::MemoryStorage;

    #[test]
    fn test_save_and_load_font_size() {
        let mut storage = MemoryStorage::new();

        SettingsCoordinator::save_setting(&mut storage, "font_size", &18.5f32);

        let loaded: f32 = SettingsCoordinator::load_setting_or(Some(&storage), "font_size", 16.0);
        assert_eq!(loaded, 18.5);
    }

    #[test]
    fn test_load_missing_key_returns_default() {
        let storage = MemoryStorage::new();
        let loaded: f32 = SettingsCoordinator::load_setting_or(Some(&storage), "missing", 720.0);
        assert_eq!(loaded, 720.0);
    }

    #[test]
    fn test_load_invalid_value_returns_default() {
        use eframe::Storage;

        let mut storage = MemoryStorage::new();
        storage.set_string("font_size", "not json".to_string());

        let loaded: f32 = SettingsCoordinator::load_setting_or(Some(&storage), "font_size", 16.0);
        assert_eq!(loaded, 16.0);
    }
}
