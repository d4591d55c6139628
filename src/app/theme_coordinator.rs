//! Theme management and persistence coordination.
//!
//! The dark-mode preference is a boolean stored as a string under a fixed,
//! novel-independent key. It is read once at startup, before the first frame
//! renders, and written only when the user toggles the control.

use crate::app::AppState;

const DARK_MODE_KEY: &str = "dark-mode";

/// Coordinates theme application and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the dark-mode flag from persistent storage during startup.
    ///
    /// Absent or unparseable values mean the default light mode.
    pub fn load_dark_mode_from_storage(storage: Option<&dyn eframe::Storage>) -> bool {
        storage
            .and_then(|s| s.get_string(DARK_MODE_KEY))
            .map(|value| value == "true")
            .unwrap_or(false)
    }

    /// Saves the dark-mode flag to persistent storage.
    pub fn save_dark_mode_to_storage(storage: &mut dyn eframe::Storage, enabled: bool) {
        storage.set_string(DARK_MODE_KEY, enabled.to_string());
        storage.flush();
    }

    /// Flips the current mode, persists the new value, and returns it.
    ///
    /// Each call flips exactly once; toggling twice restores the prior state
    /// and the prior persisted value.
    pub fn toggle(state: &mut AppState, storage: Option<&mut (dyn eframe::Storage + 'static)>) -> bool {
        let enabled = state.theme.toggle();
        if let Some(storage) = storage {
            Self::save_dark_mode_to_storage(storage, enabled);
        }
        enabled
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure the theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme = rnovel::theme_for(state.theme.dark_mode());
        let mut visuals = if theme.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        theme.apply(&mut visuals);
        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rnovel::MemoryStorage;

    #[test]
    fn test_load_applies_stored_flag() {
        use eframe::Storage;

        let mut storage = MemoryStorage::new();
        assert!(!ThemeCoordinator::load_dark_mode_from_storage(Some(&storage)));

        storage.set_string(DARK_MODE_KEY, "true".to_string());
        assert!(ThemeCoordinator::load_dark_mode_from_storage(Some(&storage)));

        storage.set_string(DARK_MODE_KEY, "false".to_string());
        assert!(!ThemeCoordinator::load_dark_mode_from_storage(Some(&storage)));

        assert!(!ThemeCoordinator::load_dark_mode_from_storage(None));
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let mut storage = MemoryStorage::new();
        let mut state = AppState::new();

        let enabled = ThemeCoordinator::toggle(&mut state, Some(&mut storage));
        assert!(enabled);
        assert!(state.theme.dark_mode());
        assert!(ThemeCoordinator::load_dark_mode_from_storage(Some(&storage)));
    }

    #[test]
    fn test_double_toggle_restores_starting_state() {
        for start in [false, true] {
            let mut storage = MemoryStorage::new();
            let mut state = AppState::with_preferences(start, 16.0, 720.0);
            ThemeCoordinator::save_dark_mode_to_storage(&mut storage, start);

            ThemeCoordinator::toggle(&mut state, Some(&mut storage));
            ThemeCoordinator::toggle(&mut state, Some(&mut storage));

            assert_eq!(state.theme.dark_mode(), start);
            assert_eq!(
                ThemeCoordinator::load_dark_mode_from_storage(Some(&storage)),
                start
            );
        }
    }

    #[test]
    fn test_toggle_without_storage_still_flips() {
        let mut state = AppState::new();
        ThemeCoordinator::toggle(&mut state, None);
        assert!(state.theme.dark_mode());
    }
}
