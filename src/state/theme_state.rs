//! Theme state management.

/// State for the persisted dark-mode preference.
///
/// Two states, light and dark; the initial state comes from persistent
/// storage at startup and transitions happen only via `toggle`.
#[derive(Debug, Default)]
pub struct ThemeState {
    dark_mode: bool,
}

impl ThemeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flips the mode and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}
