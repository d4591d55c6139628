//! Centralized application state for the novel reader.
//!
//! Composes focused state components that each manage one aspect of the
//! application. Keeping the components independent allows borrow-checker
//! friendly access to different state aspects from the UI code.

use crate::state::{LayoutState, NovelState, ReadingState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded novel and file path
    pub novel: NovelState,

    /// Position tracker, observer, current chapter, pending scroll
    pub reading: ReadingState,

    /// Dark-mode flag
    pub theme: ThemeState,

    /// Reader presentation settings
    pub layout: LayoutState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            novel: NovelState::new(),
            reading: ReadingState::new(),
            theme: ThemeState::new(),
            layout: LayoutState::new(),
            error_message: None,
        }
    }

    /// Creates a new AppState with preferences loaded from storage.
    pub fn with_preferences(dark_mode: bool, font_size: f32, page_width: f32) -> Self {
        Self {
            novel: NovelState::new(),
            reading: ReadingState::new(),
            theme: ThemeState::with_dark_mode(dark_mode),
            layout: LayoutState::with_settings(font_size, page_width),
            error_message: None,
        }
    }

    /// Resets novel-related state when loading a new novel.
    pub fn reset_novel_state(&mut self) {
        self.novel.clear();
        self.reading.clear();
        self.error_message = None;
    }
}
