//! Application-level coordination and workflow management.
//!
//! Handles the novel loading workflows and routes completed loads into the
//! reading coordinator.

use eframe::egui;
use std::path::PathBuf;

use crate::app::{AppState, ReadingCoordinator};
use crate::io::{AsyncLoader, LoadResult};

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous novel file loading.
    ///
    /// Immediately clears the previous novel to show the loading indicator.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_novel_state();
        loader.start_file_load(path, ctx);
    }

    /// Generates and loads the built-in sample novel.
    pub fn open_sample(
        state: &mut AppState,
        loader: &AsyncLoader,
        storage: Option<&dyn eframe::Storage>,
    ) {
        state.reset_novel_state();
        let novel = loader.load_sample_novel();
        state.novel.load_novel(novel, None);
        ReadingCoordinator::begin_novel(state, storage);
    }

    /// Exports the loaded novel as a standalone HTML file.
    pub fn export_html(state: &mut AppState, path: PathBuf) {
        let Some(novel) = state.novel.novel() else {
            return;
        };
        match rnovel::export_html(novel, &path) {
            Ok(()) => state.error_message = None,
            Err(e) => {
                state.error_message = Some(format!("Error exporting novel: {:#}", e));
            }
        }
    }

    /// Checks for loading completion and applies the result.
    ///
    /// Called once per frame in the update loop. Returns true if a load
    /// operation completed (success or error).
    pub fn check_loading_completion(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        storage: Option<&dyn eframe::Storage>,
    ) -> bool {
        match loader.check_completion() {
            LoadResult::Success { novel, path } => {
                state.novel.load_novel(novel, path);
                state.error_message = None;
                ReadingCoordinator::begin_novel(state, storage);
                true
            }
            LoadResult::Error(message) => {
                state.error_message = Some(format!("Error loading novel: {}", message));
                state.novel.clear();
                state.reading.clear();
                true
            }
            LoadResult::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rnovel::{Chapter, Novel};

    #[test]
    fn test_export_html_writes_loaded_novel() {
        let path = std::env::temp_dir().join("test_export_coordinator.html");
        let _ = std::fs::remove_file(&path);

        let mut novel = Novel::new("novel-42", "1.0", serde_json::json!({}));
        let mut chapter = Chapter::new("Ch1");
        chapter.push_paragraph("Some text.");
        novel.push_chapter(chapter);

        let mut state = AppState::new();
        state.novel.load_novel(novel, None);

        ApplicationCoordinator::export_html(&mut state, path.clone());
        assert!(state.error_message.is_none());

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("data-novel-name=\"novel-42\""));
        assert!(html.contains("data-chapter-title=\"Ch1\""));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_export_html_without_novel_is_noop() {
        let path = std::env::temp_dir().join("test_export_no_novel.html");
        let _ = std::fs::remove_file(&path);

        let mut state = AppState::new();
        ApplicationCoordinator::export_html(&mut state, path.clone());

        assert!(state.error_message.is_none());
        assert!(!path.exists());
    }
}
