//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying novel metadata and the current
//! reading position.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, loading: bool) {
    ui.horizontal(|ui| {
        if loading {
            ui.spinner();
            ui.label("Loading…");
            return;
        }

        let Some(novel) = state.novel.novel() else {
            ui.label(RichText::new("No novel loaded").weak());
            return;
        };

        let source = state
            .novel
            .file_path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "generated sample".to_string());

        ui.label(RichText::new(format!(
            "{} | {} | {} chapters | {} words",
            novel.name(),
            source,
            novel.chapters().len(),
            novel.total_words()
        )).strong());

        // Current reading position on the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(index) = state.reading.current_chapter() {
                if let Some(chapter) = novel.chapters().get(index) {
                    ui.label(RichText::new(format!("Reading: {}", chapter.title())).strong());
                }
            }
        });
    });
}
