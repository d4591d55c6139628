//! Header panel UI rendering
//!
//! Handles the top bar with file controls, font size controls, and the
//! dark-mode toggle.

use eframe::egui;
use egui::Color32;
use std::path::PathBuf;

use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a novel file to open
    OpenFileRequested(PathBuf),
    /// User clicked the sample novel button
    OpenSampleRequested,
    /// User picked a destination for the HTML export
    ExportHtmlRequested(PathBuf),
    /// User activated the dark-mode toggle
    ThemeToggled,
}

/// Renders the application header with file controls and the theme toggle.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📖 Open Novel").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Novel Files", &["novel", "jsonl", "br"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("📜 Sample Novel").clicked() {
            interaction = Some(HeaderInteraction::OpenSampleRequested);
        }

        let loaded_novel = state.novel.novel();
        if ui
            .add_enabled(loaded_novel.is_some(), egui::Button::new("💾 Export HTML"))
            .clicked()
        {
            let mut dialog = rfd::FileDialog::new().add_filter("HTML Files", &["html"]);
            if let Some(novel) = loaded_novel {
                dialog = dialog.set_file_name(format!("{}.html", novel.name()));
            }
            if let Some(path) = dialog.save_file() {
                interaction = Some(HeaderInteraction::ExportHtmlRequested(path));
            }
        }

        ui.separator();

        if ui.button("A−").clicked() {
            state.layout.adjust_font_size(-1.0);
        }
        if ui.button("A+").clicked() {
            state.layout.adjust_font_size(1.0);
        }
        ui.label(format!("{}pt", state.layout.font_size()));

        // Push the theme toggle to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // The checkbox mirrors the persisted flag; the actual flip and
            // storage write happen in the ThemeCoordinator.
            let mut dark = state.theme.dark_mode();
            if ui.checkbox(&mut dark, "🌙 Dark mode").changed() {
                interaction = Some(HeaderInteraction::ThemeToggled);
            }
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
