//! Chapters panel UI rendering
//!
//! Side panel listing all chapter titles with the current reading position
//! highlighted. Clicking a title jumps the reader to that chapter.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;

/// Result of user interaction with the chapters panel
pub enum ChaptersInteraction {
    /// A chapter title was clicked
    ChapterClicked(usize),
}

/// Renders the chapter list for the loaded novel.
pub fn render_chapters_panel(ui: &mut egui::Ui, state: &AppState) -> Option<ChaptersInteraction> {
    let novel = state.novel.novel()?;
    let mut interaction = None;

    egui::ScrollArea::vertical()
        .id_salt("chapters_scroll")
        .auto_shrink(false)
        .show(ui, |ui| {
            for (index, chapter) in novel.chapters().iter().enumerate() {
                let selected = state.reading.current_chapter() == Some(index);
                let response = ui.selectable_label(selected, chapter.title());
                if response.clicked() {
                    interaction = Some(ChaptersInteraction::ChapterClicked(index));
                }
                ui.label(
                    RichText::new(format!("{} words", chapter.word_count()))
                        .small()
                        .weak(),
                );
                ui.add_space(4.0);
            }
        });

    interaction
}
