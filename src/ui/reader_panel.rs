//! Reader panel UI rendering
//!
//! Renders the whole novel as one vertically scrollable page of chapters and
//! drives the visibility observer from the resulting geometry. Also executes
//! pending one-shot scrolls: the restore-on-load jump and chapter-list jumps.

use eframe::egui;
use egui::RichText;
use rnovel::VisibilityEvent;

use crate::app::AppState;

/// Result of user-visible changes in the reader panel
pub enum ReaderInteraction {
    /// Chapters entered or left the reading viewport
    VisibilityChanged(Vec<VisibilityEvent>),
}

/// Renders the scrollable reading page.
pub fn render_reader_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    loading: bool,
) -> Option<ReaderInteraction> {
    let AppState { novel, reading, theme, layout, .. } = state;

    let Some(novel) = novel.novel() else {
        ui.centered_and_justified(|ui| {
            if loading {
                ui.spinner();
            } else {
                ui.label(RichText::new("Open a novel file to start reading.").size(16.0).weak());
            }
        });
        return None;
    };

    let font_size = layout.font_size();
    let page_width = layout.page_width();
    let colors = rnovel::theme_for(theme.dark_mode()).colors;

    let mut chapter_rects: Vec<egui::Rect> = Vec::with_capacity(novel.chapters().len());
    let mut jump_executed = false;

    let output = egui::ScrollArea::vertical()
        .id_salt("reader_scroll")
        .auto_shrink(false)
        .show(ui, |ui| {
            let indent = ((ui.available_width() - page_width) * 0.5).max(0.0);

            for chapter in novel.chapters() {
                let rect = ui
                    .horizontal(|ui| {
                        ui.add_space(indent);
                        ui.vertical(|ui| {
                            ui.set_max_width(page_width);
                            ui.add_space(28.0);
                            ui.label(
                                RichText::new(chapter.title())
                                    .size(font_size * 1.4)
                                    .color(colors.heading)
                                    .strong(),
                            );
                            ui.add_space(10.0);
                            for paragraph in chapter.paragraphs() {
                                ui.add(egui::Label::new(RichText::new(paragraph).size(font_size)).wrap());
                                ui.add_space(8.0);
                            }
                        })
                        .response
                        .rect
                    })
                    .inner;
                chapter_rects.push(rect);
            }
            ui.add_space(48.0);

            // One-shot jump (restore-on-load or chapter-list click). The
            // scroll takes effect next frame, so visibility is evaluated
            // against settled geometry, never the pre-jump layout.
            if let Some(target) = reading.take_pending_scroll() {
                if let Some(rect) = chapter_rects.get(target) {
                    ui.scroll_to_rect(*rect, Some(egui::Align::TOP));
                    jump_executed = true;
                }
            }
        });

    if jump_executed {
        return None;
    }

    let events = reading.observer_mut().process(output.inner_rect, &chapter_rects);
    if events.is_empty() {
        None
    } else {
        Some(ReaderInteraction::VisibilityChanged(events))
    }
}
