//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, chapters, reader, status) and maps
//! their interactions into a single result type for the application
//! coordinator.

use eframe::egui;
use rnovel::VisibilityEvent;

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{chapters_panel, header, reader_panel, status_bar};

/// Result of panel interactions that need to be handled by the application
/// coordinator.
pub enum PanelInteraction {
    /// User requested to open a novel file
    OpenFileRequested(std::path::PathBuf),
    /// User requested the built-in sample novel
    OpenSampleRequested,
    /// User requested an HTML export of the loaded novel
    ExportHtmlRequested(std::path::PathBuf),
    /// User activated the dark-mode toggle
    ThemeToggled,
    /// A chapter in the chapter list was clicked
    ChapterClicked(usize),
    /// Chapters entered or left the reading viewport
    VisibilityChanged(Vec<VisibilityEvent>),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation. Several interactions can
    /// occur in one frame (e.g. a click and a batch of visibility events),
    /// so they are collected rather than reduced to one.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();
        let loading = loader.is_loading();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interactions.push(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenSampleRequested => {
                        PanelInteraction::OpenSampleRequested
                    }
                    header::HeaderInteraction::ExportHtmlRequested(path) => {
                        PanelInteraction::ExportHtmlRequested(path)
                    }
                    header::HeaderInteraction::ThemeToggled => PanelInteraction::ThemeToggled,
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, loading);
        });

        // Left panel: chapter list, only when a novel is loaded
        if state.novel.novel().is_some() {
            let chapters_frame = egui::Frame::default()
                .inner_margin(egui::Margin::same(4))
                .fill(ctx.style().visuals.panel_fill);

            egui::SidePanel::left("chapters_panel")
                .default_width(240.0)
                .resizable(true)
                .frame(chapters_frame)
                .show(ctx, |ui| {
                    ui.heading("Chapters");
                    ui.separator();

                    if let Some(chapters_panel::ChaptersInteraction::ChapterClicked(index)) =
                        chapters_panel::render_chapters_panel(ui, state)
                    {
                        interactions.push(PanelInteraction::ChapterClicked(index));
                    }
                });
        }

        // Central panel: the reading page
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(reader_panel::ReaderInteraction::VisibilityChanged(events)) =
                reader_panel::render_reader_panel(ui, state, loading)
            {
                interactions.push(PanelInteraction::VisibilityChanged(events));
            }
        });

        interactions
    }
}
