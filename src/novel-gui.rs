//! Novel Reader GUI Application
//!
//! An interactive reader for serialized novels using the egui framework.
//! The reader presents the whole novel as one scrollable page of chapters
//! and remembers, per novel, which chapter was last on screen so the next
//! visit resumes there. Features:
//! - Restore-on-load jump to the last-viewed chapter
//! - Persistent light/dark theme preference
//! - Chapter list with click-to-jump
//! - Asynchronous file loading with loading indicators
//! - Standalone HTML export of the loaded novel
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - Background novel file loading
//! - `state/` - State components (novel, reading position, theme, layout)
//! - `ui/` - UI panel rendering and interaction

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod app;
mod io;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, ReadingCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use state::LayoutState;
use ui::panel_manager::{PanelInteraction, PanelManager};

const FONT_SIZE_KEY: &str = "font_size";
const PAGE_WIDTH_KEY: &str = "page_width";

/// Main application entry point that initializes and launches the reader GUI.
fn main() -> eframe::Result {
    // Parse command-line arguments to check for an initial novel to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Novel Reader"),
        ..Default::default()
    };

    eframe::run_native(
        "Novel Reader",
        options,
        Box::new(move |cc| Ok(Box::new(NovelReaderApp::new(cc, initial_file)))),
    )
}

/// The main Novel Reader application.
///
/// Most functionality is delegated to coordinators:
/// - `ApplicationCoordinator` handles file loading and error handling
/// - `ReadingCoordinator` wires position tracking to the loaded novel
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct NovelReaderApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous file loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl NovelReaderApp {
    /// Creates a new reader instance with preferences loaded from persistent
    /// storage. The theme flag is applied before the first frame renders, so
    /// there is no flash of the wrong theme.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let dark_mode = ThemeCoordinator::load_dark_mode_from_storage(cc.storage);
        let font_size: f32 = SettingsCoordinator::load_setting_or(
            cc.storage,
            FONT_SIZE_KEY,
            LayoutState::DEFAULT_FONT_SIZE,
        );
        let page_width: f32 = SettingsCoordinator::load_setting_or(
            cc.storage,
            PAGE_WIDTH_KEY,
            LayoutState::DEFAULT_PAGE_WIDTH,
        );

        Self {
            state: AppState::with_preferences(dark_mode, font_size, page_width),
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to the coordinators.
    fn handle_panel_interaction(
        &mut self,
        interaction: PanelInteraction,
        ctx: &egui::Context,
        frame: &mut eframe::Frame,
    ) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenSampleRequested => {
                ApplicationCoordinator::open_sample(&mut self.state, &self.loader, frame.storage());
            }
            PanelInteraction::ExportHtmlRequested(path) => {
                ApplicationCoordinator::export_html(&mut self.state, path);
            }
            PanelInteraction::ThemeToggled => {
                ThemeCoordinator::toggle(&mut self.state, frame.storage_mut());
            }
            PanelInteraction::ChapterClicked(index) => {
                ReadingCoordinator::jump_to_chapter(&mut self.state, index);
            }
            PanelInteraction::VisibilityChanged(events) => {
                ReadingCoordinator::handle_visibility_events(
                    &mut self.state,
                    frame.storage_mut(),
                    &events,
                );
            }
        }
    }
}

impl eframe::App for NovelReaderApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_dark_mode_to_storage(storage, self.state.theme.dark_mode());
        SettingsCoordinator::save_setting(storage, FONT_SIZE_KEY, &self.state.layout.font_size());
        SettingsCoordinator::save_setting(storage, PAGE_WIDTH_KEY, &self.state.layout.page_width());
    }

    /// Main update loop.
    ///
    /// 1. Check for async loading completion (runs the restore once per load)
    /// 2. Apply the current theme
    /// 3. Load the initial file if specified via command line
    /// 4. Render all panels and handle their interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(
            &mut self.state,
            &mut self.loader,
            frame.storage(),
        );

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        let interactions = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader);
        for interaction in interactions {
            self.handle_panel_interaction(interaction, ctx, frame);
        }
    }
}
