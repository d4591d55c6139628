//! Application-level modules for the novel reader GUI.
//!
//! This module contains the centralized application state and the
//! coordinators that manage loading, theming, reading position, and
//! settings persistence.

mod app_state;
mod application_coordinator;
mod reading_coordinator;
mod settings_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use reading_coordinator::ReadingCoordinator;
pub use settings_coordinator::SettingsCoordinator;
pub use theme_coordinator::ThemeCoordinator;
