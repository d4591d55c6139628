//! State management modules for the novel reader GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Novel state (loaded document, file path)
//! - Reading state (position tracker, observer, pending scroll)
//! - Theme state (dark-mode flag)
//! - Layout state (font size, page width)

mod layout_state;
mod novel_state;
mod reading_state;
mod theme_state;

pub use layout_state::LayoutState;
pub use novel_state::NovelState;
pub use reading_state::ReadingState;
pub use theme_state::ThemeState;
