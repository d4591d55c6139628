//! UI panel modules for the novel reader GUI.

pub mod chapters_panel;
pub mod header;
pub mod panel_manager;
pub mod reader_panel;
pub mod status_bar;
