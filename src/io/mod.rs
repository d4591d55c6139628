//! File loading modules for the novel reader GUI.

mod async_loader;
mod file_loader;

pub use async_loader::{AsyncLoader, LoadResult};
pub use file_loader::LoadingState;
