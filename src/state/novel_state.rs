//! Loaded novel state management.

use rnovel::Novel;
use std::path::PathBuf;

/// State related to the currently loaded novel document.
#[derive(Debug, Default)]
pub struct NovelState {
    /// Loaded novel, if any
    novel: Option<Novel>,
    /// Path of the loaded file (None for generated sample novels)
    file_path: Option<PathBuf>,
}

impl NovelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn novel(&self) -> Option<&Novel> {
        self.novel.as_ref()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    pub fn chapter_count(&self) -> usize {
        self.novel.as_ref().map_or(0, |n| n.chapters().len())
    }

    pub fn load_novel(&mut self, novel: Novel, path: Option<PathBuf>) {
        self.novel = Some(novel);
        self.file_path = path;
    }

    pub fn clear(&mut self) {
        self.novel = None;
        self.file_path = None;
    }
}
