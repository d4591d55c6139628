//! In-memory preference storage.
//!
//! Implements `eframe::Storage` over a plain map, for tests and headless
//! runs where no on-disk storage backend exists.

use std::collections::HashMap;

/// A volatile key-value string store with the same interface as eframe's
/// persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
    }

    fn flush(&mut self) {}
}
