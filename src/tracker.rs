//! Reading position tracking and restoration.
//!
//! As the reader scrolls, the tracker persists the title of whichever chapter
//! most recently became visible, keyed by novel name so that positions for
//! different novels never collide. On the next visit, `restore` looks up the
//! persisted title among the currently loaded chapters and reports where to
//! scroll back to.
//!
//! The tracker is a side-effect pipeline: visibility event in, storage write
//! out. Multiple chapters can become visible during one scroll gesture; the
//! last processed event wins, which is acceptable because the goal is
//! return-to-last-area, not chapter-boundary precision.

use anyhow::{bail, Result};

use crate::document::Novel;
use crate::observer::VisibilityEvent;

/// Prefix that namespaces per-novel position keys away from other
/// preferences sharing the same storage (e.g. the theme flag).
const POSITION_KEY_PREFIX: &str = "reading_position/";

/// Persists and restores the last-viewed chapter for one novel.
pub struct PositionTracker {
    novel_key: String,
}

impl PositionTracker {
    /// Creates a tracker for the given novel identity.
    ///
    /// The key must be non-empty; it is the only namespace separating this
    /// novel's position from every other novel's.
    pub fn new(novel_key: &str) -> Result<Self> {
        if novel_key.is_empty() {
            bail!("Novel key must not be empty");
        }
        Ok(Self {
            novel_key: novel_key.to_string(),
        })
    }

    pub fn novel_key(&self) -> &str {
        &self.novel_key
    }

    fn storage_key(&self) -> String {
        format!("{}{}", POSITION_KEY_PREFIX, self.novel_key)
    }

    /// Persists `chapter_title` as the current reading position,
    /// overwriting any prior value.
    pub fn record_position(&self, storage: &mut dyn eframe::Storage, chapter_title: &str) {
        storage.set_string(&self.storage_key(), chapter_title.to_string());
    }

    /// Reacts to one visibility transition.
    ///
    /// "Entered" events persist the chapter's title; "left" events do
    /// nothing, so the stored position is never cleared by scrolling away.
    pub fn handle_visibility(
        &self,
        storage: &mut dyn eframe::Storage,
        novel: &Novel,
        event: VisibilityEvent,
    ) {
        if !event.entered {
            return;
        }
        if let Some(chapter) = novel.chapters().get(event.chapter) {
            self.record_position(storage, chapter.title());
        }
    }

    /// Returns the persisted chapter title, if any.
    pub fn stored_position(&self, storage: Option<&dyn eframe::Storage>) -> Option<String> {
        storage?.get_string(&self.storage_key())
    }

    /// Resolves the persisted position against the loaded novel.
    ///
    /// Returns the index of the chapter whose title matches the stored value
    /// exactly, or None when nothing is persisted or the title no longer
    /// matches any chapter (the novel's content changed since the last
    /// visit). Both are normal outcomes; the caller simply skips the restore
    /// scroll. Intended to run once per loaded novel, not per event.
    pub fn restore(&self, storage: Option<&dyn eframe::Storage>, novel: &Novel) -> Option<usize> {
        let stored = self.stored_position(storage)?;
        novel.chapter_index(&stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Chapter;
    use crate::storage::MemoryStorage;

    fn novel_with_titles(name: &str, titles: &[&str]) -> Novel {
        let mut novel = Novel::new(name, "1.0", serde_json::json!({}));
        for title in titles {
            novel.push_chapter(Chapter::new(*title));
        }
        novel
    }

    fn entered(chapter: usize) -> VisibilityEvent {
        VisibilityEvent { chapter, entered: true }
    }

    fn left(chapter: usize) -> VisibilityEvent {
        VisibilityEvent { chapter, entered: false }
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(PositionTracker::new("").is_err());
        assert!(PositionTracker::new("novel-42").is_ok());
    }

    #[test]
    fn test_restore_round_trip() {
        let mut storage = MemoryStorage::new();
        let novel = novel_with_titles("novel-42", &["Ch1", "Ch2", "Ch3"]);
        let tracker = PositionTracker::new(novel.name()).unwrap();

        tracker.handle_visibility(&mut storage, &novel, entered(1));

        // Simulate a fresh visit with the same chapter set.
        let tracker = PositionTracker::new("novel-42").unwrap();
        assert_eq!(tracker.restore(Some(&storage), &novel), Some(1));
    }

    #[test]
    fn test_stale_position_is_noop() {
        let mut storage = MemoryStorage::new();
        let old = novel_with_titles("novel-42", &["Ch1", "Ch2", "Ch3"]);
        let tracker = PositionTracker::new("novel-42").unwrap();
        tracker.handle_visibility(&mut storage, &old, entered(1));

        // Content changed between visits: "Ch2" no longer exists.
        let revised = novel_with_titles("novel-42", &["Ch1", "Ch2-revised", "Ch3"]);
        assert_eq!(tracker.restore(Some(&storage), &revised), None);
    }

    #[test]
    fn test_no_stored_position_is_noop() {
        let storage = MemoryStorage::new();
        let novel = novel_with_titles("novel-42", &["Ch1"]);
        let tracker = PositionTracker::new("novel-42").unwrap();
        assert_eq!(tracker.restore(Some(&storage), &novel), None);
        assert_eq!(tracker.restore(None, &novel), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut storage = MemoryStorage::new();
        let novel = novel_with_titles("novel-42", &["A", "B", "C"]);
        let tracker = PositionTracker::new("novel-42").unwrap();

        // A enters, B enters, A leaves, C enters.
        tracker.handle_visibility(&mut storage, &novel, entered(0));
        tracker.handle_visibility(&mut storage, &novel, entered(1));
        tracker.handle_visibility(&mut storage, &novel, left(0));
        tracker.handle_visibility(&mut storage, &novel, entered(2));

        assert_eq!(tracker.stored_position(Some(&storage)).as_deref(), Some("C"));
    }

    #[test]
    fn test_leave_does_not_clear_position() {
        let mut storage = MemoryStorage::new();
        let novel = novel_with_titles("novel-42", &["A", "B"]);
        let tracker = PositionTracker::new("novel-42").unwrap();

        tracker.handle_visibility(&mut storage, &novel, entered(1));
        tracker.handle_visibility(&mut storage, &novel, left(1));
        assert_eq!(tracker.stored_position(Some(&storage)).as_deref(), Some("B"));
    }

    #[test]
    fn test_positions_namespaced_per_novel() {
        let mut storage = MemoryStorage::new();
        let x = novel_with_titles("novel-x", &["X1", "X2"]);
        let y = novel_with_titles("novel-y", &["Y1", "Y2"]);
        let tracker_x = PositionTracker::new("novel-x").unwrap();
        let tracker_y = PositionTracker::new("novel-y").unwrap();

        tracker_x.handle_visibility(&mut storage, &x, entered(0));
        tracker_y.handle_visibility(&mut storage, &y, entered(1));

        assert_eq!(tracker_x.stored_position(Some(&storage)).as_deref(), Some("X1"));
        assert_eq!(tracker_y.stored_position(Some(&storage)).as_deref(), Some("Y2"));
    }

    #[test]
    fn test_event_for_unknown_chapter_ignored() {
        let mut storage = MemoryStorage::new();
        let novel = novel_with_titles("novel-42", &["A"]);
        let tracker = PositionTracker::new("novel-42").unwrap();

        tracker.handle_visibility(&mut storage, &novel, entered(5));
        assert_eq!(tracker.stored_position(Some(&storage)), None);
    }
}
