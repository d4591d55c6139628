//! Reading position state management.
//!
//! Holds the per-novel position tracker, the visibility observer that drives
//! it, and the one-shot scroll request used both for restore-on-load and for
//! chapter-list jumps.

use rnovel::{ChapterObserver, PositionTracker};

/// State related to the reading position within the loaded novel.
pub struct ReadingState {
    /// Tracker for the loaded novel (None when no novel is loaded or its
    /// identity was unusable)
    tracker: Option<PositionTracker>,
    /// Visibility observer over the loaded chapters
    observer: ChapterObserver,
    /// Index of the chapter most recently seen entering the viewport
    current_chapter: Option<usize>,
    /// One-shot scroll target, consumed by the reader panel on the next
    /// frame where chapter geometry exists
    pending_scroll: Option<usize>,
}

impl Default for ReadingState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingState {
    pub fn new() -> Self {
        Self {
            tracker: None,
            observer: ChapterObserver::observe(0),
            current_chapter: None,
            pending_scroll: None,
        }
    }

    /// Resets reading state for a freshly loaded novel.
    ///
    /// `restored` is the chapter index resolved from persisted storage; when
    /// present it becomes both the current chapter and the one-shot scroll
    /// target.
    pub fn begin(&mut self, tracker: Option<PositionTracker>, chapter_count: usize, restored: Option<usize>) {
        self.tracker = tracker;
        self.observer = ChapterObserver::observe(chapter_count);
        self.current_chapter = restored;
        self.pending_scroll = restored;
    }

    pub fn clear(&mut self) {
        self.tracker = None;
        self.observer = ChapterObserver::observe(0);
        self.current_chapter = None;
        self.pending_scroll = None;
    }

    // ===== Queries =====

    pub fn tracker(&self) -> Option<&PositionTracker> {
        self.tracker.as_ref()
    }

    pub fn observer_mut(&mut self) -> &mut ChapterObserver {
        &mut self.observer
    }

    pub fn current_chapter(&self) -> Option<usize> {
        self.current_chapter
    }

    pub fn pending_scroll(&self) -> Option<usize> {
        self.pending_scroll
    }

    // ===== Mutations =====

    pub fn set_current_chapter(&mut self, chapter: Option<usize>) {
        self.current_chapter = chapter;
    }

    pub fn set_pending_scroll(&mut self, chapter: Option<usize>) {
        self.pending_scroll = chapter;
    }

    /// Consumes the one-shot scroll target.
    pub fn take_pending_scroll(&mut self) -> Option<usize> {
        self.pending_scroll.take()
    }
}
