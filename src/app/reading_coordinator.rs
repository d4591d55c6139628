//! Reading position coordination.
//!
//! Wires the position tracker and visibility observer to the loaded novel:
//! creates them when a novel finishes loading, resolves the persisted
//! position into a one-shot restore scroll, and routes visibility events
//! from the reader panel into storage writes.

use rnovel::{PositionTracker, VisibilityEvent};

use crate::app::AppState;

/// Coordinates position tracking for the loaded novel.
pub struct ReadingCoordinator;

impl ReadingCoordinator {
    /// Initializes tracking for a freshly loaded novel.
    ///
    /// Creates the tracker from the novel's identity, registers observation
    /// over all chapters, and resolves the persisted position once. A
    /// missing or stale persisted position simply means no restore scroll.
    pub fn begin_novel(state: &mut AppState, storage: Option<&dyn eframe::Storage>) {
        let AppState { novel, reading, error_message, .. } = state;
        let Some(novel) = novel.novel() else {
            return;
        };

        let chapter_count = novel.chapters().len();
        match PositionTracker::new(novel.name()) {
            Ok(tracker) => {
                let restored = tracker.restore(storage, novel);
                reading.begin(Some(tracker), chapter_count, restored);
            }
            Err(e) => {
                // The novel still renders; only position tracking is lost.
                *error_message = Some(format!("Cannot track reading position: {}", e));
                reading.begin(None, chapter_count, None);
            }
        }
    }

    /// Applies a batch of visibility transitions from the reader panel.
    ///
    /// Entered chapters update the current-chapter display and, when storage
    /// is available, persist their title via the tracker. Events are applied
    /// in order, so the last entered chapter wins.
    pub fn handle_visibility_events(
        state: &mut AppState,
        mut storage: Option<&mut (dyn eframe::Storage + 'static)>,
        events: &[VisibilityEvent],
    ) {
        let AppState { novel, reading, .. } = state;
        let Some(novel) = novel.novel() else {
            return;
        };

        for event in events {
            if event.entered && event.chapter < novel.chapters().len() {
                reading.set_current_chapter(Some(event.chapter));
            }
            if let (Some(tracker), Some(storage)) = (reading.tracker(), storage.as_deref_mut()) {
                tracker.handle_visibility(storage, novel, *event);
            }
        }
    }

    /// Requests a scroll to the given chapter (from the chapter list).
    pub fn jump_to_chapter(state: &mut AppState, chapter: usize) {
        if chapter < state.novel.chapter_count() {
            state.reading.set_pending_scroll(Some(chapter));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rnovel::{Chapter, MemoryStorage, Novel};

    fn app_with_novel(titles: &[&str]) -> AppState {
        let mut novel = Novel::new("novel-42", "1.0", serde_json::json!({}));
        for title in titles {
            novel.push_chapter(Chapter::new(*title));
        }
        let mut state = AppState::new();
        state.novel.load_novel(novel, None);
        state
    }

    #[test]
    fn test_begin_novel_restores_persisted_position() {
        let mut storage = MemoryStorage::new();
        let mut state = app_with_novel(&["Ch1", "Ch2", "Ch3"]);

        // Previous session ended on Ch2.
        {
            let tracker = PositionTracker::new("novel-42").unwrap();
            tracker.record_position(&mut storage, "Ch2");
        }

        ReadingCoordinator::begin_novel(&mut state, Some(&storage));
        assert_eq!(state.reading.pending_scroll(), Some(1));
        assert_eq!(state.reading.current_chapter(), Some(1));
    }

    #[test]
    fn test_begin_novel_without_persisted_position() {
        let mut state = app_with_novel(&["Ch1"]);
        ReadingCoordinator::begin_novel(&mut state, None);
        assert_eq!(state.reading.pending_scroll(), None);
        assert!(state.reading.tracker().is_some());
    }

    #[test]
    fn test_visibility_events_persist_last_entered() {
        let mut storage = MemoryStorage::new();
        let mut state = app_with_novel(&["A", "B", "C"]);
        ReadingCoordinator::begin_novel(&mut state, Some(&storage));

        let events = [
            VisibilityEvent { chapter: 0, entered: true },
            VisibilityEvent { chapter: 1, entered: true },
            VisibilityEvent { chapter: 0, entered: false },
            VisibilityEvent { chapter: 2, entered: true },
        ];
        ReadingCoordinator::handle_visibility_events(&mut state, Some(&mut storage), &events);

        assert_eq!(state.reading.current_chapter(), Some(2));
        let tracker = state.reading.tracker().unwrap();
        assert_eq!(tracker.stored_position(Some(&storage)).as_deref(), Some("C"));
    }

    #[test]
    fn test_jump_to_chapter_bounds_checked() {
        let mut state = app_with_novel(&["A", "B"]);
        ReadingCoordinator::jump_to_chapter(&mut state, 1);
        assert_eq!(state.reading.pending_scroll(), Some(1));
        ReadingCoordinator::jump_to_chapter(&mut state, 5);
        assert_eq!(state.reading.pending_scroll(), Some(1));
    }
}
