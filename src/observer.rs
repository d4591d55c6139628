//! Chapter visibility observation.
//!
//! `ChapterObserver` turns per-frame geometry (the reading viewport and each
//! chapter's rectangle) into intersection-state *transitions*, so that
//! consumers see one event when a chapter enters the viewport and one when it
//! leaves, never a stream of "still visible" notifications. Intersection uses
//! the viewport as-is, with no pre/post expansion margin: a chapter is
//! reported only while genuinely on screen.
//!
//! The observer is driven explicitly (no ambient callbacks), which lets unit
//! tests fire synthetic geometry without a rendering backend. Events for one
//! chapter are causally ordered; no ordering is guaranteed across chapters
//! beyond ascending chapter index within a single `process` call.

use egui::Rect;

/// A single intersection-state transition for one observed chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityEvent {
    /// Index of the chapter in the observed set.
    pub chapter: usize,
    /// True when the chapter entered the viewport, false when it left.
    pub entered: bool,
}

/// Tracks which observed chapters currently intersect the viewport.
#[derive(Debug, Clone)]
pub struct ChapterObserver {
    visible: Vec<bool>,
}

impl ChapterObserver {
    /// Begins observing `chapter_count` chapters, all initially off-screen.
    ///
    /// An empty set is valid and simply never produces events.
    pub fn observe(chapter_count: usize) -> Self {
        Self {
            visible: vec![false; chapter_count],
        }
    }

    pub fn chapter_count(&self) -> usize {
        self.visible.len()
    }

    pub fn is_visible(&self, chapter: usize) -> bool {
        self.visible.get(chapter).copied().unwrap_or(false)
    }

    /// Compares each chapter rectangle against the viewport and returns the
    /// transitions since the previous call, in ascending chapter order.
    ///
    /// Extra rectangles beyond the observed set are ignored; chapters with no
    /// rectangle this frame keep their previous state.
    pub fn process(&mut self, viewport: Rect, chapter_rects: &[Rect]) -> Vec<VisibilityEvent> {
        let mut events = Vec::new();

        for (chapter, rect) in chapter_rects.iter().enumerate().take(self.visible.len()) {
            let intersecting = viewport.intersects(*rect);
            if intersecting != self.visible[chapter] {
                self.visible[chapter] = intersecting;
                events.push(VisibilityEvent {
                    chapter,
                    entered: intersecting,
                });
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f32, bottom: f32) -> Rect {
        Rect::from_min_max(egui::pos2(0.0, top), egui::pos2(100.0, bottom))
    }

    #[test]
    fn test_enter_emits_single_event() {
        let mut observer = ChapterObserver::observe(1);
        let viewport = rect(0.0, 100.0);

        let events = observer.process(viewport, &[rect(50.0, 150.0)]);
        assert_eq!(events, vec![VisibilityEvent { chapter: 0, entered: true }]);

        // Still intersecting: no further events.
        let events = observer.process(viewport, &[rect(60.0, 160.0)]);
        assert!(events.is_empty());
        assert!(observer.is_visible(0));
    }

    #[test]
    fn test_leave_emits_event() {
        let mut observer = ChapterObserver::observe(1);
        let viewport = rect(0.0, 100.0);

        observer.process(viewport, &[rect(50.0, 150.0)]);
        let events = observer.process(viewport, &[rect(200.0, 300.0)]);
        assert_eq!(events, vec![VisibilityEvent { chapter: 0, entered: false }]);
        assert!(!observer.is_visible(0));
    }

    #[test]
    fn test_off_screen_chapter_emits_nothing() {
        let mut observer = ChapterObserver::observe(1);
        let events = observer.process(rect(0.0, 100.0), &[rect(200.0, 300.0)]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_multiple_chapters_in_index_order() {
        let mut observer = ChapterObserver::observe(3);
        let viewport = rect(0.0, 100.0);

        // Chapters 0 and 1 visible, chapter 2 below the fold.
        let rects = [rect(0.0, 40.0), rect(40.0, 120.0), rect(120.0, 400.0)];
        let events = observer.process(viewport, &rects);
        assert_eq!(
            events,
            vec![
                VisibilityEvent { chapter: 0, entered: true },
                VisibilityEvent { chapter: 1, entered: true },
            ]
        );

        // Scroll down: chapter 0 leaves, chapter 2 enters.
        let rects = [rect(-200.0, -100.0), rect(-100.0, 20.0), rect(20.0, 300.0)];
        let events = observer.process(viewport, &rects);
        assert_eq!(
            events,
            vec![
                VisibilityEvent { chapter: 0, entered: false },
                VisibilityEvent { chapter: 2, entered: true },
            ]
        );
    }

    #[test]
    fn test_extra_rects_ignored() {
        let mut observer = ChapterObserver::observe(1);
        let viewport = rect(0.0, 100.0);
        let events = observer.process(viewport, &[rect(0.0, 50.0), rect(0.0, 50.0)]);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_empty_set_is_valid() {
        let mut observer = ChapterObserver::observe(0);
        assert_eq!(observer.chapter_count(), 0);
        assert!(observer.process(rect(0.0, 100.0), &[]).is_empty());
    }
}
