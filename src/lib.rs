pub mod document;
pub mod export;
pub mod parser;
pub mod writer;
pub mod sample;
pub mod observer;
pub mod tracker;
pub mod theme;
pub mod storage;

// Export document model
pub use document::{Chapter, Novel};

// Export novel file format support
pub use parser::{parse_novel, NovelReader};
pub use writer::NovelWriter;

// Export HTML rendering
pub use export::{export_html, novel_to_html};

// Export sample generation
pub use sample::SampleNovel;

// Export position tracking
pub use observer::{ChapterObserver, VisibilityEvent};
pub use tracker::PositionTracker;

// Export theme support
pub use theme::{dark_theme, hex_to_color32, light_theme, theme_for, Theme, ThemeColors};

// Export in-memory storage backend
pub use storage::MemoryStorage;
