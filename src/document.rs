//! In-memory novel document model.
//!
//! A novel is identified by its name (used to namespace the persisted reading
//! position) and holds an ordered list of chapters. Chapter titles are the
//! labels the position tracker persists and matches against on restore.

use once_cell::sync::OnceCell;

/// A single chapter: an immutable title plus its body paragraphs.
#[derive(Debug, Clone)]
pub struct Chapter {
    title: String,
    paragraphs: Vec<String>,
    // Computed on first access, after parsing has finished mutating the chapter.
    word_count: OnceCell<usize>,
}

impl Chapter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs: Vec::new(),
            word_count: OnceCell::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn push_paragraph(&mut self, text: impl Into<String>) {
        self.paragraphs.push(text.into());
    }

    /// Total whitespace-separated words across all paragraphs, cached lazily.
    pub fn word_count(&self) -> usize {
        *self.word_count.get_or_init(|| {
            self.paragraphs
                .iter()
                .map(|p| p.split_whitespace().count())
                .sum()
        })
    }
}

/// A complete novel document as loaded from a novel file.
#[derive(Debug, Clone)]
pub struct Novel {
    name: String,
    version: String,
    metadata: serde_json::Value,
    chapters: Vec<Chapter>,
}

impl Novel {
    pub fn new(name: impl Into<String>, version: impl Into<String>, metadata: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            metadata,
            chapters: Vec::new(),
        }
    }

    /// The novel's identity, used to namespace the persisted reading position.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn metadata(&self) -> &serde_json::Value {
        &self.metadata
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn push_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    pub fn chapter_mut(&mut self, index: usize) -> Option<&mut Chapter> {
        self.chapters.get_mut(index)
    }

    /// Index of the chapter whose title equals `title` exactly (case-sensitive).
    ///
    /// Returns None when no chapter matches; callers treat that as a normal
    /// outcome since the chapter set may have changed since the title was
    /// recorded.
    pub fn chapter_index(&self, title: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.title() == title)
    }

    pub fn total_paragraphs(&self) -> usize {
        self.chapters.iter().map(|c| c.paragraphs().len()).sum()
    }

    pub fn total_words(&self) -> usize {
        self.chapters.iter().map(|c| c.word_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_chapter_novel() -> Novel {
        let mut novel = Novel::new("test-novel", "1.0", serde_json::json!({}));
        let mut ch1 = Chapter::new("Chapter 1");
        ch1.push_paragraph("One two three.");
        ch1.push_paragraph("Four five.");
        let mut ch2 = Chapter::new("Chapter 2");
        ch2.push_paragraph("Six.");
        novel.push_chapter(ch1);
        novel.push_chapter(ch2);
        novel
    }

    #[test]
    fn test_chapter_index_exact_match() {
        let novel = two_chapter_novel();
        assert_eq!(novel.chapter_index("Chapter 2"), Some(1));
        assert_eq!(novel.chapter_index("chapter 2"), None); // case-sensitive
        assert_eq!(novel.chapter_index("Chapter 3"), None);
    }

    #[test]
    fn test_word_counts() {
        let novel = two_chapter_novel();
        assert_eq!(novel.chapters()[0].word_count(), 5);
        assert_eq!(novel.total_words(), 6);
        assert_eq!(novel.total_paragraphs(), 3);
    }
}
