//! Deterministic sample novel generation.
//!
//! Generates filler-text novels from a fixed word list and a seeded RNG,
//! for demos and tests. The same configuration always produces the same
//! novel.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::document::{Chapter, Novel};

const WORDS: &[&str] = &[
    "lantern", "river", "stone", "evening", "letter", "garden", "window", "storm",
    "harbor", "mountain", "silence", "shadow", "winter", "candle", "stranger", "road",
    "forest", "promise", "memory", "doorway", "sister", "captain", "village", "moon",
    "paper", "bridge", "answer", "journey", "secret", "morning", "thread", "voice",
    "market", "tower", "ember", "compass", "sparrow", "orchard", "cellar", "bell",
];

const DEFAULT_CHAPTERS: usize = 12;
const DEFAULT_PARAGRAPHS: usize = 8;
const DEFAULT_SEED: u64 = 42;

/// Configurable generator for sample novels.
pub struct SampleNovel {
    chapters: usize,
    paragraphs_per_chapter: usize,
    seed: u64,
}

impl SampleNovel {
    pub fn new() -> Self {
        Self {
            chapters: DEFAULT_CHAPTERS,
            paragraphs_per_chapter: DEFAULT_PARAGRAPHS,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_config(chapters: usize, paragraphs_per_chapter: usize, seed: u64) -> Self {
        Self {
            chapters,
            paragraphs_per_chapter,
            seed,
        }
    }

    pub fn generate(&self) -> Novel {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let metadata = serde_json::json!({
            "generator": "novel-gen",
            "seed": self.seed,
        });
        let mut novel = Novel::new("sample-novel", "1.0", metadata);

        for index in 0..self.chapters {
            let mut chapter = Chapter::new(chapter_title(&mut rng, index));
            for _ in 0..self.paragraphs_per_chapter {
                chapter.push_paragraph(paragraph(&mut rng));
            }
            novel.push_chapter(chapter);
        }

        novel
    }
}

impl Default for SampleNovel {
    fn default() -> Self {
        Self::new()
    }
}

fn chapter_title(rng: &mut StdRng, index: usize) -> String {
    let a = WORDS[rng.gen_range(0..WORDS.len())];
    let b = WORDS[rng.gen_range(0..WORDS.len())];
    format!("Chapter {}: The {} and the {}", index + 1, capitalize(a), capitalize(b))
}

fn paragraph(rng: &mut StdRng) -> String {
    let sentences = rng.gen_range(3..=6);
    let mut out = String::new();
    for i in 0..sentences {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&sentence(rng));
    }
    out
}

fn sentence(rng: &mut StdRng) -> String {
    let words = rng.gen_range(8..=16);
    let mut out = String::new();
    for i in 0..words {
        let word = WORDS[rng.gen_range(0..WORDS.len())];
        if i == 0 {
            out.push_str(&capitalize(word));
        } else {
            out.push(' ');
            out.push_str(word);
        }
    }
    out.push('.');
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let a = SampleNovel::with_config(3, 2, 7).generate();
        let b = SampleNovel::with_config(3, 2, 7).generate();

        assert_eq!(a.name(), b.name());
        assert_eq!(a.chapters().len(), 3);
        for (ca, cb) in a.chapters().iter().zip(b.chapters()) {
            assert_eq!(ca.title(), cb.title());
            assert_eq!(ca.paragraphs(), cb.paragraphs());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = SampleNovel::with_config(2, 2, 1).generate();
        let b = SampleNovel::with_config(2, 2, 2).generate();
        assert_ne!(a.chapters()[0].title(), b.chapters()[0].title());
    }

    #[test]
    fn test_default_shape() {
        let novel = SampleNovel::new().generate();
        assert_eq!(novel.chapters().len(), 12);
        assert_eq!(novel.total_paragraphs(), 12 * 8);
        assert!(novel.total_words() > 0);
    }
}
