use anyhow::{bail, Context, Result};
use brotli::Decompressor;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::document::{Chapter, Novel};

/// One tagged line of the novel file format.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum NovelLine {
    #[serde(rename = "header")]
    Header {
        version: String,
        name: String,
        #[serde(default)]
        metadata: serde_json::Value,
    },
    #[serde(rename = "chapter")]
    Chapter { index: usize, title: String },
    #[serde(rename = "paragraph")]
    Paragraph { chapter: usize, text: String },
    #[serde(rename = "footer")]
    Footer {
        #[serde(default)]
        total_chapters: Option<usize>,
        #[serde(default)]
        total_paragraphs: Option<usize>,
    },
}

/// Reads line-delimited JSON novel files, optionally Brotli-compressed.
pub struct NovelReader;

impl NovelReader {
    pub fn new() -> Self {
        NovelReader
    }

    /// Reads and parses a novel file.
    ///
    /// Brotli decompression is enabled automatically when the path ends with
    /// `.br` (e.g. `book.novel.br`).
    pub fn read(&self, file_path: &str) -> Result<Novel> {
        let file = File::open(file_path)
            .with_context(|| format!("Failed to open novel file: {}", file_path))?;

        let reader: Box<dyn BufRead> = if file_path.ends_with(".br") {
            Box::new(BufReader::new(Decompressor::new(BufReader::new(file), 4096)))
        } else {
            Box::new(BufReader::new(file))
        };

        parse_novel(reader).with_context(|| format!("Failed to parse novel file: {}", file_path))
    }
}

/// Parses a novel from a line-delimited JSON reader.
///
/// The first non-empty line must be a header carrying a non-empty novel name;
/// chapters must appear in index order, and every paragraph must reference a
/// chapter that has already been declared.
pub fn parse_novel(reader: impl BufRead) -> Result<Novel> {
    let mut novel: Option<Novel> = None;
    let mut saw_footer = false;

    for (line_number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_number + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let parsed: NovelLine = serde_json::from_str(&line)
            .with_context(|| format!("Invalid novel line {}: {}", line_number + 1, line))?;

        if saw_footer {
            bail!("Unexpected content after footer at line {}", line_number + 1);
        }

        match parsed {
            NovelLine::Header { version, name, metadata } => {
                if novel.is_some() {
                    bail!("Duplicate header at line {}", line_number + 1);
                }
                if name.is_empty() {
                    bail!("Novel name in header must not be empty");
                }
                novel = Some(Novel::new(name, version, metadata));
            }
            NovelLine::Chapter { index, title } => {
                let novel = novel
                    .as_mut()
                    .ok_or_else(|| anyhow::anyhow!("Chapter line before header at line {}", line_number + 1))?;
                if index != novel.chapters().len() {
                    bail!(
                        "Chapter index {} out of order at line {}, expected {}",
                        index,
                        line_number + 1,
                        novel.chapters().len()
                    );
                }
                novel.push_chapter(Chapter::new(title));
            }
            NovelLine::Paragraph { chapter, text } => {
                let novel = novel
                    .as_mut()
                    .ok_or_else(|| anyhow::anyhow!("Paragraph line before header at line {}", line_number + 1))?;
                if chapter >= novel.chapters().len() {
                    bail!(
                        "Paragraph at line {} references unknown chapter {}",
                        line_number + 1,
                        chapter
                    );
                }
                // Paragraphs always follow their chapter in files we write,
                // but the format allows any already-declared chapter.
                if let Some(target) = novel.chapter_mut(chapter) {
                    target.push_paragraph(text);
                }
            }
            NovelLine::Footer { total_chapters, total_paragraphs } => {
                let novel = novel
                    .as_ref()
                    .ok_or_else(|| anyhow::anyhow!("Footer line before header at line {}", line_number + 1))?;
                if let Some(expected) = total_chapters {
                    if expected != novel.chapters().len() {
                        bail!(
                            "Footer reports {} chapters, file contains {}",
                            expected,
                            novel.chapters().len()
                        );
                    }
                }
                if let Some(expected) = total_paragraphs {
                    if expected != novel.total_paragraphs() {
                        bail!(
                            "Footer reports {} paragraphs, file contains {}",
                            expected,
                            novel.total_paragraphs()
                        );
                    }
                }
                saw_footer = true;
            }
        }
    }

    novel.ok_or_else(|| anyhow::anyhow!("Novel file contains no header"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_minimal_novel() {
        let input = concat!(
            r#"{"type":"header","version":"1.0","name":"novel-42","metadata":{"source":"test"}}"#, "\n",
            r#"{"type":"chapter","index":0,"title":"Ch1"}"#, "\n",
            r#"{"type":"paragraph","chapter":0,"text":"First paragraph."}"#, "\n",
            r#"{"type":"chapter","index":1,"title":"Ch2"}"#, "\n",
            r#"{"type":"paragraph","chapter":1,"text":"Second chapter text."}"#, "\n",
            r#"{"type":"footer","total_chapters":2,"total_paragraphs":2}"#, "\n",
        );

        let novel = parse_novel(Cursor::new(input)).unwrap();
        assert_eq!(novel.name(), "novel-42");
        assert_eq!(novel.chapters().len(), 2);
        assert_eq!(novel.chapters()[0].title(), "Ch1");
        assert_eq!(novel.chapters()[1].paragraphs(), ["Second chapter text."]);
    }

    #[test]
    fn test_parse_rejects_missing_header() {
        let input = r#"{"type":"chapter","index":0,"title":"Ch1"}"#;
        let err = parse_novel(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("before header"));
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let input = r#"{"type":"header","version":"1.0","name":""}"#;
        let err = parse_novel(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_parse_rejects_out_of_order_chapter() {
        let input = concat!(
            r#"{"type":"header","version":"1.0","name":"n"}"#, "\n",
            r#"{"type":"chapter","index":1,"title":"Ch2"}"#, "\n",
        );
        let err = parse_novel(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("out of order"));
    }

    #[test]
    fn test_parse_rejects_paragraph_for_unknown_chapter() {
        let input = concat!(
            r#"{"type":"header","version":"1.0","name":"n"}"#, "\n",
            r#"{"type":"paragraph","chapter":0,"text":"orphan"}"#, "\n",
        );
        let err = parse_novel(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("unknown chapter"));
    }

    #[test]
    fn test_parse_rejects_footer_mismatch() {
        let input = concat!(
            r#"{"type":"header","version":"1.0","name":"n"}"#, "\n",
            r#"{"type":"chapter","index":0,"title":"Ch1"}"#, "\n",
            r#"{"type":"footer","total_chapters":3}"#, "\n",
        );
        let err = parse_novel(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains("3 chapters"));
    }
}
