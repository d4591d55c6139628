use anyhow::{bail, Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::document::Novel;

/// Writes novels in the line-delimited JSON novel format.
pub struct NovelWriter {
    writer: Box<dyn Write>,
    chapter_count: usize,
    paragraph_count: usize,
}

impl NovelWriter {
    /// Creates a new NovelWriter for the specified file path.
    ///
    /// Brotli compression is enabled automatically when the path ends with
    /// `.br` (e.g. `book.novel.br`), at quality level 6.
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let writer: Box<dyn Write> = if file_path.ends_with(".br") {
            let buf_writer = BufWriter::new(file);
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(buf_writer, 4096, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(NovelWriter {
            writer,
            chapter_count: 0,
            paragraph_count: 0,
        })
    }

    pub fn write_header(&mut self, version: &str, name: &str, metadata: serde_json::Value) -> Result<()> {
        if name.is_empty() {
            bail!("Novel name must not be empty");
        }
        let header = serde_json::json!({
            "type": "header",
            "version": version,
            "name": name,
            "metadata": metadata,
        });
        self.write_line(&header)
    }

    pub fn write_chapter(&mut self, title: &str) -> Result<()> {
        let line = serde_json::json!({
            "type": "chapter",
            "index": self.chapter_count,
            "title": title,
        });
        self.write_line(&line)?;
        self.chapter_count += 1;
        Ok(())
    }

    /// Writes a paragraph belonging to the most recently written chapter.
    pub fn write_paragraph(&mut self, text: &str) -> Result<()> {
        if self.chapter_count == 0 {
            bail!("Paragraph written before any chapter");
        }
        let line = serde_json::json!({
            "type": "paragraph",
            "chapter": self.chapter_count - 1,
            "text": text,
        });
        self.write_line(&line)?;
        self.paragraph_count += 1;
        Ok(())
    }

    /// Writes the footer with totals and flushes the underlying writer.
    pub fn write_footer(&mut self) -> Result<()> {
        let footer = serde_json::json!({
            "type": "footer",
            "total_chapters": self.chapter_count,
            "total_paragraphs": self.paragraph_count,
        });
        self.write_line(&footer)?;
        self.writer.flush().context("Failed to flush novel file")
    }

    /// Writes a complete novel: header, chapters with paragraphs, footer.
    pub fn write_novel(&mut self, novel: &Novel) -> Result<()> {
        self.write_header(novel.version(), novel.name(), novel.metadata().clone())?;
        for chapter in novel.chapters() {
            self.write_chapter(chapter.title())?;
            for paragraph in chapter.paragraphs() {
                self.write_paragraph(paragraph)?;
            }
        }
        self.write_footer()
    }

    fn write_line(&mut self, value: &serde_json::Value) -> Result<()> {
        serde_json::to_writer(&mut self.writer, value).context("Failed to serialize novel line")?;
        self.writer
            .write_all(b"\n")
            .context("Failed to write novel line")
    }
}
