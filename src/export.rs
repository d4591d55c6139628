//! Standalone HTML export.
//!
//! Renders a novel as a single self-contained HTML page: every chapter on
//! one scrollable document, styled with the reader's light palette and a
//! dark-scheme override. The markup carries the novel name and chapter
//! titles as data attributes, so the exported page keeps the same
//! identity/label contract the reader itself tracks positions by.

use anyhow::{Context, Result};
use egui::Color32;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::document::Novel;
use crate::theme::{dark_theme, light_theme, ThemeColors};

/// Renders the novel as a complete HTML document.
pub fn novel_to_html(novel: &Novel) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(novel.name()));
    html.push_str("<style>\n");
    html.push_str(&stylesheet());
    html.push_str("</style>\n</head>\n");

    let _ = writeln!(
        html,
        "<body id=\"novel_data\" data-novel-name=\"{}\">",
        escape_html(novel.name())
    );
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(novel.name()));

    for chapter in novel.chapters() {
        let title = escape_html(chapter.title());
        let _ = writeln!(html, "<div class=\"chapter\" data-chapter-title=\"{}\">", title);
        let _ = writeln!(html, "<h2>{}</h2>", title);
        for paragraph in chapter.paragraphs() {
            let _ = writeln!(html, "<p>{}</p>", escape_html(paragraph));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Writes the novel as an HTML file at `path`.
pub fn export_html(novel: &Novel, path: &Path) -> Result<()> {
    fs::write(path, novel_to_html(novel))
        .with_context(|| format!("Failed to write HTML file: {}", path.display()))
}

/// Page styles: the light reading palette by default, the dark palette
/// under the system dark color scheme.
fn stylesheet() -> String {
    let light = light_theme().colors;
    let dark = dark_theme().colors;

    format!(
        ":root {{\n{}}}\n\
         @media (prefers-color-scheme: dark) {{\n:root {{\n{}}}\n}}\n\
         body {{\n\
         background: var(--background);\n\
         color: var(--text);\n\
         font-family: Georgia, serif;\n\
         line-height: 1.6;\n\
         max-width: 45em;\n\
         margin: 0 auto;\n\
         padding: 2em 1em 6em;\n\
         }}\n\
         h1, h2 {{ color: var(--heading); }}\n\
         .chapter {{ margin-top: 3em; }}\n",
        palette_variables(&light),
        palette_variables(&dark),
    )
}

fn palette_variables(colors: &ThemeColors) -> String {
    format!(
        "--background: {};\n--text: {};\n--heading: {};\n",
        css_color(colors.background),
        css_color(colors.text),
        css_color(colors.heading),
    )
}

fn css_color(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
