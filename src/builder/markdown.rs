//! Markdown document builder.
//!
//! Buffers the report as an ordered sequence of lines and publishes them
//! newline-joined. Tables are pipe-delimited with a `---` separator row per
//! column; cell content is escaped so pipes and newlines in SBOM data cannot
//! break the table grid.

use super::escape::escape_markdown_table;
use super::{write_text_document, DocumentBuilder};
use crate::error::Result;
use std::path::Path;

/// Markdown builder accumulating text lines
pub struct MarkdownBuilder {
    lines: Vec<String>,
}

impl MarkdownBuilder {
    /// Create a new Markdown builder
    #[must_use]
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The buffered document as it would be published.
    #[must_use]
    pub fn document(&self) -> String {
        self.lines.join("\n")
    }
}

impl Default for MarkdownBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder for MarkdownBuilder {
    fn heading(&mut self, level: usize, title: &str) {
        let marker = "#".repeat(level.max(1));
        self.lines.push(format!("\n{marker} {title}\n"));
    }

    fn paragraph(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn create_table(&mut self, headers: &[&str], _widths: Option<&[usize]>) {
        let heading_row = headers
            .iter()
            .map(|h| escape_markdown_table(h))
            .collect::<Vec<_>>()
            .join(" | ");
        let separator_row = "| -------- ".repeat(headers.len());
        self.lines.push(heading_row);
        self.lines.push(separator_row);
    }

    fn add_row(&mut self, cells: &[Option<&str>]) {
        let row = cells
            .iter()
            .map(|c| escape_markdown_table(c.unwrap_or("")))
            .collect::<Vec<_>>()
            .join(" | ");
        self.lines.push(row);
    }

    fn show_table(&mut self) {
        // Rows are committed as they arrive; nothing to close.
    }

    fn publish(&mut self, destination: Option<&Path>) -> Result<()> {
        write_text_document(destination, &self.document())
    }
}
