//! HTML document builder.
//!
//! Produces a document fragment (no `<html>`/`<body>` wrapper) with `<hN>`
//! headings and `<table>` markup, buffered as ordered text fragments. All
//! heading, paragraph and cell text is HTML-escaped.

use super::escape::escape_html;
use super::{write_text_document, DocumentBuilder};
use crate::error::Result;
use std::path::Path;

/// HTML builder accumulating markup fragments
pub struct HtmlBuilder {
    fragments: Vec<String>,
}

impl HtmlBuilder {
    /// Create a new HTML builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// The buffered fragment as it would be published.
    #[must_use]
    pub fn document(&self) -> String {
        self.fragments.concat()
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder for HtmlBuilder {
    fn heading(&mut self, level: usize, title: &str) {
        let level = level.max(1);
        self.fragments
            .push(format!("\n<h{level}>{}</h{level}>\n", escape_html(title)));
    }

    fn paragraph(&mut self, text: &str) {
        self.fragments.push(format!("<p>{}</p>\n", escape_html(text)));
    }

    fn create_table(&mut self, headers: &[&str], _widths: Option<&[usize]>) {
        self.fragments
            .push("<table class='table table-striped table-bordered'>\n".to_string());
        self.fragments.push("<thead><tr>\n".to_string());
        for header in headers {
            self.fragments
                .push(format!("<th scope='col'>{}</th>\n", escape_html(header)));
        }
        self.fragments.push("</tr></thead>\n<tbody>\n".to_string());
    }

    fn add_row(&mut self, cells: &[Option<&str>]) {
        self.fragments.push("<tr>\n".to_string());
        for cell in cells {
            self.fragments
                .push(format!("<td>{}</td>\n", escape_html(cell.unwrap_or(""))));
        }
        self.fragments.push("</tr>\n".to_string());
    }

    fn show_table(&mut self) {
        self.fragments.push("</tbody></table>\n".to_string());
    }

    fn publish(&mut self, destination: Option<&Path>) -> Result<()> {
        write_text_document(destination, &self.document())
    }
}
