//! JSON document builder.
//!
//! The output is a single object whose keys are the section titles and whose
//! values are arrays of row objects keyed by that section's column headers.
//!
//! A section's row array is only known to be complete when the next heading
//! arrives, so the builder uses a two-step commit: every `heading` call closes
//! the previous section under its title, and `publish` performs the forced
//! final flush for the last section. Paragraphs carry no section data and are
//! ignored, keeping the artifact keyed purely by section.

use super::{write_text_document, DocumentBuilder};
use crate::error::{Result, RenderErrorKind, SbomDocError};
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;

/// JSON builder with deferred section commit
pub struct JsonBuilder {
    /// Committed sections in document order
    sections: IndexMap<String, Value>,
    /// Title of the section currently being accumulated
    current_title: Option<String>,
    /// Rows accumulated for the current section
    current_rows: Vec<Value>,
    /// Column headers from the most recent `create_table`
    headers: Vec<String>,
}

impl JsonBuilder {
    /// Create a new JSON builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: IndexMap::new(),
            current_title: None,
            current_rows: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Close the current section, committing its accumulated rows under its
    /// title. Called on every heading transition and once from `publish`.
    fn flush_section(&mut self) {
        if let Some(title) = self.current_title.take() {
            let rows = std::mem::take(&mut self.current_rows);
            self.sections.insert(title, Value::Array(rows));
        }
    }

    /// The document as it stands, including a forced flush of the open
    /// section. Used by `publish` and by tests.
    pub fn document(&mut self) -> Result<String> {
        self.flush_section();
        serde_json::to_string_pretty(&self.sections).map_err(|e| {
            SbomDocError::render(
                "serializing report",
                RenderErrorKind::Serialization(e.to_string()),
            )
        })
    }
}

impl Default for JsonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder for JsonBuilder {
    fn heading(&mut self, _level: usize, title: &str) {
        self.flush_section();
        self.current_title = Some(title.to_string());
    }

    fn paragraph(&mut self, _text: &str) {
        // The JSON artifact carries only section keys.
    }

    fn create_table(&mut self, headers: &[&str], _widths: Option<&[usize]>) {
        self.headers = headers.iter().map(|h| (*h).to_string()).collect();
    }

    fn add_row(&mut self, cells: &[Option<&str>]) {
        let mut row = serde_json::Map::new();
        for (header, cell) in self.headers.iter().zip(cells.iter()) {
            // Fields are never omitted: a missing value is stored as "".
            row.insert(
                header.clone(),
                Value::String(cell.unwrap_or("").to_string()),
            );
        }
        self.current_rows.push(Value::Object(row));
    }

    fn show_table(&mut self) {
        // Rows stay open until the next heading closes the section.
    }

    fn publish(&mut self, destination: Option<&Path>) -> Result<()> {
        let document = self.document()?;
        write_text_document(destination, &document)
    }
}
