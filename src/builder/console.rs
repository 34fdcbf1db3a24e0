//! Console document builder.
//!
//! Immediate-mode: headings and tables are printed to the terminal as soon as
//! they are complete, so `publish` has nothing left to do.

use super::DocumentBuilder;
use crate::error::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};
use std::path::Path;

/// Console builder printing boxed panels and tables straight to stdout
pub struct ConsoleBuilder {
    /// Use bold styling for headings and table headers
    colored: bool,
    /// Table currently being assembled
    table: Option<Table>,
}

impl ConsoleBuilder {
    /// Create a new console builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            colored: true,
            table: None,
        }
    }

    /// Disable bold/colored output
    #[must_use]
    pub fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    /// Render a boxed one-cell panel around a section title.
    fn boxed_panel(&self, title: &str) -> String {
        let mut panel = Table::new();
        panel
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        let cell = if self.colored {
            Cell::new(title).add_attribute(Attribute::Bold)
        } else {
            Cell::new(title)
        };
        panel.add_row(vec![cell]);
        panel.to_string()
    }
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder for ConsoleBuilder {
    fn heading(&mut self, _level: usize, title: &str) {
        println!("{}", self.boxed_panel(title));
    }

    fn paragraph(&mut self, text: &str) {
        if self.colored {
            println!("\n{}", text.bold());
        } else {
            println!("\n{text}");
        }
    }

    fn create_table(&mut self, headers: &[&str], _widths: Option<&[usize]>) {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        let header_cells: Vec<Cell> = headers
            .iter()
            .map(|h| {
                if self.colored {
                    Cell::new(h).add_attribute(Attribute::Bold)
                } else {
                    Cell::new(h)
                }
            })
            .collect();
        table.set_header(header_cells);
        self.table = Some(table);
    }

    fn add_row(&mut self, cells: &[Option<&str>]) {
        if let Some(table) = &mut self.table {
            table.add_row(cells.iter().map(|c| c.unwrap_or("")));
        }
    }

    fn show_table(&mut self) {
        if let Some(table) = self.table.take() {
            println!("{table}");
        }
    }

    fn publish(&mut self, _destination: Option<&Path>) -> Result<()> {
        // Everything has already been printed.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxed_panel_contains_title() {
        let builder = ConsoleBuilder::new().no_color();
        let panel = builder.boxed_panel("SBOM Summary");
        assert!(panel.contains("SBOM Summary"));
        // UTF8_FULL preset draws box borders
        assert!(panel.contains('─'));
    }

    #[test]
    fn full_sequence_does_not_panic() {
        let mut builder = ConsoleBuilder::new().no_color();
        builder.heading(1, "Package Summary");
        builder.create_table(&["Name", "Version"], Some(&[5, 2]));
        builder.add_row(&[Some("libfoo"), None]);
        builder.show_table();
        builder.paragraph("NTIA conformant true");
        builder.publish(None).expect("console publish is a no-op");
    }

    #[test]
    fn missing_cells_render_as_empty_not_literal() {
        let mut builder = ConsoleBuilder::new().no_color();
        builder.create_table(&["Name", "Version"], None);
        builder.add_row(&[Some("libfoo"), None]);
        let rendered = builder
            .table
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_default();
        assert!(rendered.contains("libfoo"));
        assert!(!rendered.contains("None"));
    }
}
