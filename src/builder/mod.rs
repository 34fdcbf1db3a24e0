//! Document builders for report output.
//!
//! This module provides the format-agnostic [`DocumentBuilder`] capability
//! trait and its five concrete implementations:
//! - Console: boxed tables printed straight to the terminal
//! - Markdown: pipe tables, `#` headings
//! - HTML: document fragment with `<table>`/`<hN>` markup
//! - JSON: one object per report, section title keys, row-object arrays
//! - PDF: paginated document with weight-based table layouts
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation. All
//! SBOM-controlled data (package names, versions, suppliers, licenses) is
//! escaped before embedding in HTML or Markdown output.

mod console;
pub mod escape;
mod html;
mod json;
mod markdown;
mod pdf;

pub use console::ConsoleBuilder;
pub use html::HtmlBuilder;
pub use json::JsonBuilder;
pub use markdown::MarkdownBuilder;
pub use pdf::PdfBuilder;

use crate::error::{Result, SbomDocError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Output format for generated documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Styled terminal output
    #[default]
    Console,
    /// Markdown file with pipe tables
    Markdown,
    /// HTML document fragment
    Html,
    /// JSON object keyed by section title
    Json,
    /// Paginated PDF document
    Pdf,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Console => write!(f, "console"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Pdf => write!(f, "pdf"),
        }
    }
}

/// Trait implemented by every concrete document builder.
///
/// The report generator drives a builder through one strict sequence per
/// report: `heading`, then optionally one table (`create_table` →
/// `add_row`* → `show_table`) or a `paragraph`, repeated section by section
/// and terminated by exactly one `publish`. Builders may not assume random
/// access or reordering of sections.
pub trait DocumentBuilder {
    /// Start a new labeled section at the given nesting level.
    ///
    /// Level-1 headings delimit top-level sections; for the JSON builder they
    /// are the section-commit boundary (see [`JsonBuilder`]).
    fn heading(&mut self, level: usize, title: &str);

    /// Append a free-text block.
    fn paragraph(&mut self, text: &str);

    /// Begin a new table. Column count is the header count; `widths` are
    /// advisory hints consumed only by builders that lay out fixed-width
    /// columns (PDF).
    fn create_table(&mut self, headers: &[&str], widths: Option<&[usize]>);

    /// Append one row. Cell count must match the last `create_table`'s header
    /// count; a `None` cell renders as the empty string and is never omitted.
    fn add_row(&mut self, cells: &[Option<&str>]);

    /// Finalize the current table. No-op for builders that commit per row.
    fn show_table(&mut self);

    /// Finalize and deliver the whole document.
    ///
    /// Must be called exactly once, after all content calls. Buffered text
    /// builders write to `destination` or stdout when it is `None`; the PDF
    /// builder requires a path; the console builder has already printed and
    /// ignores the destination.
    fn publish(&mut self, destination: Option<&Path>) -> Result<()>;
}

/// Options applied when constructing a builder
#[derive(Debug, Clone, Default)]
pub struct BuilderOptions {
    /// Disable bold/colored console output
    pub no_color: bool,
    /// Font directory override for the PDF builder
    pub font_dir: Option<PathBuf>,
}

/// Create a document builder for the given format
#[must_use]
pub fn create_builder(format: OutputFormat) -> Box<dyn DocumentBuilder> {
    create_builder_with_options(format, &BuilderOptions::default())
}

/// Create a document builder with explicit options
#[must_use]
pub fn create_builder_with_options(
    format: OutputFormat,
    options: &BuilderOptions,
) -> Box<dyn DocumentBuilder> {
    match format {
        OutputFormat::Console => {
            if options.no_color {
                Box::new(ConsoleBuilder::new().no_color())
            } else {
                Box::new(ConsoleBuilder::new())
            }
        }
        OutputFormat::Markdown => Box::new(MarkdownBuilder::new()),
        OutputFormat::Html => Box::new(HtmlBuilder::new()),
        OutputFormat::Json => Box::new(JsonBuilder::new()),
        OutputFormat::Pdf => match &options.font_dir {
            Some(dir) => Box::new(PdfBuilder::new().with_font_dir(dir)),
            None => Box::new(PdfBuilder::new()),
        },
    }
}

/// Write a fully buffered text document to the destination, or stdout when no
/// destination is given. Used by the Markdown, HTML and JSON builders.
fn write_text_document(destination: Option<&Path>, content: &str) -> Result<()> {
    match destination {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| SbomDocError::io(path, e))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}
