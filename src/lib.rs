//! **Render Software Bills of Materials as human-readable documents.**
//!
//! `sbom-doc` turns a parsed SBOM into a report in one of five formats:
//! styled console output, Markdown, HTML, JSON or PDF. One traversal of the
//! SBOM data produces every encoding: the report generator drives a
//! format-agnostic [`DocumentBuilder`] and stays ignorant of which concrete
//! builder it holds.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The read-only SBOM content the generator walks —
//!   [`SbomData`] with its document metadata, packages, files and
//!   relationships.
//! - **[`parsers`]**: Minimal SPDX JSON and CycloneDX JSON readers with
//!   marker-based format detection.
//! - **[`builder`]**: The [`DocumentBuilder`] capability trait and the five
//!   concrete builders, selected by [`OutputFormat`].
//! - **[`report`]**: The single-pass report generator and the NTIA
//!   minimum-elements conformance evaluator.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use sbom_doc::{create_builder, generate_document, parse_sbom, OutputFormat};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sbom = parse_sbom(Path::new("sample.spdx.json"))?;
//!
//!     let mut builder = create_builder(OutputFormat::Markdown);
//!     let summary = generate_document(
//!         &sbom,
//!         "sample.spdx.json",
//!         builder.as_mut(),
//!         Some(Path::new("report.md")),
//!     )?;
//!
//!     println!("NTIA conformant: {}", summary.is_conformant());
//!     Ok(())
//! }
//! ```
//!
//! ## Conformance
//!
//! Every report ends with an NTIA Summary section listing the five
//! minimum-element checks individually plus their aggregate, so a
//! non-conformant SBOM can be diagnosed from the report alone. The verdicts
//! are also returned programmatically as part of
//! [`ReportSummary`](report::ReportSummary).

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod builder;
pub mod error;
pub mod model;
pub mod parsers;
pub mod report;

// Re-export main types for convenience
pub use builder::{
    create_builder, create_builder_with_options, BuilderOptions, ConsoleBuilder, DocumentBuilder,
    HtmlBuilder, JsonBuilder, MarkdownBuilder, OutputFormat, PdfBuilder,
};
pub use error::{ErrorContext, Result, SbomDocError};
pub use model::{Creator, CreatorKind, DocumentInfo, Package, Relationship, SbomData, SbomFile};
pub use parsers::{detect_format, parse_sbom, parse_sbom_str};
pub use report::{generate_document, license_frequency, NtiaConformance, ReportSummary};
