//! PDF document builder.
//!
//! Buffers the whole report as logical blocks and renders them with `genpdf`
//! inside `publish`: styled heading paragraphs, framed tables laid out by the
//! advisory width hints (used as relative column weights over the page width)
//! and a page header carrying the page number and generation date.
//!
//! Columns listed in [`XREF_COLUMNS`] hold values (supplier strings) too long
//! to inline without overflowing the page width. Their cells are replaced by a
//! 1-based id in the main table and the full values are re-emitted as a
//! secondary id-to-value cross-reference table under a level-2 heading.

use super::DocumentBuilder;
use crate::error::{Result, RenderErrorKind, SbomDocError};
use chrono::Local;
use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::{fonts, style, Alignment, Document, Element as _, SimplePageDecorator};
use std::path::{Path, PathBuf};

/// Column headers rendered through a secondary cross-reference table.
const XREF_COLUMNS: &[&str] = &["Supplier"];

/// Directories searched for a usable TTF font family.
const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/liberation2",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/liberation-fonts",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
    "/Library/Fonts",
];

/// Font family names tried in each directory, in genpdf's
/// `<name>-Regular.ttf` naming convention.
const FONT_FAMILIES: &[&str] = &["LiberationSans", "DejaVuSans"];

/// A buffered table: headers, advisory width hints and committed rows.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TableBlock {
    headers: Vec<String>,
    widths: Option<Vec<usize>>,
    rows: Vec<Vec<String>>,
}

/// One logical block of the buffered document.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PdfBlock {
    Heading { level: usize, title: String },
    Paragraph(String),
    Table(TableBlock),
}

/// PDF builder buffering blocks until `publish`
pub struct PdfBuilder {
    blocks: Vec<PdfBlock>,
    current_table: Option<TableBlock>,
    /// Number level-1 sections ("1. SBOM Summary")
    numbered: bool,
    section_counter: usize,
    font_dir: Option<PathBuf>,
}

impl PdfBuilder {
    /// Create a new PDF builder with the default system font search
    #[must_use]
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            current_table: None,
            numbered: false,
            section_counter: 0,
            font_dir: None,
        }
    }

    /// Number top-level section headings
    #[must_use]
    pub fn numbered(mut self) -> Self {
        self.numbered = true;
        self
    }

    /// Restrict font discovery to the given directory
    #[must_use]
    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dir = Some(dir.into());
        self
    }

    /// Locate a usable TTF font family for document rendering.
    ///
    /// Tries the genpdf four-file naming convention for the known families
    /// first, then falls back to reusing any single TTF file in the directory
    /// for all four styles.
    pub fn discover_font_family(
        override_dir: Option<&Path>,
    ) -> Result<fonts::FontFamily<fonts::FontData>> {
        let search_dirs: Vec<PathBuf> = match override_dir {
            Some(dir) => vec![dir.to_path_buf()],
            None => FONT_DIRS.iter().map(PathBuf::from).collect(),
        };

        for dir in &search_dirs {
            if !dir.is_dir() {
                continue;
            }
            for family in FONT_FAMILIES {
                if let Ok(loaded) = fonts::from_files(dir, family, None) {
                    return Ok(loaded);
                }
            }
            if let Some(fallback) = single_ttf_family(dir) {
                return Ok(fallback);
            }
        }

        Err(SbomDocError::render(
            "loading PDF fonts",
            RenderErrorKind::FontDiscovery(format!(
                "no TTF font family found in {}",
                search_dirs
                    .iter()
                    .map(|d| d.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        ))
    }

    /// Split a committed table into the main table plus cross-reference
    /// tables for every column named in [`XREF_COLUMNS`].
    fn commit_table(&mut self, mut table: TableBlock) {
        let mut xrefs: Vec<(String, TableBlock)> = Vec::new();

        for (col, header) in table.headers.clone().iter().enumerate() {
            if !XREF_COLUMNS.contains(&header.as_str()) || table.rows.is_empty() {
                continue;
            }
            let mut xref_rows = Vec::with_capacity(table.rows.len());
            for (index, row) in table.rows.iter_mut().enumerate() {
                let id = (index + 1).to_string();
                let full_value = std::mem::replace(&mut row[col], id.clone());
                xref_rows.push(vec![id, full_value]);
            }
            xrefs.push((
                header.clone(),
                TableBlock {
                    headers: vec!["Id".to_string(), header.clone()],
                    widths: Some(vec![2, 12]),
                    rows: xref_rows,
                },
            ));
        }

        self.blocks.push(PdfBlock::Table(table));
        for (header, xref) in xrefs {
            self.blocks.push(PdfBlock::Heading {
                level: 2,
                title: format!("{header} Cross Reference"),
            });
            self.blocks.push(PdfBlock::Table(xref));
        }
    }

    fn heading_style(level: usize) -> style::Style {
        match level {
            1 => style::Style::new().bold().with_font_size(14),
            _ => style::Style::new().bold().with_font_size(12),
        }
    }

    fn render_table(doc: &mut Document, table: &TableBlock) -> Result<()> {
        let weights = table
            .widths
            .clone()
            .filter(|w| w.len() == table.headers.len() && w.iter().all(|&w| w > 0))
            .unwrap_or_else(|| vec![1; table.headers.len()]);

        let mut layout = TableLayout::new(weights);
        layout.set_cell_decorator(FrameCellDecorator::new(true, true, false));

        let mut header_row = layout.row();
        for header in &table.headers {
            header_row =
                header_row.element(Paragraph::new(header.clone()).styled(style::Effect::Bold));
        }
        header_row.push().map_err(pdf_error)?;

        for row in &table.rows {
            let mut layout_row = layout.row();
            for cell in row {
                layout_row = layout_row.element(Paragraph::new(cell.clone()));
            }
            layout_row.push().map_err(pdf_error)?;
        }

        doc.push(layout);
        doc.push(Break::new(1));
        Ok(())
    }
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn pdf_error(err: genpdf::error::Error) -> SbomDocError {
    SbomDocError::render("rendering PDF", RenderErrorKind::Pdf(err.to_string()))
}

/// Reuse a single TTF file found in `dir` for all four font styles.
fn single_ttf_family(dir: &Path) -> Option<fonts::FontFamily<fonts::FontData>> {
    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("ttf"))
                .unwrap_or(false)
        })
        .collect();
    candidates.sort();

    let bytes = std::fs::read(candidates.first()?).ok()?;
    let data = fonts::FontData::new(bytes, None).ok()?;
    Some(fonts::FontFamily {
        regular: data.clone(),
        bold: data.clone(),
        italic: data.clone(),
        bold_italic: data,
    })
}

impl DocumentBuilder for PdfBuilder {
    fn heading(&mut self, level: usize, title: &str) {
        let title = if self.numbered && level == 1 {
            self.section_counter += 1;
            format!("{}. {title}", self.section_counter)
        } else {
            title.to_string()
        };
        self.blocks.push(PdfBlock::Heading { level, title });
    }

    fn paragraph(&mut self, text: &str) {
        self.blocks.push(PdfBlock::Paragraph(text.to_string()));
    }

    fn create_table(&mut self, headers: &[&str], widths: Option<&[usize]>) {
        self.current_table = Some(TableBlock {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            widths: widths.map(<[usize]>::to_vec),
            rows: Vec::new(),
        });
    }

    fn add_row(&mut self, cells: &[Option<&str>]) {
        if let Some(table) = &mut self.current_table {
            table
                .rows
                .push(cells.iter().map(|c| c.unwrap_or("").to_string()).collect());
        }
    }

    fn show_table(&mut self) {
        if let Some(table) = self.current_table.take() {
            self.commit_table(table);
        }
    }

    fn publish(&mut self, destination: Option<&Path>) -> Result<()> {
        let path = destination.ok_or_else(|| {
            SbomDocError::render(
                "publishing PDF",
                RenderErrorKind::MissingDestination(
                    "PDF output requires an output file path".to_string(),
                ),
            )
        })?;

        let font_family = Self::discover_font_family(self.font_dir.as_deref())?;
        let mut doc = Document::new(font_family);
        doc.set_title("SBOM Report");

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(10);
        let generated = Local::now().format("%Y-%m-%d").to_string();
        decorator.set_header(move |page| {
            Paragraph::new(format!("SBOM Report - {generated} - page {page}"))
                .aligned(Alignment::Right)
                .styled(style::Style::new().with_font_size(8))
        });
        doc.set_page_decorator(decorator);

        for block in &self.blocks {
            match block {
                PdfBlock::Heading { level, title } => {
                    doc.push(
                        Paragraph::new(title.clone()).styled(Self::heading_style(*level)),
                    );
                    doc.push(Break::new(1));
                }
                PdfBlock::Paragraph(text) => {
                    doc.push(Paragraph::new(text.clone()));
                    doc.push(Break::new(1));
                }
                PdfBlock::Table(table) => Self::render_table(&mut doc, table)?,
            }
        }

        doc.render_to_file(path).map_err(|e| {
            SbomDocError::render(
                format!("writing {}", path.display()),
                RenderErrorKind::DestinationWrite(e.to_string()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_buffered_in_order() {
        let mut builder = PdfBuilder::new();
        builder.heading(1, "SBOM Summary");
        builder.create_table(&["Item", "Details"], Some(&[5, 9]));
        builder.add_row(&[Some("SBOM Type"), Some("spdx")]);
        builder.show_table();
        builder.paragraph("NTIA conformant true");

        assert_eq!(builder.blocks.len(), 3);
        assert!(matches!(&builder.blocks[0], PdfBlock::Heading { level: 1, title } if title == "SBOM Summary"));
        assert!(matches!(&builder.blocks[1], PdfBlock::Table(t) if t.rows.len() == 1));
        assert!(matches!(&builder.blocks[2], PdfBlock::Paragraph(p) if p == "NTIA conformant true"));
    }

    #[test]
    fn supplier_column_is_cross_referenced() {
        let mut builder = PdfBuilder::new();
        builder.create_table(&["Name", "Version", "Supplier", "License"], Some(&[5, 2, 2, 5]));
        builder.add_row(&[Some("libfoo"), Some("1.2"), Some("Acme Industries Ltd"), Some("MIT")]);
        builder.add_row(&[Some("libbar"), Some("2.0"), Some("Widget Corp"), Some("Apache-2.0")]);
        builder.show_table();

        // Main table, xref heading, xref table.
        assert_eq!(builder.blocks.len(), 3);

        let PdfBlock::Table(main) = &builder.blocks[0] else {
            panic!("expected main table");
        };
        assert_eq!(main.rows[0][2], "1");
        assert_eq!(main.rows[1][2], "2");

        assert!(matches!(
            &builder.blocks[1],
            PdfBlock::Heading { level: 2, title } if title == "Supplier Cross Reference"
        ));

        let PdfBlock::Table(xref) = &builder.blocks[2] else {
            panic!("expected cross-reference table");
        };
        assert_eq!(xref.headers, ["Id", "Supplier"]);
        assert_eq!(xref.rows[0], ["1", "Acme Industries Ltd"]);
        assert_eq!(xref.rows[1], ["2", "Widget Corp"]);
    }

    #[test]
    fn empty_table_is_not_cross_referenced() {
        let mut builder = PdfBuilder::new();
        builder.create_table(&["Name", "Version", "Supplier", "License"], None);
        builder.show_table();
        assert_eq!(builder.blocks.len(), 1);
    }

    #[test]
    fn numbered_headings_count_level_one_only() {
        let mut builder = PdfBuilder::new().numbered();
        builder.heading(1, "SBOM Summary");
        builder.heading(2, "Supplier Cross Reference");
        builder.heading(1, "License Summary");

        let titles: Vec<&str> = builder
            .blocks
            .iter()
            .filter_map(|b| match b {
                PdfBlock::Heading { title, .. } => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            titles,
            ["1. SBOM Summary", "Supplier Cross Reference", "2. License Summary"]
        );
    }

    #[test]
    fn publish_without_destination_is_an_error() {
        let mut builder = PdfBuilder::new();
        builder.heading(1, "SBOM Summary");
        let err = builder.publish(None).expect_err("PDF needs a path");
        assert!(err.to_string().contains("rendering failed"));
    }

    #[test]
    fn publish_renders_when_fonts_available() {
        if PdfBuilder::discover_font_family(None).is_err() {
            eprintln!("skipping: no system TTF fonts available");
            return;
        }

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.pdf");

        let mut builder = PdfBuilder::new();
        builder.heading(1, "SBOM Summary");
        builder.create_table(&["Item", "Details"], Some(&[5, 9]));
        builder.add_row(&[Some("SBOM Type"), Some("spdx")]);
        builder.show_table();
        builder.publish(Some(&path)).expect("render PDF");

        let bytes = std::fs::read(&path).expect("read back");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
