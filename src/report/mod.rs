//! Report generation.
//!
//! [`generate_document`] walks the SBOM exactly once, in a fixed section
//! order, driving whichever [`DocumentBuilder`] it is handed:
//!
//! SBOM Summary → File Summary (iff files exist) → Package Summary (iff
//! packages exist) → License Summary (always) → NTIA Summary (always),
//! terminated by a closing paragraph and one `publish` call.
//!
//! Derived state (the license list and the conformance flags) is accumulated
//! during the walk and owned by the invocation; data already handed to the
//! builder is never re-read.

pub mod conformance;

pub use conformance::{file_has_min_elements, package_has_min_elements, NtiaConformance};

use crate::builder::DocumentBuilder;
use crate::error::Result;
use crate::model::SbomData;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Placeholder for an absent concluded license or file-type list. Also a
/// valid key in the license frequency table.
pub const NOT_KNOWN: &str = "NOT KNOWN";

/// Placeholder for absent copyright text.
const COPYRIGHT_PLACEHOLDER: &str = "-";

/// Derived results of one rendering pass.
///
/// Row counts and verdicts are format-independent: every builder driven over
/// the same SBOM yields the same summary, which is what the cross-renderer
/// agreement tests check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Rows emitted in the SBOM Summary section
    pub sbom_rows: usize,
    /// Rows emitted in the File Summary section (0 when the section is skipped)
    pub file_rows: usize,
    /// Rows emitted in the Package Summary section (0 when skipped)
    pub package_rows: usize,
    /// Rows emitted in the License Summary section
    pub license_rows: usize,
    /// Rows emitted in the NTIA Summary section
    pub ntia_rows: usize,
    /// Sorted (license, count) frequency table
    pub licenses: Vec<(String, usize)>,
    /// NTIA minimum-elements verdicts
    pub conformance: NtiaConformance,
}

impl ReportSummary {
    /// Aggregate NTIA verdict for this pass.
    #[must_use]
    pub fn is_conformant(&self) -> bool {
        self.conformance.is_conformant()
    }
}

/// Build the sorted license frequency table.
///
/// Licenses are aggregated across packages and files; [`NOT_KNOWN`] entries
/// participate like any other value. The result is ordered lexicographically
/// by license identifier, independent of input order.
#[must_use]
pub fn license_frequency(licenses: &[String]) -> Vec<(String, usize)> {
    let mut freq: BTreeMap<String, usize> = BTreeMap::new();
    for license in licenses {
        *freq.entry(license.clone()).or_insert(0) += 1;
    }
    freq.into_iter().collect()
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Walk the SBOM once and render it through `builder`, publishing the result
/// to `destination` (stdout for builders that support it when `None`).
///
/// `source` is the display name of the input file, echoed in the SBOM Summary
/// section.
pub fn generate_document(
    sbom: &SbomData,
    source: &str,
    builder: &mut dyn DocumentBuilder,
    destination: Option<&Path>,
) -> Result<ReportSummary> {
    let document = &sbom.document;
    let mut verdicts = NtiaConformance::seed(document, sbom.relationship_count());
    let mut licenses: Vec<String> = Vec::new();

    // SBOM Summary
    builder.heading(1, "SBOM Summary");
    builder.create_table(&["Item", "Details"], Some(&[5, 9]));
    builder.add_row(&[Some("SBOM File"), Some(source)]);
    builder.add_row(&[Some("SBOM Type"), Some(&document.doc_type)]);
    builder.add_row(&[Some("Version"), Some(&document.spec_version)]);
    builder.add_row(&[Some("Name"), Some(&document.name)]);
    for creator in &document.creators {
        let value = format!("{}:{}", creator.kind, creator.name);
        builder.add_row(&[Some("Creator"), Some(&value)]);
    }
    builder.add_row(&[Some("Created"), document.created.as_deref()]);
    let file_count = sbom.file_count().to_string();
    let package_count = sbom.package_count().to_string();
    let relationship_count = sbom.relationship_count().to_string();
    builder.add_row(&[Some("Files"), Some(&file_count)]);
    builder.add_row(&[Some("Packages"), Some(&package_count)]);
    builder.add_row(&[Some("Relationships"), Some(&relationship_count)]);
    builder.show_table();
    let sbom_rows = 8 + document.creators.len();

    // File Summary
    if !sbom.files.is_empty() {
        builder.heading(1, "File Summary");
        builder.create_table(&["Name", "Type", "License", "Copyright"], Some(&[3, 2, 4, 5]));
        for file in &sbom.files {
            let file_type = match &file.file_types {
                Some(types) => types.join(", "),
                None => NOT_KNOWN.to_string(),
            };
            let license = file
                .license_concluded
                .clone()
                .unwrap_or_else(|| NOT_KNOWN.to_string());
            let copyright = file
                .copyright_text
                .as_deref()
                .unwrap_or(COPYRIGHT_PLACEHOLDER);
            licenses.push(license.clone());
            builder.add_row(&[
                file.name.as_deref(),
                Some(&file_type),
                Some(&license),
                Some(copyright),
            ]);
            verdicts.observe_file(file);
        }
        builder.show_table();
    }

    // Package Summary
    if !sbom.packages.is_empty() {
        builder.heading(1, "Package Summary");
        builder.create_table(&["Name", "Version", "Supplier", "License"], Some(&[5, 2, 2, 5]));
        for package in &sbom.packages {
            let license = package
                .license_concluded
                .clone()
                .unwrap_or_else(|| NOT_KNOWN.to_string());
            licenses.push(license.clone());
            builder.add_row(&[
                package.name.as_deref(),
                package.version.as_deref(),
                package.supplier.as_deref(),
                Some(&license),
            ]);
            verdicts.observe_package(package);
        }
        builder.show_table();
    }

    // License Summary: always present, possibly empty.
    builder.heading(1, "License Summary");
    builder.create_table(&["License", "Count"], Some(&[10, 4]));
    let frequency = license_frequency(&licenses);
    for (license, count) in &frequency {
        let count = count.to_string();
        builder.add_row(&[Some(license), Some(&count)]);
    }
    builder.show_table();

    // NTIA Summary: all five sub-verdicts, never only the aggregate.
    builder.heading(1, "NTIA Summary");
    builder.create_table(&["Element", "Status"], Some(&[10, 4]));
    builder.add_row(&[
        Some("All file information provided?"),
        Some(bool_str(verdicts.files_valid)),
    ]);
    builder.add_row(&[
        Some("All package information provided?"),
        Some(bool_str(verdicts.packages_valid)),
    ]);
    builder.add_row(&[
        Some("Creator identified?"),
        Some(bool_str(verdicts.creator_identified)),
    ]);
    builder.add_row(&[
        Some("Creation time identified?"),
        Some(bool_str(verdicts.creation_time_identified)),
    ]);
    builder.add_row(&[
        Some("Dependency relationships provided?"),
        Some(bool_str(verdicts.relationships_valid)),
    ]);
    builder.show_table();

    builder.paragraph(&format!("NTIA conformant {}", verdicts.is_conformant()));
    builder.publish(destination)?;

    let summary = ReportSummary {
        sbom_rows,
        file_rows: sbom.file_count(),
        package_rows: sbom.package_count(),
        license_rows: frequency.len(),
        ntia_rows: 5,
        licenses: frequency,
        conformance: verdicts,
    };

    tracing::info!(
        packages = summary.package_rows,
        files = summary.file_rows,
        licenses = summary.license_rows,
        conformant = summary.is_conformant(),
        "report generated"
    );

    Ok(summary)
}
