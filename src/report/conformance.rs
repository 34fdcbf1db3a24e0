//! NTIA minimum-elements conformance checking.
//!
//! Five independent boolean checks plus their AND aggregate: every file has
//! id and name, every package has id, name, version and a real supplier, at
//! least one creator is named, a creation time exists, and at least one
//! relationship is declared. Sub-check failures are data, not errors - all
//! five verdicts are always computed and reported so a partial failure can be
//! diagnosed.

use crate::model::{DocumentInfo, Package, SbomFile};
use serde::{Deserialize, Serialize};

/// Sentinel meaning "no claim was made about this field". A supplier carrying
/// it is present but does not satisfy the minimum elements.
pub const NOASSERTION: &str = "NOASSERTION";

/// True if the file carries the NTIA minimum elements (id and name).
#[must_use]
pub fn file_has_min_elements(file: &SbomFile) -> bool {
    file.id.is_some() && file.name.is_some()
}

/// True if the package carries the NTIA minimum elements (id, name, version
/// and a supplier that is not the `NOASSERTION` sentinel).
#[must_use]
pub fn package_has_min_elements(package: &Package) -> bool {
    package.id.is_some()
        && package.name.is_some()
        && package.version.is_some()
        && package
            .supplier
            .as_deref()
            .is_some_and(|s| s != NOASSERTION)
}

/// Verdict set for the NTIA minimum-elements check.
///
/// Seeded from the document metadata and relationship count, then fed every
/// file and package during the generator's single pass. The validity flags
/// start true and flip false permanently on the first offending entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NtiaConformance {
    /// Every observed file had id and name
    pub files_valid: bool,
    /// Every observed package had id, name, version and a real supplier
    pub packages_valid: bool,
    /// At least one relationship is declared
    pub relationships_valid: bool,
    /// At least one creator pair is named
    pub creator_identified: bool,
    /// A creation timestamp is present
    pub creation_time_identified: bool,
}

impl NtiaConformance {
    /// Seed the verdict set before walking files and packages.
    #[must_use]
    pub fn seed(document: &DocumentInfo, relationship_count: usize) -> Self {
        Self {
            files_valid: true,
            packages_valid: true,
            relationships_valid: relationship_count > 0,
            creator_identified: !document.creators.is_empty(),
            creation_time_identified: document.created.is_some(),
        }
    }

    /// Record one file from the walk.
    pub fn observe_file(&mut self, file: &SbomFile) {
        if !file_has_min_elements(file) {
            self.files_valid = false;
        }
    }

    /// Record one package from the walk.
    pub fn observe_package(&mut self, package: &Package) {
        if !package_has_min_elements(package) {
            self.packages_valid = false;
        }
    }

    /// Aggregate verdict: the AND of all five checks.
    #[must_use]
    pub fn is_conformant(&self) -> bool {
        self.files_valid
            && self.packages_valid
            && self.relationships_valid
            && self.creator_identified
            && self.creation_time_identified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Creator, CreatorKind, DocumentInfo};

    fn document(creators: usize, created: bool) -> DocumentInfo {
        DocumentInfo {
            doc_type: "SPDX".to_string(),
            spec_version: "SPDX-2.3".to_string(),
            name: "test".to_string(),
            creators: (0..creators)
                .map(|i| Creator::new(CreatorKind::Organization, format!("org-{i}")))
                .collect(),
            created: created.then(|| "2023-01-01T00:00:00Z".to_string()),
        }
    }

    fn complete_package() -> Package {
        Package {
            id: Some("P1".to_string()),
            name: Some("libfoo".to_string()),
            version: Some("1.2".to_string()),
            supplier: Some("Acme".to_string()),
            license_concluded: Some("MIT".to_string()),
        }
    }

    #[test]
    fn fully_populated_sbom_is_conformant() {
        let mut verdicts = NtiaConformance::seed(&document(1, true), 1);
        verdicts.observe_package(&complete_package());
        assert!(verdicts.is_conformant());
    }

    #[test]
    fn vacuous_validity_for_empty_collections() {
        let verdicts = NtiaConformance::seed(&document(1, true), 1);
        assert!(verdicts.files_valid);
        assert!(verdicts.packages_valid);
        assert!(verdicts.is_conformant());
    }

    #[test]
    fn noassertion_supplier_flips_packages_valid() {
        let mut verdicts = NtiaConformance::seed(&document(1, true), 1);
        let mut package = complete_package();
        package.supplier = Some(NOASSERTION.to_string());
        verdicts.observe_package(&package);

        assert!(!verdicts.packages_valid);
        assert!(!verdicts.is_conformant());
        // All other checks unaffected.
        assert!(verdicts.files_valid);
        assert!(verdicts.relationships_valid);
        assert!(verdicts.creator_identified);
        assert!(verdicts.creation_time_identified);
    }

    #[test]
    fn missing_package_fields_flip_permanently() {
        let mut verdicts = NtiaConformance::seed(&document(1, true), 1);
        verdicts.observe_package(&Package {
            version: None,
            ..complete_package()
        });
        assert!(!verdicts.packages_valid);

        // A later complete package cannot restore validity.
        verdicts.observe_package(&complete_package());
        assert!(!verdicts.packages_valid);
    }

    #[test]
    fn file_missing_id_or_name_flips_files_valid() {
        let mut verdicts = NtiaConformance::seed(&document(1, true), 1);
        verdicts.observe_file(&SbomFile {
            id: Some("F1".to_string()),
            name: None,
            ..Default::default()
        });
        assert!(!verdicts.files_valid);
    }

    #[test]
    fn zero_relationships_block_conformance() {
        let mut verdicts = NtiaConformance::seed(&document(1, true), 0);
        verdicts.observe_package(&complete_package());
        assert!(!verdicts.relationships_valid);
        assert!(!verdicts.is_conformant());
    }

    #[test]
    fn creator_and_timestamp_checks() {
        let verdicts = NtiaConformance::seed(&document(0, true), 1);
        assert!(!verdicts.creator_identified);

        let verdicts = NtiaConformance::seed(&document(1, false), 1);
        assert!(!verdicts.creation_time_identified);
    }
}
