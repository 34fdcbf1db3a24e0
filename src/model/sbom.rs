//! Core SBOM component data structures.

use super::DocumentInfo;
use serde::{Deserialize, Serialize};

/// A software package recorded in the SBOM.
///
/// Every field except the identifier may legitimately be absent in real-world
/// documents; the renderer substitutes placeholders and the conformance
/// checker records the gaps. `supplier` may carry the literal `NOASSERTION`
/// sentinel, which is distinct from an absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Format-specific identifier (e.g. SPDXID, bom-ref)
    pub id: Option<String>,
    /// Package name
    pub name: Option<String>,
    /// Package version
    pub version: Option<String>,
    /// Supplier name
    pub supplier: Option<String>,
    /// Concluded license
    pub license_concluded: Option<String>,
}

/// A file recorded in the SBOM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbomFile {
    /// Format-specific identifier
    pub id: Option<String>,
    /// File name
    pub name: Option<String>,
    /// File type tags (e.g. SOURCE, BINARY)
    pub file_types: Option<Vec<String>>,
    /// Concluded license
    pub license_concluded: Option<String>,
    /// Copyright text
    pub copyright_text: Option<String>,
}

/// A relationship edge between two components.
///
/// The report consumes only the count of relationships; the endpoints are kept
/// so callers can inspect the graph if they need to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Source element identifier
    pub source: String,
    /// Target element identifier
    pub target: String,
    /// Relationship kind (DEPENDS_ON, CONTAINS, ...)
    pub kind: String,
}

/// Parsed SBOM content: document metadata plus the component collections the
/// report generator walks exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SbomData {
    /// Document-level metadata
    pub document: DocumentInfo,
    /// Packages in document order
    pub packages: Vec<Package>,
    /// Files in document order
    pub files: Vec<SbomFile>,
    /// Relationship edges
    pub relationships: Vec<Relationship>,
}

impl SbomData {
    /// Create an SBOM with metadata only
    #[must_use]
    pub fn new(document: DocumentInfo) -> Self {
        Self {
            document,
            packages: Vec::new(),
            files: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Number of packages
    #[must_use]
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Number of files
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of relationship edges
    #[must_use]
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}
