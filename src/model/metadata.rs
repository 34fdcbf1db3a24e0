//! Document-level metadata structures.

use serde::{Deserialize, Serialize};

/// Type of creator named in the document metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatorKind {
    Person,
    Organization,
    Tool,
}

impl std::fmt::Display for CreatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Person => write!(f, "Person"),
            Self::Organization => write!(f, "Organization"),
            Self::Tool => write!(f, "Tool"),
        }
    }
}

/// Creator information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    /// Creator type
    pub kind: CreatorKind,
    /// Creator name or identifier
    pub name: String,
}

impl Creator {
    pub fn new(kind: CreatorKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Document-level metadata.
///
/// Type, spec version and name are required: a document missing any of them is
/// rejected by the parser before rendering starts. The creation timestamp is
/// optional and its absence is one of the NTIA conformance checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// SBOM document type (e.g. "SPDX", "CycloneDX")
    pub doc_type: String,
    /// Specification version (e.g. "SPDX-2.3", "1.5")
    pub spec_version: String,
    /// Document name
    pub name: String,
    /// Creators/authors, in document order
    pub creators: Vec<Creator>,
    /// Creation timestamp as recorded in the document
    pub created: Option<String>,
}
