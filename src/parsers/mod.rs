//! SBOM format parsers.
//!
//! Minimal readers for the two dominant JSON encodings, producing the
//! [`SbomData`] collections the report generator walks. Format detection is
//! marker-based: an `spdxVersion` key selects the SPDX reader, a
//! `"bomFormat": "CycloneDX"` pair selects the CycloneDX reader, anything
//! else is rejected before any rendering work begins.
//!
//! Schema validation is out of scope: the readers extract the fields the
//! report consumes and normalize empty strings to `None`; only a document
//! missing its type, version or name is fatal.

mod cyclonedx;
mod spdx;

pub use cyclonedx::parse_cyclonedx;
pub use spdx::parse_spdx;

use crate::error::{Result, SbomDocError};
use crate::model::SbomData;
use std::path::Path;

/// SBOM encodings the readers understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedFormat {
    Spdx,
    CycloneDx,
}

/// Detect the SBOM format from raw content without parsing.
#[must_use]
pub fn detect_format(content: &str) -> Option<DetectedFormat> {
    if content.contains("\"spdxVersion\"") {
        Some(DetectedFormat::Spdx)
    } else if content.contains("\"bomFormat\"") && content.contains("CycloneDX") {
        Some(DetectedFormat::CycloneDx)
    } else {
        None
    }
}

/// Parse an SBOM file, auto-detecting its format.
pub fn parse_sbom(path: &Path) -> Result<SbomData> {
    let content = std::fs::read_to_string(path).map_err(|e| SbomDocError::io(path, e))?;
    parse_sbom_str(&content, &path.display().to_string())
}

/// Parse SBOM content, auto-detecting its format. `source` names the input in
/// error messages.
pub fn parse_sbom_str(content: &str, source: &str) -> Result<SbomData> {
    match detect_format(content) {
        Some(DetectedFormat::Spdx) => parse_spdx(content),
        Some(DetectedFormat::CycloneDx) => parse_cyclonedx(content),
        None => Err(SbomDocError::unknown_format(source)),
    }
}

/// Normalize an optional string, treating the empty string as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
