//! SPDX JSON reader.

use super::non_empty;
use crate::error::{Result, SbomDocError};
use crate::model::{Creator, CreatorKind, DocumentInfo, Package, Relationship, SbomData, SbomFile};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSpdx {
    spdx_version: Option<String>,
    name: Option<String>,
    creation_info: Option<RawCreationInfo>,
    #[serde(default)]
    packages: Vec<RawPackage>,
    #[serde(default)]
    files: Vec<RawFile>,
    #[serde(default)]
    relationships: Vec<RawRelationship>,
}

#[derive(Debug, Deserialize)]
struct RawCreationInfo {
    created: Option<String>,
    #[serde(default)]
    creators: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPackage {
    #[serde(rename = "SPDXID")]
    spdx_id: Option<String>,
    name: Option<String>,
    version_info: Option<String>,
    supplier: Option<String>,
    license_concluded: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFile {
    #[serde(rename = "SPDXID")]
    spdx_id: Option<String>,
    file_name: Option<String>,
    file_types: Option<Vec<String>>,
    license_concluded: Option<String>,
    copyright_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRelationship {
    spdx_element_id: Option<String>,
    related_spdx_element: Option<String>,
    relationship_type: Option<String>,
}

/// Parse an SPDX JSON document into [`SbomData`].
pub fn parse_spdx(content: &str) -> Result<SbomData> {
    let raw: RawSpdx = serde_json::from_str(content)?;

    let spec_version = non_empty(raw.spdx_version)
        .ok_or_else(|| SbomDocError::missing_field("spdxVersion", "SPDX document"))?;
    let name = non_empty(raw.name)
        .ok_or_else(|| SbomDocError::missing_field("name", "SPDX document"))?;

    let (created, creators) = match raw.creation_info {
        Some(info) => (
            non_empty(info.created),
            info.creators
                .iter()
                .filter_map(|c| parse_creator(c))
                .collect(),
        ),
        None => (None, Vec::new()),
    };

    let document = DocumentInfo {
        doc_type: "SPDX".to_string(),
        spec_version,
        name,
        creators,
        created,
    };

    let packages = raw
        .packages
        .into_iter()
        .map(|p| Package {
            id: non_empty(p.spdx_id),
            name: non_empty(p.name),
            version: non_empty(p.version_info),
            supplier: non_empty(p.supplier).map(|s| strip_actor_prefix(&s)),
            license_concluded: non_empty(p.license_concluded),
        })
        .collect();

    let files = raw
        .files
        .into_iter()
        .map(|f| SbomFile {
            id: non_empty(f.spdx_id),
            name: non_empty(f.file_name),
            file_types: f.file_types.filter(|t| !t.is_empty()),
            license_concluded: non_empty(f.license_concluded),
            copyright_text: non_empty(f.copyright_text),
        })
        .collect();

    let relationships = raw
        .relationships
        .into_iter()
        .filter_map(|r| {
            Some(Relationship {
                source: non_empty(r.spdx_element_id)?,
                target: non_empty(r.related_spdx_element)?,
                kind: non_empty(r.relationship_type).unwrap_or_else(|| "OTHER".to_string()),
            })
        })
        .collect();

    Ok(SbomData {
        document,
        packages,
        files,
        relationships,
    })
}

/// Parse an SPDX creator string of the form `Organization: Acme`.
/// Entries with an unrecognized kind prefix are skipped.
fn parse_creator(value: &str) -> Option<Creator> {
    let (kind, name) = value.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let kind = match kind.trim() {
        "Person" => CreatorKind::Person,
        "Organization" => CreatorKind::Organization,
        "Tool" => CreatorKind::Tool,
        _ => return None,
    };
    Some(Creator::new(kind, name))
}

/// Strip the `Organization:`/`Person:` actor prefix from a supplier value.
/// Sentinels like `NOASSERTION` carry no prefix and pass through verbatim.
fn strip_actor_prefix(value: &str) -> String {
    for prefix in ["Organization:", "Person:"] {
        if let Some(rest) = value.strip_prefix(prefix) {
            return rest.trim().to_string();
        }
    }
    value.trim().to_string()
}
