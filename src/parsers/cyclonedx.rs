//! CycloneDX JSON reader.

use super::non_empty;
use crate::error::{Result, SbomDocError};
use crate::model::{Creator, CreatorKind, DocumentInfo, Package, Relationship, SbomData, SbomFile};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBom {
    bom_format: Option<String>,
    spec_version: Option<String>,
    metadata: Option<RawMetadata>,
    #[serde(default)]
    components: Vec<RawComponent>,
    #[serde(default)]
    dependencies: Vec<RawDependency>,
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    timestamp: Option<String>,
    #[serde(default)]
    authors: Vec<RawAuthor>,
    /// Polymorphic across spec versions: an array of tool objects (1.4) or an
    /// object holding a `components` array (1.5+).
    tools: Option<Value>,
    component: Option<RawComponent>,
}

#[derive(Debug, Deserialize)]
struct RawAuthor {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawComponent {
    #[serde(rename = "bom-ref")]
    bom_ref: Option<String>,
    #[serde(rename = "type")]
    component_type: Option<String>,
    name: Option<String>,
    version: Option<String>,
    supplier: Option<RawSupplier>,
    #[serde(default)]
    licenses: Vec<RawLicenseChoice>,
    copyright: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSupplier {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLicenseChoice {
    license: Option<RawLicense>,
    expression: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLicense {
    id: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDependency {
    #[serde(rename = "ref")]
    dep_ref: Option<String>,
    #[serde(rename = "dependsOn", default)]
    depends_on: Vec<String>,
}

/// Parse a CycloneDX JSON document into [`SbomData`].
pub fn parse_cyclonedx(content: &str) -> Result<SbomData> {
    let raw: RawBom = serde_json::from_str(content)?;

    let doc_type = non_empty(raw.bom_format)
        .ok_or_else(|| SbomDocError::missing_field("bomFormat", "CycloneDX document"))?;
    let spec_version = non_empty(raw.spec_version)
        .ok_or_else(|| SbomDocError::missing_field("specVersion", "CycloneDX document"))?;

    let mut creators = Vec::new();
    let mut created = None;
    let mut name = None;
    if let Some(metadata) = raw.metadata {
        created = non_empty(metadata.timestamp);
        for author in metadata.authors {
            if let Some(author_name) = non_empty(author.name) {
                creators.push(Creator::new(CreatorKind::Person, author_name));
            }
        }
        for tool_name in tool_names(metadata.tools.as_ref()) {
            creators.push(Creator::new(CreatorKind::Tool, tool_name));
        }
        name = metadata.component.and_then(|c| non_empty(c.name));
    }
    let name = name.ok_or_else(|| {
        SbomDocError::missing_field("metadata.component.name", "CycloneDX document")
    })?;

    let document = DocumentInfo {
        doc_type,
        spec_version,
        name,
        creators,
        created,
    };

    let mut packages = Vec::new();
    let mut files = Vec::new();
    for component in raw.components {
        let license = first_license(&component.licenses);
        if component.component_type.as_deref() == Some("file") {
            files.push(SbomFile {
                id: non_empty(component.bom_ref),
                name: non_empty(component.name),
                file_types: None,
                license_concluded: license,
                copyright_text: non_empty(component.copyright),
            });
        } else {
            packages.push(Package {
                id: non_empty(component.bom_ref),
                name: non_empty(component.name),
                version: non_empty(component.version),
                supplier: component.supplier.and_then(|s| non_empty(s.name)),
                license_concluded: license,
            });
        }
    }

    let mut relationships = Vec::new();
    for dependency in raw.dependencies {
        let Some(source) = non_empty(dependency.dep_ref) else {
            continue;
        };
        for target in dependency.depends_on {
            relationships.push(Relationship {
                source: source.clone(),
                target,
                kind: "DEPENDS_ON".to_string(),
            });
        }
    }

    Ok(SbomData {
        document,
        packages,
        files,
        relationships,
    })
}

/// Extract tool names from either `metadata.tools` shape.
fn tool_names(tools: Option<&Value>) -> Vec<String> {
    let mut names = Vec::new();
    match tools {
        Some(Value::Array(entries)) => {
            for entry in entries {
                if let Some(tool_name) = entry.get("name").and_then(Value::as_str) {
                    names.push(tool_name.to_string());
                }
            }
        }
        Some(Value::Object(map)) => {
            if let Some(Value::Array(components)) = map.get("components") {
                for entry in components {
                    if let Some(tool_name) = entry.get("name").and_then(Value::as_str) {
                        names.push(tool_name.to_string());
                    }
                }
            }
        }
        _ => {}
    }
    names
}

/// Pick the first usable license value: expression, then id, then name.
fn first_license(licenses: &[RawLicenseChoice]) -> Option<String> {
    for choice in licenses {
        if let Some(expression) = choice.expression.as_deref() {
            if !expression.is_empty() {
                return Some(expression.to_string());
            }
        }
        if let Some(license) = &choice.license {
            if let Some(id) = license.id.as_deref().filter(|s| !s.is_empty()) {
                return Some(id.to_string());
            }
            if let Some(license_name) = license.name.as_deref().filter(|s| !s.is_empty()) {
                return Some(license_name.to_string());
            }
        }
    }
    None
}
