//! Parser integration tests against the fixture documents.

use sbom_doc::model::CreatorKind;
use sbom_doc::parsers::parse_sbom;
use std::path::Path;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

#[test]
fn parse_spdx_minimal() {
    let sbom = parse_sbom(&fixture_path("spdx/minimal.spdx.json")).expect("parse SPDX fixture");

    assert_eq!(sbom.document.doc_type, "SPDX");
    assert_eq!(sbom.document.spec_version, "SPDX-2.3");
    assert_eq!(sbom.document.name, "sample-app");
    assert_eq!(sbom.package_count(), 2);
    assert_eq!(sbom.file_count(), 1);
    assert_eq!(sbom.relationship_count(), 2);

    let libfoo = sbom
        .packages
        .iter()
        .find(|p| p.name.as_deref() == Some("libfoo"))
        .expect("libfoo present");
    assert_eq!(libfoo.version.as_deref(), Some("1.2"));
    assert_eq!(libfoo.supplier.as_deref(), Some("Acme"));
    assert_eq!(libfoo.license_concluded.as_deref(), Some("MIT"));
}

#[test]
fn parse_cyclonedx_minimal() {
    let sbom =
        parse_sbom(&fixture_path("cyclonedx/minimal.cdx.json")).expect("parse CycloneDX fixture");

    assert_eq!(sbom.document.doc_type, "CycloneDX");
    assert_eq!(sbom.document.spec_version, "1.5");
    assert_eq!(sbom.document.name, "sample-app");
    assert_eq!(sbom.package_count(), 2);
    assert_eq!(sbom.relationship_count(), 1);

    // One author plus one tool entry.
    assert_eq!(sbom.document.creators.len(), 2);
    assert!(sbom
        .document
        .creators
        .iter()
        .any(|c| c.kind == CreatorKind::Tool && c.name == "sbom-gen"));
}

#[test]
fn fixtures_render_conformant_reports() {
    use sbom_doc::{builder::MarkdownBuilder, generate_document};

    for fixture in ["spdx/minimal.spdx.json", "cyclonedx/minimal.cdx.json"] {
        let sbom = parse_sbom(&fixture_path(fixture)).expect("parse fixture");
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.md");

        let mut builder = MarkdownBuilder::new();
        let summary =
            generate_document(&sbom, fixture, &mut builder, Some(&path)).expect("render fixture");

        assert!(summary.is_conformant(), "{fixture} should be conformant");
        assert!(summary.licenses.iter().any(|(l, _)| l == "MIT"));
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = parse_sbom(Path::new("/nonexistent/input.json")).expect_err("no such file");
    assert!(err.to_string().contains("IO error"));
}
