//! Data model for parsed SBOM content.
//!
//! The report generator treats everything in this module as read-only input;
//! derived data (license frequencies, conformance flags) lives in the `report`
//! module and is recomputed on every rendering pass.

mod metadata;
mod sbom;

pub use metadata::{Creator, CreatorKind, DocumentInfo};
pub use sbom::{Package, Relationship, SbomData, SbomFile};
