//! # apiguard-contract — Contract Drift Detection
//!
//! Detects drift between an OpenAPI-style contract document and a fixed
//! set of required endpoints.
//!
//! ## Pipeline
//!
//! 1. [`ContractDocument::load`] reads the document once. A missing file
//!    is reported here; nothing downstream ever sees it.
//! 2. [`StructureScanner`] extracts a [`DeclaredMapping`] from the route
//!    section with a line-oriented state machine. No YAML parser is used:
//!    only the shallow `section -> path -> verb` shape is inspected.
//! 3. [`ComplianceChecker`] compares the mapping with a
//!    [`RequirementManifest`] and reports the first unmet requirement.
//!
//! [`verify`] runs steps 2 and 3 together.
//!
//! ## Crate Policy
//!
//! - Depends only on `apiguard-core` internally.
//! - Scanning and checking never fail; only document and config loading
//!   return errors.
//!
//! [`DeclaredMapping`]: apiguard_core::DeclaredMapping
//! [`RequirementManifest`]: apiguard_core::RequirementManifest

pub mod checker;
pub mod config;
pub mod document;
pub mod error;
pub mod scanner;

pub use checker::{check, ComplianceChecker};
pub use config::{GuardConfig, CONFIG_FILE_NAME, DEFAULT_DOCUMENT};
pub use document::ContractDocument;
pub use error::ContractError;
pub use scanner::{scan, ScanReport, SectionMarker, StructureScanner, Termination};

use apiguard_core::{ComplianceResult, RequirementManifest};

/// Scan diagnostics and the verdict of one guard run.
#[derive(Debug, Clone)]
pub struct Verification {
    pub report: ScanReport,
    pub result: ComplianceResult,
}

/// Scan `document` and check it against `manifest`.
pub fn verify(
    document: &ContractDocument,
    scanner: &StructureScanner,
    manifest: &RequirementManifest,
) -> Verification {
    let report = scanner.scan_report(document.text());
    if !report.section_found() {
        tracing::info!(
            document = %document.path().display(),
            section = scanner.section(),
            "section marker not found; no paths declared"
        );
    }
    let result = check(manifest, &report.mapping);
    Verification { report, result }
}
