//! # Compliance Checker
//!
//! Validates a [`DeclaredMapping`] against a [`RequirementManifest`].
//!
//! The check is fail-fast: manifest entries are walked in declaration
//! order and the first unmet requirement is returned. There is no partial
//! credit and no aggregate report. Neither input is mutated.

use apiguard_core::{ComplianceResult, DeclaredMapping, RequirementManifest, Violation};

/// Checks declared mappings against one fixed manifest.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceChecker<'m> {
    manifest: &'m RequirementManifest,
}

impl<'m> ComplianceChecker<'m> {
    pub fn new(manifest: &'m RequirementManifest) -> Self {
        Self { manifest }
    }

    pub fn manifest(&self) -> &RequirementManifest {
        self.manifest
    }

    /// Return the first violation in manifest order, or `Compliant`.
    pub fn check(&self, declared: &DeclaredMapping) -> ComplianceResult {
        for requirement in self.manifest {
            let Some(verbs) = declared.verbs(&requirement.path) else {
                tracing::debug!(path = %requirement.path, "required path not declared");
                return Violation::MissingPath {
                    path: requirement.path.clone(),
                }
                .into();
            };

            if let Some(verb) = requirement.verbs.iter().copied().find(|v| !verbs.contains(*v)) {
                tracing::debug!(path = %requirement.path, verb = %verb, "required verb not declared");
                return Violation::MissingVerb {
                    path: requirement.path.clone(),
                    verb,
                }
                .into();
            }
        }

        ComplianceResult::Compliant
    }
}

/// Check `declared` against `manifest`.
pub fn check(manifest: &RequirementManifest, declared: &DeclaredMapping) -> ComplianceResult {
    ComplianceChecker::new(manifest).check(declared)
}
