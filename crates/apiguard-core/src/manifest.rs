//! # Requirement Manifest
//!
//! The fixed compliance policy: which resource paths the contract document
//! must declare, and which verbs each must carry.
//!
//! The manifest is an explicit immutable value handed to the checker,
//! never ambient global state. Entry order is significant: the checker
//! walks entries in declaration order and reports the first violation,
//! so the same manifest always yields the same diagnostic.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::GuardError;
use crate::path::ResourcePath;
use crate::verb::Verb;

/// One required endpoint: a path and the verbs it must declare.
///
/// An empty `verbs` list requires only that the path itself is declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Path that must appear in the route section.
    pub path: ResourcePath,
    /// Verbs that must appear beneath the path, checked in this order.
    #[serde(default)]
    pub verbs: Vec<Verb>,
}

impl Requirement {
    pub fn new(path: ResourcePath, verbs: impl IntoIterator<Item = Verb>) -> Self {
        Self {
            path,
            verbs: verbs.into_iter().collect(),
        }
    }
}

/// Ordered, validated list of [`Requirement`]s.
///
/// # Invariants
///
/// - At least one requirement.
/// - No path appears in more than one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Requirement>", into = "Vec<Requirement>")]
pub struct RequirementManifest {
    requirements: Vec<Requirement>,
}

impl RequirementManifest {
    /// Build a manifest from requirements in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::EmptyManifest`] for an empty list and
    /// [`GuardError::DuplicateRequirement`] if a path repeats.
    pub fn new(requirements: Vec<Requirement>) -> Result<Self, GuardError> {
        if requirements.is_empty() {
            return Err(GuardError::EmptyManifest);
        }
        let mut seen = HashSet::new();
        for req in &requirements {
            if !seen.insert(req.path.as_str()) {
                return Err(GuardError::DuplicateRequirement(req.path.to_string()));
            }
        }
        Ok(Self { requirements })
    }

    /// The baseline endpoints every deployment must expose.
    ///
    /// | Path | Required verbs |
    /// |------|----------------|
    /// | `/_api/healthz` | get |
    /// | `/api/v1/hello/ping` | get |
    /// | `/api/v1/hello/echo` | post |
    pub fn reference() -> Self {
        Self {
            requirements: vec![
                Requirement::new(ResourcePath::from_static("/_api/healthz"), [Verb::Get]),
                Requirement::new(ResourcePath::from_static("/api/v1/hello/ping"), [Verb::Get]),
                Requirement::new(ResourcePath::from_static("/api/v1/hello/echo"), [Verb::Post]),
            ],
        }
    }

    /// Requirements in declaration order.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Requirement> {
        self.requirements.iter()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Always `false` for a constructed manifest; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl Default for RequirementManifest {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<Vec<Requirement>> for RequirementManifest {
    type Error = GuardError;

    fn try_from(value: Vec<Requirement>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RequirementManifest> for Vec<Requirement> {
    fn from(manifest: RequirementManifest) -> Self {
        manifest.requirements
    }
}

impl<'a> IntoIterator for &'a RequirementManifest {
    type Item = &'a Requirement;
    type IntoIter = std::slice::Iter<'a, Requirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.requirements.iter()
    }
}
