//! # Compliance Verdicts
//!
//! The outcome of comparing a declared mapping against a requirement
//! manifest. A verdict carries at most one violation: the first one found
//! in manifest order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::ResourcePath;
use crate::verb::Verb;

/// The first unmet requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A required path is not declared in the route section.
    MissingPath {
        /// The undeclared path.
        path: ResourcePath,
    },
    /// A required path is declared but lacks a required verb.
    MissingVerb {
        /// The declared path.
        path: ResourcePath,
        /// The verb not declared beneath it.
        verb: Verb,
    },
}

impl Violation {
    /// The path the violation concerns.
    pub fn path(&self) -> &ResourcePath {
        match self {
            Self::MissingPath { path } | Self::MissingVerb { path, .. } => path,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPath { path } => write!(f, "missing path: {path}"),
            Self::MissingVerb { path, verb } => {
                write!(f, "missing method for {path}: {}", verb.as_upper())
            }
        }
    }
}

/// Binary pass/fail verdict of one compliance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "violation", rename_all = "snake_case")]
pub enum ComplianceResult {
    /// Every requirement is satisfied.
    Compliant,
    /// At least one requirement is unmet; the first one is carried.
    Violated(Violation),
}

impl ComplianceResult {
    pub fn is_compliant(&self) -> bool {
        matches!(self, Self::Compliant)
    }

    /// The violation, if any.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Compliant => None,
            Self::Violated(v) => Some(v),
        }
    }
}

impl From<Violation> for ComplianceResult {
    fn from(violation: Violation) -> Self {
        Self::Violated(violation)
    }
}
