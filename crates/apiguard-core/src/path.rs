//! # Resource Paths
//!
//! Newtype wrapper for declared endpoint identifiers such as
//! `/api/v1/hello/ping`.
//!
//! ## Matching Invariant
//!
//! Paths are compared by exact string equality. No normalization of
//! trailing slashes, case, or percent-encoding is ever applied, so the
//! manifest must spell a path exactly as the contract document does.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GuardError;

/// A declared resource path, conventionally beginning with `/`.
///
/// Construction rejects text that could never match a scanned path key:
/// empty strings, text not starting with `/`, surrounding whitespace, and
/// embedded colons.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourcePath(String);

impl ResourcePath {
    /// Create a resource path from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::InvalidPath`] if the text is not a usable
    /// path key.
    pub fn new(path: impl Into<String>) -> Result<Self, GuardError> {
        let path = path.into();
        let reason = if path.is_empty() {
            Some("path is empty")
        } else if !path.starts_with('/') {
            Some("path must start with '/'")
        } else if path.trim() != path {
            Some("path has leading or trailing whitespace")
        } else if path.contains(':') {
            Some("path must not contain ':'")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(GuardError::InvalidPath {
                path,
                reason: reason.to_string(),
            }),
            None => Ok(Self(path)),
        }
    }

    /// Wrap text already known to be a valid path key.
    pub(crate) fn from_static(path: &'static str) -> Self {
        debug_assert!(Self::new(path).is_ok(), "invalid static path {path}");
        Self(path.to_string())
    }

    /// Access the path text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ResourcePath {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ResourcePath {
    type Error = GuardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourcePath> for String {
    fn from(path: ResourcePath) -> Self {
        path.0
    }
}

impl AsRef<str> for ResourcePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
