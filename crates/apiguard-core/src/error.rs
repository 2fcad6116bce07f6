//! # Error Types
//!
//! Errors raised while constructing the domain types of this crate.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Compliance failures (a missing path or verb) are NOT errors: they are
//! ordinary values of [`crate::ComplianceResult`]. The variants here cover
//! malformed configuration only.

use thiserror::Error;

/// Top-level error type for apiguard domain construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// A verb token outside the recognized HTTP verb set.
    #[error("unknown HTTP verb '{0}'; expected one of get, post, put, patch, delete, options, head")]
    UnknownVerb(String),

    /// A resource path that cannot be used as a lookup key.
    #[error("invalid resource path '{path}': {reason}")]
    InvalidPath {
        /// The rejected path text.
        path: String,
        /// Why the path was rejected.
        reason: String,
    },

    /// A manifest with no requirements would pass every document.
    #[error("requirement manifest is empty")]
    EmptyManifest,

    /// The same path appears in more than one manifest entry.
    #[error("requirement for '{0}' is declared more than once")]
    DuplicateRequirement(String),
}
