//! Errors raised before the scanner runs: locating and reading the
//! contract document, and loading the guard configuration.
//!
//! The scanner and checker themselves never fail. Malformed document text
//! degrades to a partial or empty mapping, which surfaces as a compliance
//! violation rather than an error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    /// The contract document does not exist.
    #[error("Spec not found at {}", .path.display())]
    DocumentNotFound {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The contract document exists but could not be read as UTF-8 text.
    #[error("cannot read {}: {reason}", .path.display())]
    DocumentUnreadable {
        /// Path of the unreadable document.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },

    /// The configuration file could not be read or parsed.
    #[error("config load error for '{}': {reason}", .path.display())]
    ConfigLoad {
        /// Path to the configuration file.
        path: PathBuf,
        /// Reason the configuration could not be loaded.
        reason: String,
    },

    /// The configuration parsed but is semantically invalid.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
