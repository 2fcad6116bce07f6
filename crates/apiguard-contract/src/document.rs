//! # Contract Document Loading
//!
//! Reads the contract document once, up front. A missing or unreadable
//! file is reported here so the scanner only ever receives text.

use std::path::{Path, PathBuf};

use crate::error::ContractError;

/// The raw text of a contract document and where it came from.
#[derive(Debug, Clone)]
pub struct ContractDocument {
    path: PathBuf,
    text: String,
}

impl ContractDocument {
    /// Read the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::DocumentNotFound`] if nothing exists at
    /// `path`, and [`ContractError::DocumentUnreadable`] if it cannot be
    /// read as UTF-8 text (including when `path` is a directory).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContractError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(ContractError::DocumentNotFound { path });
        }

        let text = std::fs::read_to_string(&path).map_err(|e| {
            ContractError::DocumentUnreadable {
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;

        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded contract document");
        Ok(Self { path, text })
    }

    /// Wrap text that did not come from disk.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
