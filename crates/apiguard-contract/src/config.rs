//! # Guard Configuration
//!
//! Optional YAML file (conventionally `apiguard.yaml`) naming the contract
//! document, the route section key, and the requirement manifest:
//!
//! ```yaml
//! document: OPENAPI.yaml
//! section: paths
//! required:
//!   - path: /_api/healthz
//!     verbs: [get]
//! ```
//!
//! Every field is optional. Omitted fields take the reference defaults, so
//! an empty file behaves exactly like no file at all.

use std::path::{Path, PathBuf};

use apiguard_core::RequirementManifest;
use serde::{Deserialize, Serialize};

use crate::error::ContractError;
use crate::scanner::StructureScanner;

/// Conventional config filename looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = "apiguard.yaml";

/// Conventional contract document filename.
pub const DEFAULT_DOCUMENT: &str = "OPENAPI.yaml";

fn default_document() -> PathBuf {
    PathBuf::from(DEFAULT_DOCUMENT)
}

fn default_section() -> String {
    StructureScanner::DEFAULT_SECTION.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardConfig {
    /// Contract document, relative paths resolved against the repo root.
    #[serde(default = "default_document")]
    pub document: PathBuf,

    /// Top-level key holding route declarations.
    #[serde(default = "default_section")]
    pub section: String,

    /// Endpoints the document must declare, in check order.
    #[serde(default)]
    pub required: RequirementManifest,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
            section: default_section(),
            required: RequirementManifest::reference(),
        }
    }
}

impl GuardConfig {
    /// Load and validate the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ConfigLoad`] if the file cannot be read or
    /// is not valid YAML for this schema, and
    /// [`ContractError::InvalidConfig`] if a field value is unusable.
    pub fn load(path: &Path) -> Result<Self, ContractError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContractError::ConfigLoad {
            path: path.to_path_buf(),
            reason: format!("cannot read file: {e}"),
        })?;

        let config = Self::from_yaml_str(&content).map_err(|e| match e {
            ContractError::ConfigLoad { reason, .. } => ContractError::ConfigLoad {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            requirements = config.required.len(),
            "loaded guard config"
        );
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ContractError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self =
            serde_yaml::from_str(content).map_err(|e| ContractError::ConfigLoad {
                path: PathBuf::from("<inline>"),
                reason: format!("invalid YAML: {e}"),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject section keys the scanner could never match.
    pub fn validate(&self) -> Result<(), ContractError> {
        let section = self.section.as_str();
        if section.is_empty() {
            return Err(ContractError::InvalidConfig("section must not be empty".into()));
        }
        if section.contains(':') || section.chars().any(char::is_whitespace) {
            return Err(ContractError::InvalidConfig(format!(
                "section '{section}' must be a bare key without ':' or whitespace"
            )));
        }
        if self.document.as_os_str().is_empty() {
            return Err(ContractError::InvalidConfig("document must not be empty".into()));
        }
        Ok(())
    }

    /// Scanner for the configured section.
    pub fn scanner(&self) -> StructureScanner {
        StructureScanner::new(self.section.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiguard_core::Verb;

    #[test]
    fn test_empty_config_is_reference() {
        assert_eq!(GuardConfig::from_yaml_str("").unwrap(), GuardConfig::default());
        assert_eq!(GuardConfig::from_yaml_str("  \n").unwrap(), GuardConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = GuardConfig::from_yaml_str("section: webhooks\n").unwrap();
        assert_eq!(config.section, "webhooks");
        assert_eq!(config.document, PathBuf::from("OPENAPI.yaml"));
        assert_eq!(config.required, RequirementManifest::reference());
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
document: api/openapi.yml
section: paths
required:
  - path: /v2/items
    verbs: [get, POST]
  - path: /v2/items/{id}
"#;
        let config = GuardConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.document, PathBuf::from("api/openapi.yml"));
        assert_eq!(config.required.len(), 2);
        assert_eq!(config.required.requirements()[0].verbs, vec![Verb::Get, Verb::Post]);
        assert!(config.required.requirements()[1].verbs.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = GuardConfig::from_yaml_str("documnet: x.yaml\n").unwrap_err();
        assert!(matches!(err, ContractError::ConfigLoad { .. }));
    }

    #[test]
    fn test_bad_section_rejected() {
        for yaml in ["section: ''\n", "section: 'a b'\n", "section: 'paths:'\n"] {
            let err = GuardConfig::from_yaml_str(yaml).unwrap_err();
            assert!(
                matches!(err, ContractError::InvalidConfig(_)),
                "expected InvalidConfig for {yaml:?}, got {err}"
            );
        }
    }

    #[test]
    fn test_invalid_manifest_rejected() {
        assert!(GuardConfig::from_yaml_str("required: []\n").is_err());
        assert!(GuardConfig::from_yaml_str("required:\n  - path: no-slash\n").is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&file, "required: [").unwrap();
        match GuardConfig::load(&file).unwrap_err() {
            ContractError::ConfigLoad { path, .. } => assert_eq!(path, file),
            other => panic!("expected ConfigLoad, got {other}"),
        }
    }

    #[test]
    fn test_scanner_uses_section() {
        let config = GuardConfig::from_yaml_str("section: webhooks\n").unwrap();
        assert_eq!(config.scanner().section(), "webhooks");
    }
}
