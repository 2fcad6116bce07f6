//! # apiguard-cli — Contract Guard CLI
//!
//! Provides the `apiguard` command-line interface, run as a CI build step
//! to block merges that drop a required endpoint from the API contract.
//!
//! ## Subcommands
//!
//! - `apiguard verify` — Scan the contract and check the manifest.
//! - `apiguard scan` — Print the paths and verbs the scanner extracts.
//! - `apiguard manifest` — Print the effective requirement manifest.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Every required endpoint is declared. |
//! | 1 | A required path or verb is missing. |
//! | 2 | The document or config could not be loaded. |
//!
//! ```bash
//! apiguard verify
//! apiguard verify --document api/openapi.yaml --json
//! apiguard --config ci/apiguard.yaml scan --format yaml
//! ```

pub mod manifest;
pub mod scan;
pub mod verify;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use apiguard_contract::{GuardConfig, CONFIG_FILE_NAME, DEFAULT_DOCUMENT};

/// Exit code for a compliant contract.
pub const EXIT_PASS: u8 = 0;
/// Exit code for a missing path or verb.
pub const EXIT_VIOLATION: u8 = 1;
/// Exit code for an unreadable document or invalid config.
pub const EXIT_ERROR: u8 = 2;

/// Prefix on every human-readable verdict line.
pub const LOG_PREFIX: &str = "[verify-openapi]";

/// Structured output format for `scan` and `manifest`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// Render `value` in this format.
    pub fn render<T: serde::Serialize>(self, value: &T) -> Result<String> {
        match self {
            Self::Json => serde_json::to_string_pretty(value).context("failed to render JSON"),
            Self::Yaml => serde_yaml::to_string(value).context("failed to render YAML"),
        }
    }
}

/// Document selection flags shared by `verify` and `scan`.
#[derive(Args, Debug, Clone, Default)]
pub struct DocumentArgs {
    /// Contract document to scan (overrides the config file).
    #[arg(long, value_name = "PATH")]
    pub document: Option<PathBuf>,

    /// Top-level section key holding route declarations (overrides the config file).
    #[arg(long, value_name = "KEY")]
    pub section: Option<String>,
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct GuardContext {
    /// Directory relative document paths are resolved against.
    pub repo_root: PathBuf,
    /// Effective configuration after file loading.
    pub config: GuardConfig,
}

impl GuardContext {
    /// Load configuration from `config_path`, or from `apiguard.yaml` at the
    /// repository root when present, or fall back to the reference defaults.
    pub fn resolve(config_path: Option<&Path>, repo_root: PathBuf) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                let resolved = resolve_path(path, &repo_root);
                GuardConfig::load(&resolved)
                    .with_context(|| format!("failed to load config {}", resolved.display()))?
            }
            None => {
                let conventional = repo_root.join(CONFIG_FILE_NAME);
                if conventional.is_file() {
                    GuardConfig::load(&conventional).with_context(|| {
                        format!("failed to load config {}", conventional.display())
                    })?
                } else {
                    tracing::debug!("no {CONFIG_FILE_NAME} found; using reference manifest");
                    GuardConfig::default()
                }
            }
        };

        Ok(Self { repo_root, config })
    }

    /// Apply `--document` / `--section` overrides.
    pub fn with_overrides(&self, args: &DocumentArgs) -> Result<GuardConfig> {
        let mut config = self.config.clone();
        if let Some(document) = &args.document {
            config.document = document.clone();
        }
        if let Some(section) = &args.section {
            config.section = section.clone();
        }
        config.validate().context("invalid command-line override")?;
        Ok(config)
    }

    /// Where the configured document lives on disk.
    pub fn document_path(&self, config: &GuardConfig) -> PathBuf {
        resolve_path(&config.document, &self.repo_root)
    }
}

/// Resolve a path that may be relative to the repository root.
///
/// Absolute paths are returned as-is. A relative path that exists under
/// `repo_root` resolves there; otherwise it is left relative to the
/// current directory.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let repo_relative = repo_root.join(path);
    if repo_relative.exists() {
        repo_relative
    } else {
        path.to_path_buf()
    }
}

/// Walk up from `start` to the nearest directory holding `apiguard.yaml`
/// or `OPENAPI.yaml`.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(CONFIG_FILE_NAME).is_file() || dir.join(DEFAULT_DOCUMENT).is_file() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_repo_root_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_DOCUMENT), "paths:\n").unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_repo_root(&nested).unwrap(), dir.path());
    }

    #[test]
    fn test_resolve_path_prefers_repo_relative() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("contract.yaml"), "").unwrap();
        assert_eq!(
            resolve_path(Path::new("contract.yaml"), dir.path()),
            dir.path().join("contract.yaml")
        );
        assert_eq!(
            resolve_path(Path::new("absent.yaml"), dir.path()),
            PathBuf::from("absent.yaml")
        );
    }

    #[test]
    fn test_context_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = GuardContext::resolve(None, dir.path().to_path_buf()).unwrap();
        assert_eq!(ctx.config, GuardConfig::default());
    }

    #[test]
    fn test_context_picks_up_conventional_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "section: webhooks\n").unwrap();
        let ctx = GuardContext::resolve(None, dir.path().to_path_buf()).unwrap();
        assert_eq!(ctx.config.section, "webhooks");
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = GuardContext::resolve(Some(Path::new("nope.yaml")), dir.path().to_path_buf());
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_are_validated() {
        let ctx = GuardContext {
            repo_root: PathBuf::from("."),
            config: GuardConfig::default(),
        };
        let args = DocumentArgs {
            document: Some(PathBuf::from("other.yaml")),
            section: Some("webhooks".into()),
        };
        let config = ctx.with_overrides(&args).unwrap();
        assert_eq!(config.document, PathBuf::from("other.yaml"));
        assert_eq!(config.section, "webhooks");

        let bad = DocumentArgs {
            document: None,
            section: Some("a b".into()),
        };
        assert!(ctx.with_overrides(&bad).is_err());
    }

    #[test]
    fn test_output_format_render() {
        let value = serde_json::json!({"a": [1]});
        assert!(OutputFormat::Json.render(&value).unwrap().contains("\"a\""));
        assert!(OutputFormat::Yaml.render(&value).unwrap().starts_with("a:"));
    }
}
