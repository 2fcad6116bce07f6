//! # Verify Subcommand
//!
//! Scans the contract document, checks it against the requirement
//! manifest, prints one verdict line, and returns the CI exit code.
//!
//! Verdict lines keep the wording existing pipelines grep for:
//!
//! ```text
//! [verify-openapi] PASS: Required endpoints present in OPENAPI.yaml
//! [verify-openapi] FAIL: Missing path in OPENAPI.yaml: /_api/healthz
//! [verify-openapi] FAIL: Missing method for /api/v1/hello/echo: POST
//! [verify-openapi] FAIL: Spec not found at OPENAPI.yaml
//! ```

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use apiguard_contract::{verify, ContractDocument, ContractError, GuardConfig, Verification};
use apiguard_core::{ComplianceResult, Violation};

use crate::{DocumentArgs, GuardContext, EXIT_ERROR, EXIT_PASS, EXIT_VIOLATION, LOG_PREFIX};

/// Arguments for the `apiguard verify` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Print a machine-readable JSON verdict instead of a status line.
    #[arg(long)]
    pub json: bool,
}

/// Result of one verify run, before rendering.
#[derive(Debug)]
pub enum VerifyOutcome {
    /// The document was read and checked.
    Checked {
        /// Document name as configured, used in messages.
        document: String,
        verification: Verification,
    },
    /// The document could not be read; the check never ran.
    Unreadable {
        /// Document name as configured, used in messages.
        document: String,
        error: ContractError,
    },
}

impl VerifyOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Checked { verification, .. } if verification.result.is_compliant() => EXIT_PASS,
            Self::Checked { .. } => EXIT_VIOLATION,
            Self::Unreadable { .. } => EXIT_ERROR,
        }
    }

    /// Single human-readable verdict line.
    pub fn message(&self) -> String {
        match self {
            Self::Checked { document, verification } => match &verification.result {
                ComplianceResult::Compliant => {
                    format!("{LOG_PREFIX} PASS: Required endpoints present in {document}")
                }
                ComplianceResult::Violated(Violation::MissingPath { path }) => {
                    format!("{LOG_PREFIX} FAIL: Missing path in {document}: {path}")
                }
                ComplianceResult::Violated(Violation::MissingVerb { path, verb }) => {
                    format!(
                        "{LOG_PREFIX} FAIL: Missing method for {path}: {}",
                        verb.as_upper()
                    )
                }
            },
            Self::Unreadable { document, error } => match error {
                ContractError::DocumentNotFound { .. } => {
                    format!("{LOG_PREFIX} FAIL: Spec not found at {document}")
                }
                other => format!("{LOG_PREFIX} FAIL: {other}"),
            },
        }
    }

    /// Machine-readable verdict.
    pub fn report(&self) -> VerdictReport {
        match self {
            Self::Checked { document, verification } => VerdictReport {
                status: if verification.result.is_compliant() { "pass" } else { "fail" },
                document: document.clone(),
                section_found: Some(verification.report.section_found()),
                paths_declared: Some(verification.report.mapping.len()),
                violation: verification.result.violation().cloned(),
                error: None,
            },
            Self::Unreadable { document, error } => VerdictReport {
                status: "error",
                document: document.clone(),
                section_found: None,
                paths_declared: None,
                violation: None,
                error: Some(error.to_string()),
            },
        }
    }
}

/// JSON shape printed by `apiguard verify --json`.
#[derive(Debug, Clone, Serialize)]
pub struct VerdictReport {
    pub status: &'static str,
    pub document: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_found: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths_declared: Option<usize>,
    pub violation: Option<Violation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Load, scan, and check the document named by `config`.
pub fn evaluate(ctx: &GuardContext, config: &GuardConfig) -> VerifyOutcome {
    let document = config.document.display().to_string();
    let path = ctx.document_path(config);

    let doc = match ContractDocument::load(&path) {
        Ok(doc) => doc,
        Err(error) => {
            tracing::debug!(path = %path.display(), error = %error, "contract document unavailable");
            return VerifyOutcome::Unreadable { document, error };
        }
    };

    let verification = verify(&doc, &config.scanner(), &config.required);
    tracing::info!(
        document = %path.display(),
        paths = verification.report.mapping.len(),
        requirements = config.required.len(),
        compliant = verification.result.is_compliant(),
        "contract checked"
    );

    VerifyOutcome::Checked {
        document,
        verification,
    }
}

/// Execute the verify subcommand.
///
/// Returns exit code: 0 when compliant, 1 on a missing path or verb,
/// 2 when the document cannot be read.
pub fn run_verify(args: &VerifyArgs, ctx: &GuardContext) -> Result<u8> {
    let config = ctx.with_overrides(&args.document)?;
    let outcome = evaluate(ctx, &config);
    let code = outcome.exit_code();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.report())?);
    } else if code == EXIT_PASS {
        println!("{}", outcome.message());
    } else {
        eprintln!("{}", outcome.message());
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const BASELINE: &str = "\
paths:
  /_api/healthz:
    get:
  /api/v1/hello/ping:
    get:
  /api/v1/hello/echo:
    post:
";

    fn context_with(doc: Option<&str>) -> (tempfile::TempDir, GuardContext) {
        let dir = tempfile::tempdir().unwrap();
        if let Some(text) = doc {
            std::fs::write(dir.path().join("OPENAPI.yaml"), text).unwrap();
        }
        let ctx = GuardContext {
            repo_root: dir.path().to_path_buf(),
            config: GuardConfig::default(),
        };
        (dir, ctx)
    }

    #[test]
    fn test_pass_message_and_code() {
        let (_dir, ctx) = context_with(Some(BASELINE));
        let outcome = evaluate(&ctx, &ctx.config);
        assert_eq!(outcome.exit_code(), EXIT_PASS);
        assert_eq!(
            outcome.message(),
            "[verify-openapi] PASS: Required endpoints present in OPENAPI.yaml"
        );
    }

    #[test]
    fn test_missing_path_message() {
        let (_dir, ctx) = context_with(Some(&BASELINE.replace("  /_api/healthz:\n    get:\n", "")));
        let outcome = evaluate(&ctx, &ctx.config);
        assert_eq!(outcome.exit_code(), EXIT_VIOLATION);
        assert_eq!(
            outcome.message(),
            "[verify-openapi] FAIL: Missing path in OPENAPI.yaml: /_api/healthz"
        );
    }

    #[test]
    fn test_missing_verb_message() {
        let (_dir, ctx) = context_with(Some(&BASELINE.replace("    post:\n", "")));
        let outcome = evaluate(&ctx, &ctx.config);
        assert_eq!(outcome.exit_code(), EXIT_VIOLATION);
        assert_eq!(
            outcome.message(),
            "[verify-openapi] FAIL: Missing method for /api/v1/hello/echo: POST"
        );
    }

    #[test]
    fn test_missing_document() {
        let (_dir, ctx) = context_with(None);
        let outcome = evaluate(&ctx, &ctx.config);
        assert_eq!(outcome.exit_code(), EXIT_ERROR);
        assert_eq!(outcome.message(), "[verify-openapi] FAIL: Spec not found at OPENAPI.yaml");
        let report = outcome.report();
        assert_eq!(report.status, "error");
        assert!(report.error.is_some());
    }

    #[test]
    fn test_json_report_for_violation() {
        let (_dir, ctx) = context_with(Some("info:\n  title: x\n"));
        let report = evaluate(&ctx, &ctx.config).report();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "fail");
        assert_eq!(value["section_found"], false);
        assert_eq!(value["paths_declared"], 0);
        assert_eq!(value["violation"]["kind"], "missing_path");
        assert_eq!(value["violation"]["path"], "/_api/healthz");
    }

    #[test]
    fn test_run_verify_honours_document_override() {
        let (dir, ctx) = context_with(None);
        std::fs::write(dir.path().join("api.yaml"), BASELINE).unwrap();
        let args = VerifyArgs {
            document: DocumentArgs {
                document: Some(PathBuf::from("api.yaml")),
                section: None,
            },
            json: true,
        };
        assert_eq!(run_verify(&args, &ctx).unwrap(), EXIT_PASS);
    }

    #[test]
    fn test_run_verify_rejects_bad_section_override() {
        let (_dir, ctx) = context_with(Some(BASELINE));
        let args = VerifyArgs {
            document: DocumentArgs {
                document: None,
                section: Some(String::new()),
            },
            json: false,
        };
        assert!(run_verify(&args, &ctx).is_err());
    }

    #[test]
    fn test_absolute_document_path() {
        let (dir, ctx) = context_with(None);
        let abs = dir.path().join("elsewhere.yaml");
        std::fs::write(&abs, BASELINE).unwrap();
        let config = GuardConfig {
            document: abs.clone(),
            ..GuardConfig::default()
        };
        let outcome = evaluate(&ctx, &config);
        assert_eq!(outcome.exit_code(), EXIT_PASS);
        assert!(outcome.message().ends_with(&abs.display().to_string()));
    }
}
