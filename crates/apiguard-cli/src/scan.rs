//! # Scan Subcommand
//!
//! Prints what the structure scanner extracts from the contract document.
//! Useful when `verify` fails and the document looks correct: it shows
//! exactly which paths and verbs the indentation rules picked up.

use anyhow::{Context, Result};
use clap::Args;

use apiguard_contract::ContractDocument;

use crate::{DocumentArgs, GuardContext, OutputFormat, EXIT_PASS};

/// Arguments for the `apiguard scan` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Include section position and termination diagnostics.
    #[arg(long)]
    pub report: bool,
}

/// Render the scan of the configured document.
pub fn render_scan(args: &ScanArgs, ctx: &GuardContext) -> Result<String> {
    let config = ctx.with_overrides(&args.document)?;
    let path = ctx.document_path(&config);
    let doc = ContractDocument::load(&path)
        .with_context(|| format!("cannot scan {}", config.document.display()))?;

    let report = config.scanner().scan_report(doc.text());
    if !report.section_found() {
        tracing::info!(section = %config.section, "section marker not found");
    }

    if args.report {
        args.format.render(&report)
    } else {
        args.format.render(&report.mapping)
    }
}

/// Execute the scan subcommand.
pub fn run_scan(args: &ScanArgs, ctx: &GuardContext) -> Result<u8> {
    println!("{}", render_scan(args, ctx)?);
    Ok(EXIT_PASS)
}
