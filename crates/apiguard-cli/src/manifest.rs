//! # Manifest Subcommand
//!
//! Prints the effective requirement manifest after config resolution, in
//! the same shape the `required` key of `apiguard.yaml` accepts.

use anyhow::Result;
use clap::Args;

use crate::{GuardContext, OutputFormat, EXIT_PASS};

/// Arguments for the `apiguard manifest` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ManifestArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Execute the manifest subcommand.
pub fn run_manifest(args: &ManifestArgs, ctx: &GuardContext) -> Result<u8> {
    println!("{}", args.format.render(&ctx.config.required)?);
    Ok(EXIT_PASS)
}
