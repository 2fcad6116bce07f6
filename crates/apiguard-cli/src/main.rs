//! # apiguard CLI entry point
//!
//! Parses command-line arguments, initializes logging, resolves the
//! repository root and configuration, and dispatches to subcommand
//! handlers. Each handler returns the process exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use apiguard_cli::manifest::{run_manifest, ManifestArgs};
use apiguard_cli::scan::{run_scan, ScanArgs};
use apiguard_cli::verify::{run_verify, VerifyArgs};
use apiguard_cli::{find_repo_root, GuardContext, EXIT_ERROR, LOG_PREFIX};

/// API contract guard.
///
/// Fails the build when the OpenAPI contract document stops declaring an
/// endpoint the deployment is required to expose.
#[derive(Parser, Debug)]
#[command(name = "apiguard", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (defaults to apiguard.yaml at the repo root).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the contract document against the requirement manifest.
    Verify(VerifyArgs),

    /// Print the paths and verbs extracted from the contract document.
    Scan(ScanArgs),

    /// Print the effective requirement manifest.
    Manifest(ManifestArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let repo_root = find_repo_root(&cwd).unwrap_or_else(|| {
        tracing::debug!("no contract or config found above cwd; using current directory");
        cwd.clone()
    });

    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let result = GuardContext::resolve(cli.config.as_deref(), repo_root).and_then(|ctx| {
        match &cli.command {
            Commands::Verify(args) => run_verify(args, &ctx),
            Commands::Scan(args) => run_scan(args, &ctx),
            Commands::Manifest(args) => run_manifest(args, &ctx),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{LOG_PREFIX} FAIL: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
