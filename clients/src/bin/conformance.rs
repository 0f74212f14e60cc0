//! `as-conformance`: Runs the conformance suite over the workspace and its
//! published artifacts.
//!
//! Covers workspace conventions, vocabulary structure, entity bindings,
//! fixture round trips and the JSON-LD vocabulary artifact.
//!
//! **Usage:**
//! ```
//! as-conformance [--artifacts <path>] [--workspace <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use as_conformance::{run_all, Severity, WorkspacePaths};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the ActivityStreams conformance suite.
#[derive(Parser)]
#[command(
    name = "as-conformance",
    about = "Check the vocabulary, entity bindings and artifacts against each other"
)]
struct Args {
    /// Path to the built artifacts directory.
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,

    /// Path to the workspace root.
    #[arg(long, default_value = ".")]
    workspace: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let report = run_all(&WorkspacePaths {
        workspace: args.workspace,
        artifacts: args.artifacts,
    })?;

    println!("ActivityStreams Conformance Report");
    println!("==================================");
    println!();
    for result in &report.results {
        println!("{result}");
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
