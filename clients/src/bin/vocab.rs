//! `as-vocab`: Writes the ActivityStreams vocabulary as a JSON-LD artifact.
//!
//! **Outputs:**
//! - `<out>/activitystreams.jsonld`: JSON-LD 1.1
//!
//! **Usage:**
//! ```
//! as-vocab [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use as_vocab::serializer::jsonld;
use as_vocab::Vocabulary;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build the ActivityStreams vocabulary artifact.
#[derive(Parser)]
#[command(name = "as-vocab", about = "Build the ActivityStreams vocabulary artifact")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let vocab = Vocabulary::full();
    info!(
        version = vocab.version,
        sections = vocab.sections.len(),
        terms = vocab.term_count(),
        properties = vocab.property_count(),
        "assembled vocabulary"
    );

    let path = out.join(as_conformance::validators::jsonld::ARTIFACT);
    let text = serde_json::to_string_pretty(&jsonld::to_json_ld(vocab))
        .context("Failed to serialize vocabulary to JSON-LD")?;
    fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "written");

    Ok(())
}
