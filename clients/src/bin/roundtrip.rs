//! `as-roundtrip`: Decodes an ActivityStreams document by its `type` and
//! prints it encoded again.
//!
//! Reads the file given as argument, or standard input when there is none.
//! The output carries the ActivityStreams `@context`; everything else is
//! exactly what the decoded entity holds, unknown content included.
//!
//! **Usage:**
//! ```
//! as-roundtrip [--max-depth <n>] [--compact] [<file>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use as_streams::{document_from_json, DecodeOptions, DEFAULT_MAX_DEPTH};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Round-trip an ActivityStreams document.
#[derive(Parser)]
#[command(name = "as-roundtrip", about = "Decode and re-encode an ActivityStreams document")]
struct Args {
    /// Document to read; standard input when omitted.
    file: Option<PathBuf>,

    /// Maximum entity nesting depth accepted while decoding.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print on one line instead of pretty-printing.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            text
        }
    };
    debug!(bytes = text.len(), "read document");

    let options = DecodeOptions {
        max_depth: args.max_depth,
    };
    let doc = document_from_json(&text, &options).context("Failed to decode document")?;
    info!(type_name = doc.type_name(), "decoded");

    let out = doc.to_document().context("Failed to encode document")?;
    let printed = if args.compact {
        serde_json::to_string(&out)
    } else {
        serde_json::to_string_pretty(&out)
    }
    .context("Failed to print document")?;
    println!("{printed}");
    Ok(())
}
