//! ActivityStreams conformance suite.
//!
//! Cross-checks the pieces of the workspace against each other and runs
//! the checks as one report.
//!
//! # Conformance Scope
//!
//! | Component | Standard |
//! |-----------|----------|
//! | Workspace | Manifest inheritance, clippy deny list |
//! | Vocabulary | Resolvable references, rooted acyclic hierarchy, ordered ranges |
//! | Entity bindings | One slot per term property, multiplicity and alternatives from the vocabulary |
//! | Round trip | Bundled documents decode and encode without loss |
//! | Artifacts | JSON-LD 1.1 vocabulary document |
//!
//! # Entry Point
//!
//! ```no_run
//! use as_conformance::{run_all, WorkspacePaths};
//! use std::path::PathBuf;
//!
//! let paths = WorkspacePaths {
//!     workspace: PathBuf::from("."),
//!     artifacts: PathBuf::from("public"),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

pub use report::{ConformanceReport, Severity, TestResult};

/// Paths required by the conformance runner.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    /// Root of the Rust workspace (contains the root `Cargo.toml`).
    pub workspace: std::path::PathBuf,
    /// Directory the `as-vocab` client writes artifacts to.
    pub artifacts: std::path::PathBuf,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators run in this order:
/// 1. Workspace conventions
/// 2. Vocabulary structure
/// 3. Entity bindings against the vocabulary
/// 4. Fixture round trips
/// 5. JSON-LD vocabulary artifact
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &WorkspacePaths) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::workspace::validate(&paths.workspace)?);
    report.extend(validators::vocabulary::validate());
    report.extend(validators::bindings::validate());
    report.extend(validators::roundtrip::validate());
    report.extend(validators::jsonld::validate(&paths.artifacts)?);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn runs_every_validator_without_artifacts() {
        let paths = WorkspacePaths {
            workspace: Path::new(env!("CARGO_MANIFEST_DIR")).join(".."),
            artifacts: Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-artifacts"),
        };
        let report = run_all(&paths).expect("workspace readable");
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "conformance failures: {failures:#?}");
        assert_eq!(report.count(Severity::Warning), 1);
        for prefix in ["workspace/", "vocabulary/", "streams/bindings", "streams/roundtrip", "artifacts/"] {
            assert!(
                report.results.iter().any(|r| r.validator.starts_with(prefix)),
                "no result from {prefix}"
            );
        }
    }
}
