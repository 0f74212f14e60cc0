//! Workspace conventions validator.
//!
//! Checks conventions that neither rustc nor clippy enforce:
//! - Every member manifest inherits `edition`, `rust-version` and `license`
//!   from `[workspace.package]`
//! - Every library root carries the workspace lint deny list
//! - No library root exits the process

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use walkdir::WalkDir;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "workspace/conventions";

/// Lints every library root must deny.
pub const DENY_LIST: &[&str] = &[
    "clippy::unwrap_used",
    "clippy::expect_used",
    "clippy::panic",
    "missing_docs",
    "clippy::missing_errors_doc",
];

const INHERITED_FIELDS: &[&str] = &["edition", "rust-version", "license"];

#[derive(Debug, Deserialize)]
struct RootManifest {
    workspace: WorkspaceTable,
}

#[derive(Debug, Deserialize)]
struct WorkspaceTable {
    members: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MemberManifest {
    package: toml::Table,
}

/// Validates the conventions of the workspace rooted at `workspace`.
///
/// # Errors
///
/// Returns an error if a manifest or library root cannot be read, or if
/// the root manifest does not parse.
pub fn validate(workspace: &Path) -> Result<ConformanceReport> {
    let root_path = workspace.join("Cargo.toml");
    let root: RootManifest = toml::from_str(
        &std::fs::read_to_string(&root_path)
            .with_context(|| format!("Failed to read {}", root_path.display()))?,
    )
    .with_context(|| format!("Failed to parse {}", root_path.display()))?;

    let mut manifest_issues = Vec::new();
    let mut lint_issues = Vec::new();
    let mut exit_issues = Vec::new();

    for member in &root.workspace.members {
        let dir = workspace.join(member);
        let manifest_path = dir.join("Cargo.toml");
        let content = std::fs::read_to_string(&manifest_path)
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
        manifest_issues.extend(
            manifest_violations(&content)
                .into_iter()
                .map(|issue| format!("{member}: {issue}")),
        );

        for lib in library_roots(&dir) {
            let source = std::fs::read_to_string(&lib)
                .with_context(|| format!("Failed to read {}", lib.display()))?;
            lint_issues.extend(
                missing_lints(&source)
                    .into_iter()
                    .map(|lint| format!("{}: does not deny {lint}", lib.display())),
            );
            if source.contains("process::exit") {
                exit_issues.push(lib.display().to_string());
            }
        }
    }

    Ok([
        TestResult::check(
            VALIDATOR,
            "Member manifests inherit workspace package fields",
            "Member manifests do not inherit workspace package fields",
            manifest_issues,
        ),
        TestResult::check(
            VALIDATOR,
            "Library roots carry the lint deny list",
            "Library roots are missing denied lints",
            lint_issues,
        ),
        TestResult::check(
            VALIDATOR,
            "No process exits in library sources",
            "Process exit called from library source",
            exit_issues,
        ),
    ]
    .into_iter()
    .collect())
}

fn library_roots(member: &Path) -> Vec<std::path::PathBuf> {
    WalkDir::new(member.join("src"))
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name() == "lib.rs")
        .map(walkdir::DirEntry::into_path)
        .collect()
}

fn manifest_violations(content: &str) -> Vec<String> {
    let manifest: MemberManifest = match toml::from_str(content) {
        Ok(manifest) => manifest,
        Err(err) => return vec![format!("manifest does not parse: {err}")],
    };
    INHERITED_FIELDS
        .iter()
        .filter(|field| !is_inherited(manifest.package.get(**field)))
        .map(|field| format!("`{field}` is not inherited from the workspace"))
        .collect()
}

fn is_inherited(value: Option<&toml::Value>) -> bool {
    value
        .and_then(toml::Value::as_table)
        .and_then(|t| t.get("workspace"))
        .and_then(toml::Value::as_bool)
        .unwrap_or(false)
}

fn missing_lints(source: &str) -> Vec<&'static str> {
    let Some(start) = source.find("#![deny(") else {
        return DENY_LIST.to_vec();
    };
    let block = &source[start..];
    let block = block.find(')').map_or(block, |end| &block[..end]);
    DENY_LIST
        .iter()
        .copied()
        .filter(|lint| !block.split([',', '(', ' ', '\n']).any(|item| item == *lint))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn this_workspace_follows_its_conventions() {
        let workspace = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
        let report = validate(&workspace).expect("workspace readable");
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "convention failures: {failures:#?}");
    }

    #[test]
    fn flags_fields_set_locally() {
        let manifest = r#"
            [package]
            name = "x"
            edition = "2021"
            rust-version.workspace = true
            license = { workspace = true }
        "#;
        assert_eq!(
            manifest_violations(manifest),
            ["`edition` is not inherited from the workspace"]
        );
    }

    #[test]
    fn finds_missing_lints() {
        let source = "//! Docs.\n\n#![deny(\n    clippy::unwrap_used,\n    missing_docs\n)]\n";
        assert_eq!(
            missing_lints(source),
            ["clippy::expect_used", "clippy::panic", "clippy::missing_errors_doc"]
        );
        assert_eq!(missing_lints("pub fn f() {}").len(), DENY_LIST.len());
    }
}
