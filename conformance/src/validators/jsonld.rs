//! JSON-LD artifact validator.
//!
//! Verifies that `<artifacts>/activitystreams.jsonld`, as written by the
//! `as-vocab` client, is a well-formed JSON-LD document for the current
//! vocabulary:
//! - `@context` declares every prefix the graph uses
//! - `@graph` holds one node per ontology, section, term and property
//! - Every `@id` is an absolute IRI or a prefixed name with a declared prefix
//! - Every term appears as an `owl:Class` node

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use as_vocab::Vocabulary;
use serde_json::{Map, Value};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "artifacts/jsonld";

/// File name of the vocabulary artifact.
pub const ARTIFACT: &str = "activitystreams.jsonld";

const REQUIRED_PREFIXES: &[&str] = &["as", "ldp", "owl", "rdf", "rdfs", "xsd"];

/// Validates the JSON-LD artifact in `artifacts`.
///
/// A missing artifact is a warning, since it only exists after a build.
///
/// # Errors
///
/// Returns an error if the artifact exists but cannot be read or parsed.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let path = artifacts.join(ARTIFACT);
    if !path.exists() {
        report.push(TestResult::warn(
            VALIDATOR,
            format!("{} not found; run as-vocab first", path.display()),
        ));
        return Ok(report);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;
    report.extend(validate_document(&value, Vocabulary::full()));
    Ok(report)
}

/// Validates an already-parsed artifact against `vocab`.
#[must_use]
pub fn validate_document(value: &Value, vocab: &Vocabulary) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let Some(context) = value.get("@context").and_then(Value::as_object) else {
        report.push(TestResult::fail(VALIDATOR, "Document has no @context object"));
        return report;
    };
    let Some(graph) = value.get("@graph").and_then(Value::as_array) else {
        report.push(TestResult::fail(VALIDATOR, "Document has no @graph array"));
        return report;
    };

    let missing: Vec<String> = REQUIRED_PREFIXES
        .iter()
        .filter(|p| !context.contains_key(**p))
        .map(|p| format!("{p} is not declared"))
        .collect();
    report.push(TestResult::check(
        VALIDATOR,
        "All required prefixes present in @context",
        "Missing prefixes in @context",
        missing,
    ));

    let expected = 1 + vocab.sections.len() + vocab.term_count() + vocab.property_count();
    let counts = if graph.len() == expected {
        Vec::new()
    } else {
        vec![format!("{} nodes, expected {expected}", graph.len())]
    };
    report.push(TestResult::check(
        VALIDATOR,
        format!("@graph has {expected} nodes"),
        "@graph node count does not match the vocabulary",
        counts,
    ));

    report.push(TestResult::check(
        VALIDATOR,
        "Every @id resolves",
        "Unresolvable @id values",
        unresolvable_ids(graph, context),
    ));

    let classes: HashSet<&str> = graph
        .iter()
        .filter(|node| node["@type"] == "owl:Class")
        .filter_map(|node| node["@id"].as_str())
        .collect();
    let missing_terms: Vec<String> = vocab
        .terms()
        .map(|t| format!("as:{}", t.label))
        .filter(|id| !classes.contains(id.as_str()))
        .collect();
    report.push(TestResult::check(
        VALIDATOR,
        "Every term is published as a class",
        "Terms missing from @graph",
        missing_terms,
    ));

    report
}

fn unresolvable_ids(graph: &[Value], context: &Map<String, Value>) -> Vec<String> {
    graph
        .iter()
        .map(|node| node.get("@id").and_then(Value::as_str))
        .filter_map(|id| match id {
            None => Some("node without @id".to_owned()),
            Some(id) if id.contains("://") => None,
            Some(id) => match id.split_once(':') {
                Some((prefix, _)) if context.contains_key(prefix) => None,
                _ => Some(id.to_owned()),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use as_vocab::serializer::jsonld::to_json_ld;
    use serde_json::json;

    #[test]
    fn serialized_vocabulary_validates() {
        let vocab = Vocabulary::full();
        let report = validate_document(&to_json_ld(vocab), vocab);
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "JSON-LD failures: {failures:#?}");
    }

    #[test]
    fn flags_undeclared_prefixes() {
        let context = json!({ "as": "https://www.w3.org/ns/activitystreams#" });
        let graph = [json!({ "@id": "as:Note" }), json!({ "@id": "foo:Bar" }), json!({})];
        let Value::Object(context) = context else {
            unreachable!("literal object");
        };
        assert_eq!(
            unresolvable_ids(&graph, &context),
            ["foo:Bar", "node without @id"]
        );
    }

    #[test]
    fn missing_artifact_is_only_a_warning() {
        let report = validate(Path::new("/nonexistent/artifacts")).expect("no io error");
        assert!(report.all_passed());
        assert_eq!(report.results.len(), 1);
    }
}
