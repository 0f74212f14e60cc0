//! Vocabulary structure validator.
//!
//! Checks the live vocabulary data for internal consistency:
//! - Supertype, `without` and domain targets name known terms
//! - The supertype graph is acyclic and every term reaches its root
//! - Term and property labels are unique
//! - Every property has at least one range, embedded terms ranked first
//! - Language maps only sit on string-valued properties

use std::collections::HashSet;

use as_vocab::{Range, TermKind, Vocabulary};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "vocabulary/structure";

/// Validates the structure of the full vocabulary.
#[must_use]
pub fn validate() -> ConformanceReport {
    validate_vocabulary(Vocabulary::full())
}

/// Validates the structure of `vocab`.
#[must_use]
pub fn validate_vocabulary(vocab: &Vocabulary) -> ConformanceReport {
    [
        TestResult::check(
            VALIDATOR,
            "All term and property references resolve",
            "Dangling term references",
            dangling_references(vocab),
        ),
        TestResult::check(
            VALIDATOR,
            "Supertype graph is acyclic and rooted",
            "Supertype graph is malformed",
            hierarchy_violations(vocab),
        ),
        TestResult::check(
            VALIDATOR,
            "Labels are unique",
            "Duplicate labels",
            duplicate_labels(vocab),
        ),
        TestResult::check(
            VALIDATOR,
            "Property ranges are well ordered",
            "Property ranges are malformed",
            range_violations(vocab),
        ),
    ]
    .into_iter()
    .collect()
}

fn dangling_references(vocab: &Vocabulary) -> Vec<String> {
    let known = |label: &str| vocab.find_term(label).is_some();
    let mut violations = Vec::new();
    for term in vocab.terms() {
        for parent in term.extends.iter().filter(|p| !known(p)) {
            violations.push(format!("{} extends unknown term {parent}", term.label));
        }
        for excluded in term.without {
            if vocab.find_property(excluded).is_none() {
                violations.push(format!("{} drops unknown property {excluded}", term.label));
            }
        }
    }
    for prop in vocab.properties() {
        for domain in prop.domain.iter().filter(|d| !known(d)) {
            violations.push(format!("{} has unknown domain {domain}", prop.label));
        }
    }
    violations
}

fn hierarchy_violations(vocab: &Vocabulary) -> Vec<String> {
    let mut violations = Vec::new();
    for term in vocab.terms() {
        let ancestors = vocab.ancestors(term.label);
        if ancestors.contains(&term.label) {
            violations.push(format!("{} is its own ancestor", term.label));
            continue;
        }
        let root = match term.kind {
            TermKind::Object => "Object",
            TermKind::Link => "Link",
        };
        if term.label != root && !ancestors.contains(&root) {
            violations.push(format!("{} does not descend from {root}", term.label));
        }
        // Both roots at once would make the kind ambiguous.
        let other = if root == "Object" { "Link" } else { "Object" };
        if ancestors.contains(&other) {
            violations.push(format!("{} descends from both Object and Link", term.label));
        }
    }
    violations
}

fn duplicate_labels(vocab: &Vocabulary) -> Vec<String> {
    let mut seen = HashSet::new();
    vocab
        .terms()
        .map(|t| t.label)
        .chain(vocab.properties().map(|p| p.label))
        .filter(|label| !seen.insert(*label))
        .map(|label| format!("{label} is declared more than once"))
        .collect()
}

fn range_violations(vocab: &Vocabulary) -> Vec<String> {
    let mut violations = Vec::new();
    for prop in vocab.properties() {
        if prop.ranges.is_empty() {
            violations.push(format!("{} has no range", prop.label));
        }
        if let Some(first_scalar) = prop.ranges.iter().position(|r| !r.is_reference()) {
            if prop.ranges[first_scalar..].iter().any(|r| r.is_reference()) {
                violations.push(format!(
                    "{} ranks an embedded term after a scalar",
                    prop.label
                ));
            }
        }
        let mut seen = HashSet::new();
        if let Some(dup) = prop.ranges.iter().find(|r| !seen.insert(**r)) {
            violations.push(format!("{} lists {} twice", prop.label, dup.as_str()));
        }
        if prop.language_map
            && !prop
                .ranges
                .iter()
                .any(|r| matches!(r, Range::String | Range::LangString))
        {
            violations.push(format!(
                "{} has a language map but no string range",
                prop.label
            ));
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_vocabulary_is_well_formed() {
        let report = validate();
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "vocabulary failures: {failures:#?}");
    }

    #[test]
    fn detects_scalars_ranked_before_terms() {
        let mut vocab = Vocabulary::full().clone();
        vocab.sections[0].properties[0].ranges = &[Range::Iri, Range::Object];
        let report = validate_vocabulary(&vocab);
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn detects_dangling_supertypes() {
        let mut vocab = Vocabulary::full().clone();
        vocab.sections[0].terms[2].extends = &["Nothing"];
        let report = validate_vocabulary(&vocab);
        assert!(report
            .failures()
            .any(|r| r.details.iter().any(|d| d.contains("Nothing"))));
    }
}
