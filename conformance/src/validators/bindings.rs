//! Entity binding validator.
//!
//! Compares the generated entity types against the vocabulary they were
//! generated from:
//! - Every term is registered under the reference kind of its family
//! - Collection and page kinds hold exactly the matching descendants
//! - Every entity declares exactly its term's properties, with the
//!   vocabulary's multiplicity and alternatives in range order
//! - Language-map slots exist exactly where the vocabulary declares them

use std::collections::{BTreeMap, BTreeSet};

use as_streams::{CollectionPageRef, CollectionRef, FieldSchema, LinkRef, Multiplicity, ObjectRef};
use as_vocab::{TermKind, Vocabulary};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "streams/bindings";

/// Validates the entity bindings against the full vocabulary.
#[must_use]
pub fn validate() -> ConformanceReport {
    let vocab = Vocabulary::full();
    [
        TestResult::check(
            VALIDATOR,
            "Every term is registered under its family",
            "Registry does not match the vocabulary",
            registry_violations(vocab),
        ),
        TestResult::check(
            VALIDATOR,
            "Collection kinds hold exactly their descendants",
            "Collection kinds do not match the hierarchy",
            collection_kind_violations(vocab),
        ),
        TestResult::check(
            VALIDATOR,
            "Entity slots match term properties",
            "Entity slots differ from term properties",
            schema_violations(vocab),
        ),
    ]
    .into_iter()
    .collect()
}

fn registry_violations(vocab: &Vocabulary) -> Vec<String> {
    let mut violations = Vec::new();
    for term in vocab.terms() {
        let (kind, names) = match term.kind {
            TermKind::Object => ("ObjectRef", ObjectRef::TYPE_NAMES),
            TermKind::Link => ("LinkRef", LinkRef::TYPE_NAMES),
        };
        if !names.contains(&term.label) {
            violations.push(format!("{} is missing from {kind}", term.label));
        }
    }
    for name in ObjectRef::TYPE_NAMES.iter().chain(LinkRef::TYPE_NAMES) {
        if vocab.find_term(name).is_none() {
            violations.push(format!("{name} is registered but not in the vocabulary"));
        }
    }
    violations
}

fn collection_kind_violations(vocab: &Vocabulary) -> Vec<String> {
    let descendants = |root: &str| -> BTreeSet<&str> {
        vocab
            .terms()
            .filter(|t| vocab.descends_from(t.label, root))
            .map(|t| t.label)
            .collect()
    };
    let mut violations = Vec::new();
    for (kind, names, root) in [
        ("CollectionRef", CollectionRef::TYPE_NAMES, "Collection"),
        ("CollectionPageRef", CollectionPageRef::TYPE_NAMES, "CollectionPage"),
    ] {
        let registered: BTreeSet<&str> = names.iter().copied().collect();
        let expected = descendants(root);
        for missing in expected.difference(&registered) {
            violations.push(format!("{kind} is missing {missing}"));
        }
        for extra in registered.difference(&expected) {
            violations.push(format!("{kind} holds {extra}, which is not a {root}"));
        }
    }
    violations
}

fn schema_violations(vocab: &Vocabulary) -> Vec<String> {
    let schemas: BTreeMap<&str, Vec<FieldSchema>> = ObjectRef::schemas()
        .into_iter()
        .chain(LinkRef::schemas())
        .collect();
    let mut violations = Vec::new();
    for term in vocab.terms() {
        let Some(fields) = schemas.get(term.label) else {
            // Reported by the registry check.
            continue;
        };
        compare_term(vocab, term.label, fields, &mut violations);
    }
    violations
}

fn compare_term(vocab: &Vocabulary, label: &str, fields: &[FieldSchema], out: &mut Vec<String>) {
    let expected = vocab.properties_of(label);
    let declared: BTreeSet<&str> = fields
        .iter()
        .filter(|f| f.multiplicity != Multiplicity::LanguageMap)
        .map(|f| f.name)
        .collect();
    for missing in expected.difference(&declared) {
        out.push(format!("{label} lacks a `{missing}` slot"));
    }
    for extra in declared.difference(&expected) {
        out.push(format!("{label} declares `{extra}`, which the term does not carry"));
    }

    let expected_maps: BTreeSet<&str> = expected
        .iter()
        .copied()
        .filter(|name| vocab.find_property(name).is_some_and(|p| p.language_map))
        .collect();
    let declared_maps: BTreeSet<&str> = fields
        .iter()
        .filter(|f| f.multiplicity == Multiplicity::LanguageMap)
        .map(|f| f.name)
        .collect();
    for name in expected_maps.symmetric_difference(&declared_maps) {
        out.push(format!("{label} language map for `{name}` does not match"));
    }

    for field in fields {
        if field.multiplicity == Multiplicity::LanguageMap {
            continue;
        }
        let Some(prop) = vocab.find_property(field.name) else {
            continue;
        };
        let multiplicity = if prop.functional {
            Multiplicity::Functional
        } else {
            Multiplicity::Values
        };
        if field.multiplicity != multiplicity {
            out.push(format!(
                "{label}.{} is {} but the vocabulary says {}",
                field.name,
                field.multiplicity.as_str(),
                multiplicity.as_str()
            ));
        }
        let ranges: Vec<&str> = prop.ranges.iter().map(|r| r.as_str()).collect();
        if field.alternatives != ranges.as_slice() {
            out.push(format!(
                "{label}.{} alternatives {:?} differ from ranges {ranges:?}",
                field.name, field.alternatives
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_match_the_vocabulary() {
        let report = validate();
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "binding failures: {failures:#?}");
    }

    #[test]
    fn reports_missing_and_extra_slots() {
        let vocab = Vocabulary::full();
        let mut out = Vec::new();
        let fields = [FieldSchema {
            name: "actor",
            multiplicity: Multiplicity::Functional,
            alternatives: &["Iri"],
        }];
        compare_term(vocab, "Note", &fields, &mut out);
        assert!(out.iter().any(|v| v.contains("lacks a `content` slot")));
        assert!(out.iter().any(|v| v.contains("declares `actor`")));
        assert!(out.iter().any(|v| v.contains("Note.actor is functional")));
        assert!(out.iter().any(|v| v.contains("language map for `content`")));
    }
}
