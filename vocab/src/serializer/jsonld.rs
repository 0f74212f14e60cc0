//! JSON-LD 1.1 serializer for the vocabulary.
//!
//! Produces a single JSON-LD document containing the `@context` and an
//! `@graph` array with one node per section, term and property, in section
//! order.

use serde_json::{json, Map, Value};

use crate::model::{iris, Property, Term, Vocabulary};

/// Prefixes declared in `@context`, in the order they are tried when
/// shortening an IRI.
const PREFIXES: &[(&str, &str)] = &[
    ("as", iris::AS),
    ("ldp", iris::LDP),
    ("xsd", iris::XSD),
    ("rdf", iris::RDF),
    ("rdfs", iris::RDFS),
    ("owl", iris::OWL),
];

/// Serializes the complete vocabulary to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(vocab: &Vocabulary) -> Value {
    json!({
        "@context": build_context(vocab),
        "@graph": build_graph(vocab)
    })
}

fn build_context(vocab: &Vocabulary) -> Value {
    let mut ctx: Map<String, Value> = PREFIXES
        .iter()
        .map(|(prefix, iri)| ((*prefix).to_owned(), json!(iri)))
        .collect();
    ctx.insert("as".to_owned(), json!(vocab.base_iri));
    Value::Object(ctx)
}

fn build_graph(vocab: &Vocabulary) -> Value {
    let mut nodes: Vec<Value> = Vec::new();

    nodes.push(json!({
        "@id": vocab.context_iri,
        "@type": "owl:Ontology",
        "rdfs:label": "Activity Vocabulary",
        "owl:versionInfo": vocab.version
    }));

    for module in &vocab.sections {
        nodes.push(json!({
            "@id": format!("{}#section-{}", vocab.context_iri, module.section.as_str()),
            "@type": "owl:Ontology",
            "rdfs:label": module.label,
            "rdfs:comment": module.comment
        }));
        for term in &module.terms {
            nodes.push(term_to_json(vocab, term));
        }
        for prop in &module.properties {
            nodes.push(property_to_json(vocab, prop));
        }
    }

    Value::Array(nodes)
}

fn term_to_json(vocab: &Vocabulary, term: &Term) -> Value {
    let subclass_of: Vec<Value> = term
        .extends
        .iter()
        .map(|label| json!({ "@id": term_iri(vocab, label) }))
        .collect();
    json!({
        "@id": shorten_iri(term.id),
        "@type": "owl:Class",
        "rdfs:label": term.label,
        "rdfs:comment": term.comment,
        "rdfs:subClassOf": subclass_of
    })
}

fn property_to_json(vocab: &Vocabulary, prop: &Property) -> Value {
    // A property whose every alternative is an embedded term is an object
    // property; any scalar alternative makes it a datatype property.
    let base = if prop.ranges.iter().all(|r| r.is_reference()) {
        "owl:ObjectProperty"
    } else {
        "owl:DatatypeProperty"
    };
    let type_ = if prop.functional {
        json!([base, "owl:FunctionalProperty"])
    } else {
        json!(base)
    };
    let domain: Vec<Value> = prop
        .domain
        .iter()
        .map(|label| json!({ "@id": term_iri(vocab, label) }))
        .collect();
    let range: Vec<Value> = prop
        .ranges
        .iter()
        .map(|r| json!({ "@id": shorten_iri(r.iri()) }))
        .collect();

    let mut node = json!({
        "@id": shorten_iri(prop.id),
        "@type": type_,
        "rdfs:label": prop.label,
        "rdfs:comment": prop.comment,
        "rdfs:domain": union_of(domain),
        "rdfs:range": union_of(range)
    });
    if prop.language_map {
        node["as:languageMap"] = json!(format!("{}Map", prop.label));
    }
    node
}

/// Collapses a single-member list to the bare node, otherwise wraps the
/// members in an anonymous `owl:unionOf` class.
fn union_of(mut members: Vec<Value>) -> Value {
    if members.len() == 1 {
        return members.remove(0);
    }
    json!({
        "@type": "owl:Class",
        "owl:unionOf": { "@list": members }
    })
}

fn term_iri(vocab: &Vocabulary, label: &str) -> String {
    match vocab.find_term(label) {
        Some(term) => shorten_iri(term.id),
        None => format!("as:{label}"),
    }
}

/// Shortens a full IRI to a prefixed form using the context prefixes.
fn shorten_iri(iri: &str) -> String {
    PREFIXES
        .iter()
        .find_map(|(prefix, full)| iri.strip_prefix(full).map(|local| format!("{prefix}:{local}")))
        .unwrap_or_else(|| iri.to_owned())
}
