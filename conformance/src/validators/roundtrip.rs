//! Round-trip validator.
//!
//! Decodes each bundled fixture document by its discriminator, encodes it
//! again and requires the result to equal the input minus `@context`.
//! Numbers compare by value, since integral floats may change surface form.

use as_streams::{deserialize_document, DecodeOptions};
use serde_json::Value;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "streams/roundtrip";

/// A bundled sample document.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    /// File name under `fixtures/`.
    pub name: &'static str,
    /// Type the document must resolve to.
    pub type_name: &'static str,
    /// The JSON text.
    pub text: &'static str,
}

macro_rules! fixture {
    ($name:literal, $type_name:literal) => {
        Fixture {
            name: $name,
            type_name: $type_name,
            text: include_str!(concat!("../../fixtures/", $name)),
        }
    };
}

/// Every bundled fixture.
pub const FIXTURES: &[Fixture] = &[
    fixture!("accept_note.json", "Accept"),
    fixture!("create_note.json", "Create"),
    fixture!("extensions.json", "Service"),
    fixture!("ordered_page.json", "OrderedCollectionPage"),
    fixture!("place.json", "Place"),
    fixture!("question.json", "Question"),
    fixture!("tombstone.json", "Tombstone"),
];

/// Round-trips every bundled fixture.
#[must_use]
pub fn validate() -> ConformanceReport {
    FIXTURES.iter().map(check_fixture).collect()
}

fn check_fixture(fixture: &Fixture) -> TestResult {
    let fail = |message: String| TestResult::fail(VALIDATOR, format!("{}: {message}", fixture.name));
    let mut input: Value = match serde_json::from_str(fixture.text) {
        Ok(value) => value,
        Err(err) => return fail(format!("not valid JSON: {err}")),
    };
    let doc = match deserialize_document(&input, &DecodeOptions::default()) {
        Ok(doc) => doc,
        Err(err) => return fail(format!("failed to decode: {err}")),
    };
    if doc.type_name() != fixture.type_name {
        return fail(format!(
            "resolved to {} instead of {}",
            doc.type_name(),
            fixture.type_name
        ));
    }
    let output = match doc.to_value() {
        Ok(value) => value,
        Err(err) => return fail(format!("failed to encode: {err}")),
    };
    if let Value::Object(map) = &mut input {
        map.remove("@context");
    }
    let mut diffs = Vec::new();
    diff("$", &input, &output, &mut diffs);
    TestResult::check(
        VALIDATOR,
        format!("{} round-trips", fixture.name),
        format!("{} changed on round trip", fixture.name),
        diffs,
    )
}

/// Records every path at which `expected` and `actual` differ.
pub fn diff(path: &str, expected: &Value, actual: &Value, out: &mut Vec<String>) {
    match (expected, actual) {
        (Value::Number(a), Value::Number(b)) if a.as_f64() == b.as_f64() => {}
        (Value::Object(a), Value::Object(b)) => {
            for (key, value) in a {
                match b.get(key) {
                    Some(other) => diff(&format!("{path}.{key}"), value, other, out),
                    None => out.push(format!("{path}.{key}: dropped")),
                }
            }
            for key in b.keys().filter(|k| !a.contains_key(*k)) {
                out.push(format!("{path}.{key}: added"));
            }
        }
        (Value::Array(a), Value::Array(b)) if a.len() == b.len() => {
            for (i, (x, y)) in a.iter().zip(b).enumerate() {
                diff(&format!("{path}[{i}]"), x, y, out);
            }
        }
        (a, b) if a == b => {}
        (a, b) => out.push(format!("{path}: {a} became {b}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_fixture_round_trips() {
        let report = validate();
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "round-trip failures: {failures:#?}");
        assert_eq!(report.results.len(), FIXTURES.len());
    }

    #[test]
    fn diff_treats_integral_floats_as_equal() {
        let mut out = Vec::new();
        diff("$", &json!({ "radius": 15 }), &json!({ "radius": 15.0 }), &mut out);
        assert!(out.is_empty(), "{out:?}");
    }

    #[test]
    fn diff_reports_paths() {
        let mut out = Vec::new();
        diff(
            "$",
            &json!({ "a": [1, { "b": "x" }], "gone": true }),
            &json!({ "a": [1, { "b": "y" }], "new": null }),
            &mut out,
        );
        assert_eq!(
            out,
            [
                "$.a[1].b: \"x\" became \"y\"",
                "$.gone: dropped",
                "$.new: added"
            ]
        );
    }
}
