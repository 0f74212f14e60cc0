//! Helpers over the generic JSON value the whole protocol pivots on.
//!
//! [`serde_json::Value`] is the sum type over null, bool, number, string,
//! array and object; these functions are the pure, stateless utilities the
//! cells and entities share.

use serde_json::{Map, Value};

/// JSON key of the type discriminator.
pub const TYPE_KEY: &str = "type";

/// JSON-LD context key. Accepted on input and always dropped.
pub const CONTEXT_KEY: &str = "@context";

/// Normalizes a value headed for, or coming out of, an unknown slot.
///
/// The generic value is already in canonical form, so this is a deep copy.
#[must_use]
pub fn passthrough(value: &Value) -> Value {
    value.clone()
}

/// Extracts the candidate type names from a map's discriminator.
///
/// A string yields one name and an array yields its string members in order.
/// Returns `None` when the key is absent or holds anything else, in which
/// case the map cannot be disambiguated.
#[must_use]
pub fn type_names(map: &Map<String, Value>) -> Option<Vec<&str>> {
    match map.get(TYPE_KEY)? {
        Value::String(name) => Some(vec![name.as_str()]),
        Value::Array(items) => Some(items.iter().filter_map(Value::as_str).collect()),
        _ => None,
    }
}

/// Returns a short name for the shape of a value.
#[must_use]
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => unreachable!("fixture is not an object: {other}"),
        }
    }

    #[test]
    fn single_type_name() {
        let map = object(json!({ "type": "Note" }));
        assert_eq!(type_names(&map), Some(vec!["Note"]));
    }

    #[test]
    fn array_type_names_skip_non_strings() {
        let map = object(json!({ "type": ["Note", 7, "ex:Draft"] }));
        assert_eq!(type_names(&map), Some(vec!["Note", "ex:Draft"]));
    }

    #[test]
    fn missing_or_malformed_discriminator() {
        assert_eq!(type_names(&object(json!({ "name": "x" }))), None);
        assert_eq!(type_names(&object(json!({ "type": 3 }))), None);
    }

    #[test]
    fn kinds() {
        assert_eq!(kind(&json!(null)), "null");
        assert_eq!(kind(&json!([1])), "array");
        assert_eq!(kind(&json!({})), "object");
    }
}
