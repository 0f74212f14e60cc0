//! Natural-language maps: the `contentMap`, `nameMap`, `summaryMap` and
//! `preferredUsernameMap` siblings of their plain properties.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Translations of one property keyed by language tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMap {
    entries: BTreeMap<String, String>,
}

impl LanguageMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates the language tags present, in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the text for `language`, or the empty string if absent.
    #[must_use]
    pub fn get(&self, language: &str) -> &str {
        self.entries.get(language).map_or("", String::as_str)
    }

    /// Sets the text for `language`, replacing any previous text.
    pub fn set(&mut self, language: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(language.into(), text.into());
    }

    /// Removes and returns the text for `language`.
    pub fn remove(&mut self, language: &str) -> Option<String> {
        self.entries.remove(language)
    }

    /// Number of languages present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no language is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads a map from JSON. Only an object whose every value is a string
    /// qualifies; anything else returns `None` and belongs in the unknown bag.
    #[must_use]
    pub fn from_value(raw: &Value) -> Option<Self> {
        let Value::Object(map) = raw else {
            return None;
        };
        let entries = map
            .iter()
            .map(|(lang, text)| Some((lang.clone(), text.as_str()?.to_owned())))
            .collect::<Option<BTreeMap<_, _>>>()?;
        Some(Self { entries })
    }

    /// Writes the map as a plain JSON object, `{}` when empty.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(lang, text)| (lang.clone(), Value::String(text.clone())))
            .collect();
        Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_language_reads_as_empty() {
        let mut map = LanguageMap::new();
        map.set("en", "hello");
        assert_eq!(map.get("en"), "hello");
        assert_eq!(map.get("fr"), "");
        assert_eq!(map.languages().collect::<Vec<_>>(), ["en"]);
    }

    #[test]
    fn decodes_string_objects_only() {
        let map = LanguageMap::from_value(&json!({ "en": "hi", "es": "hola" })).expect("valid map");
        assert_eq!(map.len(), 2);
        assert!(LanguageMap::from_value(&json!({ "en": 1 })).is_none());
        assert!(LanguageMap::from_value(&json!(["en"])).is_none());
    }

    #[test]
    fn empty_map_is_still_emitted() {
        assert_eq!(LanguageMap::new().to_value(), json!({}));
    }

    #[test]
    fn collects_from_pairs() {
        let map: LanguageMap = [("en", "cat"), ("de", "Katze")].into_iter().collect();
        assert_eq!(map.to_value(), json!({ "de": "Katze", "en": "cat" }));
    }
}
