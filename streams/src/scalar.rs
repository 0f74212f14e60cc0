//! Scalar codecs: one deserialize/serialize pair per primitive alternative.
//!
//! A cell tries its scalar alternatives in declared order and keeps the
//! first whose [`Scalar::deserialize`] succeeds, so every codec here must
//! reject anything that is not unambiguously its own shape.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::{Map, Number, Value};
use thiserror::Error;
use url::Url;

use crate::error::{Error, Result};
use crate::value::kind;

pub use crate::duration::XsdDuration;

/// A codec rejected a raw value.
///
/// Never escapes a property cell: rejection moves on to the next alternative
/// and, failing all of them, to the unknown slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct ScalarError {
    /// The alternative that was attempted.
    pub expected: &'static str,
    /// What was found instead.
    pub found: String,
}

impl ScalarError {
    pub(crate) fn shape(expected: &'static str, raw: &Value) -> Self {
        Self {
            expected,
            found: kind(raw).to_owned(),
        }
    }

    pub(crate) fn text(expected: &'static str, text: &str) -> Self {
        Self {
            expected,
            found: format!("{text:?}"),
        }
    }
}

/// A primitive alternative with its JSON codec.
pub trait Scalar: Sized {
    /// Name of the datatype, used in error messages.
    const KIND: &'static str;

    /// Converts a raw JSON value into this type.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError`] if the value does not have this type's shape.
    fn deserialize(raw: &Value) -> Result<Self, ScalarError>;

    /// Converts this value back into JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteFloat`] for floats JSON cannot represent;
    /// every other codec is infallible.
    fn serialize(&self) -> Result<Value>;
}

fn string<'a>(expected: &'static str, raw: &'a Value) -> Result<&'a str, ScalarError> {
    raw.as_str().ok_or_else(|| ScalarError::shape(expected, raw))
}

impl Scalar for String {
    const KIND: &'static str = "xsd:string";

    fn deserialize(raw: &Value) -> Result<Self, ScalarError> {
        string(Self::KIND, raw).map(str::to_owned)
    }

    fn serialize(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }
}

impl Scalar for Url {
    const KIND: &'static str = "xsd:anyURI";

    fn deserialize(raw: &Value) -> Result<Self, ScalarError> {
        let text = string(Self::KIND, raw)?;
        Url::parse(text).map_err(|_| ScalarError::text(Self::KIND, text))
    }

    fn serialize(&self) -> Result<Value> {
        Ok(Value::String(self.as_str().to_owned()))
    }
}

impl Scalar for f64 {
    const KIND: &'static str = "xsd:float";

    fn deserialize(raw: &Value) -> Result<Self, ScalarError> {
        raw.as_f64().ok_or_else(|| ScalarError::shape(Self::KIND, raw))
    }

    fn serialize(&self) -> Result<Value> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or(Error::NonFiniteFloat { value: *self })
    }
}

impl Scalar for u64 {
    const KIND: &'static str = "xsd:nonNegativeInteger";

    fn deserialize(raw: &Value) -> Result<Self, ScalarError> {
        raw.as_u64().ok_or_else(|| ScalarError::shape(Self::KIND, raw))
    }

    fn serialize(&self) -> Result<Value> {
        Ok(Value::from(*self))
    }
}

impl Scalar for bool {
    const KIND: &'static str = "xsd:boolean";

    fn deserialize(raw: &Value) -> Result<Self, ScalarError> {
        raw.as_bool().ok_or_else(|| ScalarError::shape(Self::KIND, raw))
    }

    fn serialize(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
}

impl Scalar for DateTime<FixedOffset> {
    const KIND: &'static str = "xsd:dateTime";

    fn deserialize(raw: &Value) -> Result<Self, ScalarError> {
        let text = string(Self::KIND, raw)?;
        DateTime::parse_from_rfc3339(text).map_err(|_| ScalarError::text(Self::KIND, text))
    }

    fn serialize(&self) -> Result<Value> {
        Ok(Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
    }
}

impl Scalar for XsdDuration {
    const KIND: &'static str = "xsd:duration";

    fn deserialize(raw: &Value) -> Result<Self, ScalarError> {
        string(Self::KIND, raw)?.parse()
    }

    fn serialize(&self) -> Result<Value> {
        Ok(Value::String(self.to_string()))
    }
}

/// An `rdf:langString`: text with an optional language tag.
///
/// On the wire it is a JSON-LD value object, `{"@value": text}` with an
/// optional `"@language"`, so it never competes with a plain string
/// alternative for bare strings. Untagged text in several languages belongs
/// in the property's `<name>Map` sibling instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangString {
    /// The text.
    pub value: String,
    /// The language of the text, if known.
    pub language: Option<LanguageTag>,
}

const VALUE_KEY: &str = "@value";
const LANGUAGE_KEY: &str = "@language";

impl LangString {
    /// Creates an untagged language string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
        }
    }

    /// Attaches a language tag.
    #[must_use]
    pub fn with_language(mut self, language: LanguageTag) -> Self {
        self.language = Some(language);
        self
    }
}

impl Scalar for LangString {
    const KIND: &'static str = "rdf:langString";

    fn deserialize(raw: &Value) -> Result<Self, ScalarError> {
        let map = raw
            .as_object()
            .ok_or_else(|| ScalarError::shape(Self::KIND, raw))?;
        if map.keys().any(|k| k != VALUE_KEY && k != LANGUAGE_KEY) {
            return Err(ScalarError::shape(Self::KIND, raw));
        }
        let value = map
            .get(VALUE_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| ScalarError::shape(Self::KIND, raw))?;
        let language = map
            .get(LANGUAGE_KEY)
            .map(LanguageTag::deserialize)
            .transpose()?;
        Ok(Self {
            value: value.to_owned(),
            language,
        })
    }

    fn serialize(&self) -> Result<Value> {
        let mut map = Map::new();
        map.insert(VALUE_KEY.to_owned(), Value::String(self.value.clone()));
        if let Some(language) = &self.language {
            map.insert(LANGUAGE_KEY.to_owned(), Value::String(language.to_string()));
        }
        Ok(Value::Object(map))
    }
}

/// Declares a validated string newtype with its codec.
macro_rules! string_newtype {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, $valid:path
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Returns the underlying text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = ScalarError;

            fn from_str(text: &str) -> Result<Self, ScalarError> {
                if $valid(text) {
                    Ok(Self(text.to_owned()))
                } else {
                    Err(ScalarError::text($kind, text))
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Scalar for $name {
            const KIND: &'static str = $kind;

            fn deserialize(raw: &Value) -> Result<Self, ScalarError> {
                string(Self::KIND, raw)?.parse()
            }

            fn serialize(&self) -> Result<Value> {
                Ok(Value::String(self.0.clone()))
            }
        }
    };
}

string_newtype! {
    /// An RFC 2045 media type such as `text/html` or `image/png; q=0.9`.
    MediaType, "rfc2045:mediaType", is_media_type
}

string_newtype! {
    /// A BCP 47 language tag such as `en` or `zh-Hant-TW`.
    LanguageTag, "bcp47:languageTag", is_language_tag
}

string_newtype! {
    /// An RFC 5988 link relation such as `canonical` or `preview`.
    LinkRelation, "rfc5988:linkRelation", is_link_relation
}

fn is_media_type(text: &str) -> bool {
    let essence = text.split(';').next().unwrap_or_default().trim();
    let Some((top, sub)) = essence.split_once('/') else {
        return false;
    };
    let token = |s: &str| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_alphanumeric() || "!#$&-^_.+".contains(c))
    };
    token(top) && token(sub)
}

fn is_language_tag(text: &str) -> bool {
    let mut subtags = text.split('-');
    let primary = subtags.next().unwrap_or_default();
    let sized = |s: &str| (1..=8).contains(&s.len());
    sized(primary)
        && primary.chars().all(|c| c.is_ascii_alphabetic())
        && subtags.all(|s| sized(s) && s.chars().all(|c| c.is_ascii_alphanumeric()))
}

fn is_link_relation(text: &str) -> bool {
    !text.is_empty() && !text.chars().any(|c| matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r' | ','))
}

/// Measurement units for `Place` radius and altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Units {
    /// Centimetres.
    Cm,
    /// Feet.
    Feet,
    /// Inches.
    Inches,
    /// Kilometres.
    Km,
    /// Metres.
    M,
    /// Miles.
    Miles,
}

impl Units {
    /// Returns the wire spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Cm => "cm",
            Units::Feet => "feet",
            Units::Inches => "inches",
            Units::Km => "km",
            Units::M => "m",
            Units::Miles => "miles",
        }
    }
}

impl FromStr for Units {
    type Err = ScalarError;

    fn from_str(text: &str) -> Result<Self, ScalarError> {
        match text {
            "cm" => Ok(Units::Cm),
            "feet" => Ok(Units::Feet),
            "inches" => Ok(Units::Inches),
            "km" => Ok(Units::Km),
            "m" => Ok(Units::M),
            "miles" => Ok(Units::Miles),
            _ => Err(ScalarError::text(Self::KIND, text)),
        }
    }
}

impl Scalar for Units {
    const KIND: &'static str = "as:units";

    fn deserialize(raw: &Value) -> Result<Self, ScalarError> {
        string(Self::KIND, raw)?.parse()
    }

    fn serialize(&self) -> Result<Value> {
        Ok(Value::String(self.as_str().to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn iri_requires_absolute_url() {
        assert!(Url::deserialize(&json!("https://example.com/alice")).is_ok());
        assert!(Url::deserialize(&json!("hi")).is_err());
        assert!(Url::deserialize(&json!(3)).is_err());
    }

    #[test]
    fn float_rejects_non_numbers_and_refuses_nan() {
        assert_eq!(f64::deserialize(&json!(1.5)), Ok(1.5));
        assert_eq!(f64::deserialize(&json!(2)), Ok(2.0));
        assert!(f64::deserialize(&json!("1.5")).is_err());
        assert!(matches!(
            f64::NAN.serialize(),
            Err(Error::NonFiniteFloat { .. })
        ));
    }

    #[test]
    fn non_negative_integer_rejects_negatives_and_fractions() {
        assert_eq!(u64::deserialize(&json!(42)), Ok(42));
        assert!(u64::deserialize(&json!(-1)).is_err());
        assert!(u64::deserialize(&json!(1.5)).is_err());
    }

    #[test]
    fn date_time_round_trips_utc_as_z() {
        let parsed = DateTime::<FixedOffset>::deserialize(&json!("2014-12-12T12:12:12Z"))
            .expect("valid timestamp");
        assert_eq!(parsed.serialize().expect("encodes"), json!("2014-12-12T12:12:12Z"));
        assert!(DateTime::<FixedOffset>::deserialize(&json!("yesterday")).is_err());
    }

    #[test]
    fn date_time_keeps_offset() {
        let parsed = DateTime::<FixedOffset>::deserialize(&json!("2015-02-10T15:04:55+02:00"))
            .expect("valid timestamp");
        assert_eq!(
            parsed.serialize().expect("encodes"),
            json!("2015-02-10T15:04:55+02:00")
        );
    }

    #[test]
    fn media_types() {
        assert!(is_media_type("text/html"));
        assert!(is_media_type("application/ld+json; profile=\"x\""));
        assert!(!is_media_type("html"));
        assert!(!is_media_type("text/"));
        assert!(!is_media_type("te xt/html"));
    }

    #[test]
    fn language_tags() {
        assert!(is_language_tag("en"));
        assert!(is_language_tag("zh-Hant-TW"));
        assert!(!is_language_tag(""));
        assert!(!is_language_tag("english-language"));
        assert!(!is_language_tag("9x"));
    }

    #[test]
    fn link_relations() {
        assert!(is_link_relation("canonical"));
        assert!(is_link_relation("https://example.com/rel"));
        assert!(!is_link_relation("a b"));
        assert!(!is_link_relation("a,b"));
        assert!(!is_link_relation(""));
    }

    #[test]
    fn units_are_closed() {
        assert_eq!(Units::deserialize(&json!("km")), Ok(Units::Km));
        assert!(Units::deserialize(&json!("parsecs")).is_err());
        assert_eq!(Units::Miles.serialize().expect("encodes"), json!("miles"));
    }

    #[test]
    fn lang_string_is_a_value_object() {
        let tagged = LangString::new("hola").with_language("es".parse().expect("tag"));
        let raw = tagged.serialize().expect("encodes");
        assert_eq!(raw, json!({ "@value": "hola", "@language": "es" }));
        assert_eq!(LangString::deserialize(&raw), Ok(tagged));

        let untagged = LangString::deserialize(&json!({ "@value": "hi" })).expect("value object");
        assert_eq!(untagged, LangString::new("hi"));
        assert_eq!(untagged.serialize().expect("encodes"), json!({ "@value": "hi" }));
    }

    #[test]
    fn lang_string_rejects_other_shapes() {
        assert!(LangString::deserialize(&json!("hola")).is_err());
        assert!(LangString::deserialize(&json!({ "@value": 3 })).is_err());
        assert!(LangString::deserialize(&json!({ "@value": "x", "@language": "not a tag" })).is_err());
        assert!(LangString::deserialize(&json!({ "@value": "x", "@type": "xsd:string" })).is_err());
    }
}
