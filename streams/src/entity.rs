//! The owning entity: every declared property slot of one vocabulary term,
//! its raw `type` values and a bag of keys it does not claim.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::options::{DecodeOptions, Nesting};
use crate::value::{self, CONTEXT_KEY, TYPE_KEY};

/// How a declared property is stored on its entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    /// At most one value.
    Functional,
    /// An ordered sequence of values.
    Values,
    /// The `<name>Map` natural-language sibling of a property.
    LanguageMap,
}

impl Multiplicity {
    /// Short name used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Functional => "functional",
            Self::Values => "values",
            Self::LanguageMap => "language-map",
        }
    }
}

/// One declared slot of an entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Vocabulary name of the property.
    pub name: &'static str,
    /// Storage shape of the slot.
    pub multiplicity: Multiplicity,
    /// Alternatives in precedence order. Empty for language maps.
    pub alternatives: &'static [&'static str],
}

impl FieldSchema {
    /// JSON key the slot reads and writes.
    #[must_use]
    pub fn key(&self) -> String {
        match self.multiplicity {
            Multiplicity::LanguageMap => format!("{}Map", self.name),
            _ => self.name.to_owned(),
        }
    }
}

/// A vocabulary term as an owning value.
///
/// Implementations are generated by `entity!`; the required methods are the
/// per-term plumbing and the provided methods implement the JSON mapping.
pub trait Entity: Default + Clone + fmt::Debug + PartialEq {
    /// Canonical name of the term, always among the emitted `type` values.
    const TYPE_NAME: &'static str;

    /// Declared slots, in field order.
    fn schema() -> Vec<FieldSchema>;

    /// Raw `type` values in input order.
    fn types(&self) -> &[Value];

    /// Mutable access to the raw `type` values.
    fn types_mut(&mut self) -> &mut Vec<Value>;

    /// Keys no declared property claimed, with their raw values.
    fn unknown(&self) -> &Map<String, Value>;

    /// Mutable access to the unknown bag.
    fn unknown_mut(&mut self) -> &mut Map<String, Value>;

    /// Offers one key to the declared properties. Returns `false` if none
    /// claims it, or a claiming language map rejects the value's shape.
    ///
    /// # Errors
    ///
    /// Propagates nested entity failures.
    fn deserialize_property(&mut self, key: &str, raw: &Value, nesting: Nesting) -> Result<bool>;

    /// Writes every present declared property into `out`.
    ///
    /// # Errors
    ///
    /// Propagates failures encoding any value.
    fn serialize_properties(&self, out: &mut Map<String, Value>) -> Result<()>;

    /// Populates this entity from `map` at the given nesting.
    ///
    /// `type` is kept verbatim, `@context` is dropped and every unclaimed key
    /// lands in the unknown bag.
    ///
    /// # Errors
    ///
    /// Propagates nested entity failures, chiefly [`Error::DepthExceeded`].
    fn deserialize_fields(&mut self, map: &Map<String, Value>, nesting: Nesting) -> Result<()> {
        for (key, raw) in map {
            if key == TYPE_KEY {
                *self.types_mut() = match raw {
                    Value::Array(items) => items.clone(),
                    single => vec![single.clone()],
                };
                continue;
            }
            if self.deserialize_property(key, raw, nesting)? {
                continue;
            }
            if key == CONTEXT_KEY {
                continue;
            }
            tracing::trace!(entity = Self::TYPE_NAME, key = %key, "retaining unclaimed key");
            self.unknown_mut().insert(key.clone(), value::passthrough(raw));
        }
        Ok(())
    }

    /// Decodes an entity from a JSON object with default options.
    ///
    /// # Errors
    ///
    /// See [`Entity::deserialize_with`].
    fn deserialize(map: &Map<String, Value>) -> Result<Self> {
        Self::deserialize_with(map, &DecodeOptions::default())
    }

    /// Decodes an entity from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthExceeded`] if nesting passes
    /// `options.max_depth`. Unrecognized content is never an error.
    fn deserialize_with(map: &Map<String, Value>, options: &DecodeOptions) -> Result<Self> {
        let mut entity = Self::default();
        entity.deserialize_fields(map, Nesting::new(options).enter()?)?;
        Ok(entity)
    }

    /// Decodes an entity from any JSON value with default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnObject`] unless `value` is an object, and
    /// otherwise as [`Entity::deserialize_with`].
    fn from_value(value: &Value) -> Result<Self> {
        Self::from_value_with(value, &DecodeOptions::default())
    }

    /// Decodes an entity from any JSON value.
    ///
    /// # Errors
    ///
    /// As [`Entity::from_value`].
    fn from_value_with(value: &Value, options: &DecodeOptions) -> Result<Self> {
        match value {
            Value::Object(map) => Self::deserialize_with(map, options),
            other => Err(Error::NotAnObject {
                type_name: Self::TYPE_NAME,
                found: value::kind(other),
            }),
        }
    }

    /// Parses JSON text and decodes it with default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed text, and otherwise as
    /// [`Entity::from_value`].
    fn from_json(text: &str) -> Result<Self> {
        Self::from_value(&serde_json::from_str(text)?)
    }

    /// Encodes this entity as a JSON object.
    ///
    /// Unknown keys are written first so a declared property of the same
    /// name wins. The canonical type name is added to `type` if missing.
    /// `@context` is never written, even if placed in the unknown bag.
    ///
    /// # Errors
    ///
    /// Propagates failures encoding any value.
    fn serialize(&self) -> Result<Map<String, Value>> {
        let mut out: Map<String, Value> = self
            .unknown()
            .iter()
            .filter(|(key, _)| *key != CONTEXT_KEY)
            .map(|(key, raw)| (key.clone(), value::passthrough(raw)))
            .collect();
        out.insert(TYPE_KEY.to_owned(), self.type_value());
        self.serialize_properties(&mut out)?;
        Ok(out)
    }

    /// Encodes this entity as a JSON value.
    ///
    /// # Errors
    ///
    /// As [`Entity::serialize`].
    fn to_value(&self) -> Result<Value> {
        self.serialize().map(Value::Object)
    }

    /// The `type` value to emit: the raw values plus the canonical name if
    /// absent, bare when there is exactly one.
    fn type_value(&self) -> Value {
        let mut types = self.types().to_vec();
        if !types.iter().any(|t| t.as_str() == Some(Self::TYPE_NAME)) {
            types.push(Value::String(Self::TYPE_NAME.to_owned()));
        }
        match <[Value; 1]>::try_from(types) {
            Ok([single]) => single,
            Err(types) => Value::Array(types),
        }
    }

    /// Stores `raw` under `key` in the unknown bag, replacing any previous
    /// value. `@context` belongs to the document, not the entity, and is
    /// ignored.
    fn add_unknown(&mut self, key: impl Into<String>, raw: Value) {
        let key = key.into();
        if key == CONTEXT_KEY {
            tracing::trace!(entity = Self::TYPE_NAME, "ignoring @context added as unknown");
            return;
        }
        self.unknown_mut().insert(key, raw);
    }

    /// True if `key` is in the unknown bag.
    fn has_unknown(&self, key: &str) -> bool {
        self.unknown().contains_key(key)
    }

    /// Returns the unknown value under `key`.
    fn get_unknown(&self, key: &str) -> Option<&Value> {
        self.unknown().get(key)
    }

    /// Removes and returns the unknown value under `key`.
    fn remove_unknown(&mut self, key: &str) -> Option<Value> {
        self.unknown_mut().remove(key)
    }
}
