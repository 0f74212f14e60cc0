//! The polymorphic property cell and the containers entities hold them in.
//!
//! A cell is an enum generated per property by `property!`: one variant per
//! declared alternative in precedence order, plus `Unknown` for anything
//! that matched none of them. At most one alternative is ever populated
//! because a cell is a single enum value; replacing a value replaces the
//! whole cell.
//!
//! Entities store single-valued properties in [`Functional`] and
//! multi-valued ones in [`Values`], which owns the wire multiplicity rule:
//! one value is written bare, more than one as an array.

use std::fmt;
use std::ops::Index;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::options::Nesting;

/// A property value: one cell of one named property.
pub trait PropertyValue: Sized + Clone + fmt::Debug + PartialEq {
    /// JSON key of the property.
    const NAME: &'static str;

    /// Names of the declared alternatives, in precedence order.
    const ALTERNATIVES: &'static [&'static str];

    /// Decodes one raw value.
    ///
    /// Objects are matched against the reference alternatives by their
    /// `type` discriminator; everything else against the scalar
    /// alternatives. A value nothing matches becomes the unknown variant.
    ///
    /// # Errors
    ///
    /// Only failures decoding a matched nested entity propagate, chiefly
    /// [`Error::DepthExceeded`].
    fn deserialize(raw: &Value, nesting: Nesting) -> Result<Self>;

    /// Encodes the held alternative.
    ///
    /// # Errors
    ///
    /// Propagates failures encoding a nested entity or a non-finite float.
    fn serialize(&self) -> Result<Value>;

    /// Wraps an opaque value in the unknown variant.
    fn unknown(value: Value) -> Self;

    /// Returns the opaque value if this cell is the unknown variant.
    fn unknown_value(&self) -> Option<&Value>;
}

/// The ordered values of a multi-valued property.
///
/// Insertion order is wire order and survives a round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Values<P> {
    cells: Vec<P>,
}

impl<P> Default for Values<P> {
    fn default() -> Self {
        Self { cells: Vec::new() }
    }
}

impl<P: PropertyValue> Values<P> {
    /// Creates an empty property.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the property has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the value at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&P> {
        self.cells.get(index)
    }

    /// Iterates the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.cells.iter()
    }

    /// The values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }

    /// Adds a value at the back.
    pub fn append(&mut self, value: impl Into<P>) {
        self.cells.push(value.into());
    }

    /// Adds a value at the front.
    pub fn prepend(&mut self, value: impl Into<P>) {
        self.cells.insert(0, value.into());
    }

    /// Replaces the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if there is no value at `index`.
    pub fn set(&mut self, index: usize, value: impl Into<P>) -> Result<()> {
        let len = self.cells.len();
        let cell = self.cells.get_mut(index).ok_or(Error::IndexOutOfRange {
            property: P::NAME,
            index,
            len,
        })?;
        *cell = value.into();
        Ok(())
    }

    /// Removes and returns the value at `index`, shifting later values down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if there is no value at `index`.
    pub fn remove(&mut self, index: usize) -> Result<P> {
        if index >= self.cells.len() {
            return Err(Error::IndexOutOfRange {
                property: P::NAME,
                index,
                len: self.cells.len(),
            });
        }
        Ok(self.cells.remove(index))
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Stores an opaque value as the leading cell, replacing a previous
    /// leading unknown cell if there is one.
    pub fn set_unknown(&mut self, value: Value) {
        match self.cells.first_mut() {
            Some(first) if first.unknown_value().is_some() => *first = P::unknown(value),
            _ => self.cells.insert(0, P::unknown(value)),
        }
    }

    /// True if the leading cell holds an opaque value.
    #[must_use]
    pub fn has_unknown(&self) -> bool {
        self.unknown().is_some()
    }

    /// The opaque value held by the leading cell.
    #[must_use]
    pub fn unknown(&self) -> Option<&Value> {
        self.cells.first().and_then(PropertyValue::unknown_value)
    }

    /// Replaces the values with those decoded from `raw`. An array decodes
    /// element-wise; anything else decodes as a single value.
    ///
    /// # Errors
    ///
    /// Propagates nested entity failures; the property is left untouched.
    pub fn deserialize(&mut self, raw: &Value, nesting: Nesting) -> Result<()> {
        self.cells = match raw {
            Value::Array(items) => items
                .iter()
                .map(|item| P::deserialize(item, nesting))
                .collect::<Result<_>>()?,
            single => vec![P::deserialize(single, nesting)?],
        };
        Ok(())
    }

    /// Encodes the values: `None` when empty, the bare value when there is
    /// exactly one, an array otherwise.
    ///
    /// # Errors
    ///
    /// Propagates failures encoding any value.
    pub fn serialize(&self) -> Result<Option<Value>> {
        match self.cells.as_slice() {
            [] => Ok(None),
            [single] => single.serialize().map(Some),
            many => many
                .iter()
                .map(PropertyValue::serialize)
                .collect::<Result<Vec<_>>>()
                .map(|items| Some(Value::Array(items))),
        }
    }
}

impl<P> Index<usize> for Values<P> {
    type Output = P;

    fn index(&self, index: usize) -> &P {
        &self.cells[index]
    }
}

impl<'a, P> IntoIterator for &'a Values<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<P> FromIterator<P> for Values<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// The value of a single-valued property.
#[derive(Debug, Clone, PartialEq)]
pub struct Functional<P> {
    cell: Option<P>,
}

impl<P> Default for Functional<P> {
    fn default() -> Self {
        Self { cell: None }
    }
}

impl<P: PropertyValue> Functional<P> {
    /// True if a value is present.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.cell.is_some()
    }

    /// Returns the value, if present.
    #[must_use]
    pub fn get(&self) -> Option<&P> {
        self.cell.as_ref()
    }

    /// Replaces any previous value.
    pub fn set(&mut self, value: impl Into<P>) {
        self.cell = Some(value.into());
    }

    /// Removes and returns the value.
    pub fn take(&mut self) -> Option<P> {
        self.cell.take()
    }

    /// Removes the value.
    pub fn clear(&mut self) {
        self.cell = None;
    }

    /// Replaces any previous value with an opaque one.
    pub fn set_unknown(&mut self, value: Value) {
        self.cell = Some(P::unknown(value));
    }

    /// True if the value present is an opaque one.
    #[must_use]
    pub fn has_unknown(&self) -> bool {
        self.unknown().is_some()
    }

    /// The opaque value, if that is what is present.
    #[must_use]
    pub fn unknown(&self) -> Option<&Value> {
        self.cell.as_ref().and_then(PropertyValue::unknown_value)
    }

    /// Replaces the value with the one decoded from `raw`, taken as a whole.
    ///
    /// # Errors
    ///
    /// Propagates nested entity failures; the property is left untouched.
    pub fn deserialize(&mut self, raw: &Value, nesting: Nesting) -> Result<()> {
        self.cell = Some(P::deserialize(raw, nesting)?);
        Ok(())
    }

    /// Encodes the value, `None` when absent.
    ///
    /// # Errors
    ///
    /// Propagates failures encoding the value.
    pub fn serialize(&self) -> Result<Option<Value>> {
        self.cell.as_ref().map(PropertyValue::serialize).transpose()
    }
}

impl<P> From<Option<P>> for Functional<P> {
    fn from(cell: Option<P>) -> Self {
        Self { cell }
    }
}
