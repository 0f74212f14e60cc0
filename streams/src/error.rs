//! Error types for decoding and encoding entities.

use thiserror::Error;

/// Errors raised while converting between entities and generic JSON values.
///
/// Unrecognized keys, type names and value shapes are never errors: they are
/// preserved in unknown slots. The variants below are the structural failures
/// that remain.
#[derive(Debug, Error)]
pub enum Error {
    /// Nested entities exceeded [`DecodeOptions::max_depth`](crate::DecodeOptions::max_depth).
    #[error("entity nesting exceeds the configured limit of {limit}")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },

    /// A positional accessor was given an index past the end of its property.
    #[error("index {index} out of range for property `{property}` with {len} value(s)")]
    IndexOutOfRange {
        /// JSON key of the property.
        property: &'static str,
        /// The requested index.
        index: usize,
        /// The number of values present.
        len: usize,
    },

    /// An entity was decoded from a value that is not a JSON object.
    #[error("expected a JSON object for `{type_name}`, found {found}")]
    NotAnObject {
        /// The entity type being decoded.
        type_name: &'static str,
        /// Shape of the value actually supplied.
        found: &'static str,
    },

    /// A top-level document named no type the registry knows.
    #[error("no registered type for document with type {names:?}")]
    UnresolvedType {
        /// The discriminator values found, if any.
        names: Vec<String>,
    },

    /// A float alternative held NaN or an infinity, which JSON cannot carry.
    #[error("cannot encode non-finite float {value}")]
    NonFiniteFloat {
        /// The offending value.
        value: f64,
    },

    /// JSON text could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
