//! Typed ActivityStreams 2.0 entities with lossless JSON round-tripping.
//!
//! Every vocabulary term is an [`Entity`] struct with one slot per property
//! it declares. A slot holds polymorphic cells: an enum over the property's
//! declared alternatives, in precedence order, plus an `Unknown` variant
//! that keeps whatever matched none of them. Keys no slot claims are kept in
//! the entity's unknown bag. Decoding therefore never fails on unrecognized
//! content, and encoding writes back everything that was read.
//!
//! # Decoding a known type
//!
//! ```
//! use as_streams::{terms::Note, Entity};
//!
//! let note = Note::from_json(r#"{
//!     "@context": "https://www.w3.org/ns/activitystreams",
//!     "type": "Note",
//!     "content": "This is a note",
//!     "x:mood": "cheerful"
//! }"#)?;
//! assert!(note.content[0].is_string());
//! assert!(note.has_unknown("x:mood"));
//!
//! let out = note.to_value()?;
//! assert_eq!(out["content"], "This is a note");
//! assert!(out.get("@context").is_none());
//! # Ok::<(), as_streams::Error>(())
//! ```
//!
//! # Decoding by discriminator
//!
//! ```
//! use as_streams::{deserialize_document, DecodeOptions, Resolved};
//! use serde_json::json;
//!
//! let doc = deserialize_document(
//!     &json!({ "type": "Like", "actor": "https://example.com/sally" }),
//!     &DecodeOptions::default(),
//! )?;
//! assert_eq!(doc.type_name(), "Like");
//! assert!(matches!(doc, Resolved::Object(_)));
//! # Ok::<(), as_streams::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

#[macro_use]
mod macros;

pub mod duration;
pub mod entity;
pub mod error;
pub mod langmap;
pub mod options;
pub mod properties;
pub mod property;
pub mod registry;
pub mod scalar;
pub mod terms;
pub mod value;

pub use entity::{Entity, FieldSchema, Multiplicity};
pub use error::{Error, Result};
pub use langmap::LanguageMap;
pub use options::{DecodeOptions, Nesting, DEFAULT_MAX_DEPTH};
pub use property::{Functional, PropertyValue, Values};
pub use registry::{
    deserialize_document, document_from_json, to_document, CollectionPageRef, CollectionRef,
    LinkRef, ObjectRef, Resolved, ACTIVITYSTREAMS_CONTEXT,
};
pub use scalar::{LangString, LanguageTag, LinkRelation, MediaType, Scalar, ScalarError, Units};
pub use duration::XsdDuration;
