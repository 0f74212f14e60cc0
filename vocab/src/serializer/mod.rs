//! Serializers for the vocabulary.
//!
//! - **JSON-LD** ([`jsonld`]): the vocabulary as an OWL-flavoured
//!   `@context` + `@graph` document, written by `as-vocab`.

pub mod jsonld;
