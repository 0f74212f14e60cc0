//! Validators, one module per conformance area.

pub mod bindings;
pub mod jsonld;
pub mod roundtrip;
pub mod vocabulary;
pub mod workspace;
