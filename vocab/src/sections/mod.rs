//! Vocabulary section modules.
//!
//! Each sub-module encodes one section of the ActivityStreams vocabulary as
//! Rust static data. See [`crate::Vocabulary::full`] for the assembly order.

pub mod core;
pub mod activity;
pub mod actor;
pub mod objects;
pub mod activitypub;
