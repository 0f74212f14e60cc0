//! Decoding configuration and the recursion guard threaded through it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default bound on nested entity depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling how documents are decoded.
///
/// Deserializable so hosts can embed it in their own configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DecodeOptions {
    /// Maximum number of nested entities on any path from the document root,
    /// the root included. Documents from remote peers control this depth.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Tracks how many entities deep the decoder currently is.
#[derive(Debug, Clone, Copy)]
pub struct Nesting {
    depth: usize,
    limit: usize,
}

impl Nesting {
    /// Starts outside any entity.
    #[must_use]
    pub fn new(options: &DecodeOptions) -> Self {
        Self {
            depth: 0,
            limit: options.max_depth,
        }
    }

    /// Returns the guard for one entity further down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthExceeded`] when the limit is already reached.
    pub fn enter(self) -> Result<Self> {
        if self.depth >= self.limit {
            return Err(Error::DepthExceeded { limit: self.limit });
        }
        Ok(Self {
            depth: self.depth + 1,
            limit: self.limit,
        })
    }

    /// Current depth; zero outside any entity.
    #[must_use]
    pub fn depth(self) -> usize {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_stops_at_limit() {
        let nesting = Nesting::new(&DecodeOptions { max_depth: 2 });
        let one = nesting.enter().expect("first level");
        let two = one.enter().expect("second level");
        assert_eq!(two.depth(), 2);
        assert!(matches!(two.enter(), Err(Error::DepthExceeded { limit: 2 })));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: DecodeOptions = serde_json::from_str("{}").expect("defaults");
        assert_eq!(options, DecodeOptions::default());
        let options: DecodeOptions =
            serde_json::from_str(r#"{ "max-depth": 8 }"#).expect("explicit");
        assert_eq!(options.max_depth, 8);
    }
}
