//! # Ports
//!
//! Trait contracts for adapters.
//!
//! The core never performs I/O; anything that resolves external data
//! implements a port here and is wired in by the engine. The only port is
//! `Lookup`, the knot/braid catalog collaborator consulted when a braid
//! word is constructed from a name.

use thiserror::Error;

use crate::core::{BraidError, Generator};

/// Result type alias for catalog lookups
pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Errors produced by `Lookup` adapters and the engine around them
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The identifier is not present in the catalog.
    #[error("unknown braid name: {0}")]
    UnknownName(String),

    /// The catalog returned a record that fails braid-word validation.
    #[error("invalid catalog record for {name}: {source}")]
    InvalidRecord {
        /// The identifier whose record was rejected
        name: String,
        /// The underlying validation failure
        source: BraidError,
    },
}

/// Lookup port: resolve a textual knot/braid identifier to its generator
/// sequence.
///
/// Records are external immutable data; the strand count is implied by the
/// sequence and derived by the core at construction time.
pub trait Lookup {
    /// Resolve `name` to a generator sequence
    fn lookup(&self, name: &str) -> LookupResult<Vec<Generator>>;

    /// Check if `name` is present
    fn contains(&self, name: &str) -> bool;

    /// Number of catalog entries
    fn len(&self) -> usize;

    /// Check if the catalog is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All known identifiers, in ascending lexicographic order
    fn names(&self) -> Vec<String>;
}
