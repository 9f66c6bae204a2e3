//! # Atlas Engine
//!
//! The orchestration layer for name-based construction.
//!
//! This struct wires a catalog adapter (Lookup port) to braid-word
//! validation and exposes a unified API for opening braid words by knot
//! identifier.

use crate::adapters::catalog::MemoryCatalog;
use crate::core::BraidWord;
use crate::ports::{Lookup, LookupError, LookupResult};

/// The braid atlas
///
/// Resolves knot identifiers through a Lookup adapter and hands back
/// validated braid words.
pub struct Atlas {
    /// Catalog backend (Lookup port)
    catalog: Box<dyn Lookup>,
}

impl Atlas {
    /// Create a new atlas over the standard built-in catalog
    pub fn new() -> Self {
        Self {
            catalog: Box::new(MemoryCatalog::standard()),
        }
    }

    /// Create with a custom catalog adapter
    pub fn with_adapters(catalog: Box<dyn Lookup>) -> Self {
        Self { catalog }
    }

    /// Open the braid word registered under `name`.
    ///
    /// The record is validated on the way out; a catalog entry that fails
    /// validation is reported as an invalid record rather than a panic.
    pub fn word(&self, name: &str) -> LookupResult<BraidWord> {
        let generators = self.catalog.lookup(name)?;

        BraidWord::new(generators).map_err(|source| LookupError::InvalidRecord {
            name: name.to_string(),
            source,
        })
    }

    /// Check if `name` is present in the catalog
    pub fn contains(&self, name: &str) -> bool {
        self.catalog.contains(name)
    }

    /// All known identifiers, in ascending lexicographic order
    pub fn names(&self) -> Vec<String> {
        self.catalog.names()
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

impl Default for Atlas {
    fn default() -> Self {
        Self::new()
    }
}
