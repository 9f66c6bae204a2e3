//! # Memory Catalog Adapter
//!
//! In-memory knot table using HashMap.
//!
//! Records map a knot identifier in Rolfsen-style notation ("3_1") to the
//! generator sequence of a braid whose closure is that knot. The standard
//! table is a small built-in selection; `insert` extends a catalog with
//! caller-supplied records.

use std::collections::HashMap;

use crate::core::Generator;
use crate::ports::{Lookup, LookupError, LookupResult};

/// In-memory catalog adapter
pub struct MemoryCatalog {
    /// The stored records
    entries: HashMap<String, Vec<Generator>>,
}

impl MemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a catalog preloaded with the standard knot table
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.insert("0_1", vec![]);
        catalog.insert("3_1", vec![1, 1, 1]);
        catalog.insert("4_1", vec![1, -2, 1, -2]);
        catalog.insert("5_1", vec![1, 1, 1, 1, 1]);
        catalog.insert("5_2", vec![1, 1, 1, 2, -1, 2]);
        catalog.insert("6_2", vec![1, 1, 1, -2, 1, -2]);
        catalog.insert("6_3", vec![1, 1, -2, 1, -2, -2]);
        catalog.insert("7_1", vec![1, 1, 1, 1, 1, 1, 1]);
        catalog.insert("8_19", vec![1, 2, 1, 2, 1, 2, 1, 2]);
        catalog.insert("10_124", vec![1, 2, 1, 2, 1, 2, 1, 2, 1, 2]);

        catalog
    }

    /// Add or replace a record
    pub fn insert(&mut self, name: &str, generators: Vec<Generator>) {
        self.entries.insert(name.to_string(), generators);
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Lookup for MemoryCatalog {
    fn lookup(&self, name: &str) -> LookupResult<Vec<Generator>> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::UnknownName(name.to_string()))
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_catalog_starts_empty() {
        let catalog = MemoryCatalog::new();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_memory_catalog_standard_trefoil() {
        let catalog = MemoryCatalog::standard();
        assert_eq!(catalog.lookup("3_1").unwrap(), vec![1, 1, 1]);
    }

    #[test]
    fn test_memory_catalog_standard_unknot() {
        let catalog = MemoryCatalog::standard();
        assert!(catalog.lookup("0_1").unwrap().is_empty());
    }

    #[test]
    fn test_memory_catalog_unknown_name() {
        let catalog = MemoryCatalog::standard();
        let err = catalog.lookup("99_99").unwrap_err();
        assert_eq!(err, LookupError::UnknownName("99_99".to_string()));
    }

    #[test]
    fn test_memory_catalog_insert_and_contains() {
        let mut catalog = MemoryCatalog::new();
        assert!(!catalog.contains("granny"));

        catalog.insert("granny", vec![1, 1, 1, 2, 2, 2]);

        assert!(catalog.contains("granny"));
        assert_eq!(catalog.lookup("granny").unwrap(), vec![1, 1, 1, 2, 2, 2]);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_memory_catalog_insert_replaces() {
        let mut catalog = MemoryCatalog::new();
        catalog.insert("w", vec![1]);
        catalog.insert("w", vec![2, 2]);
        assert_eq!(catalog.lookup("w").unwrap(), vec![2, 2]);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_memory_catalog_names_sorted() {
        let mut catalog = MemoryCatalog::new();
        catalog.insert("5_1", vec![1, 1, 1, 1, 1]);
        catalog.insert("3_1", vec![1, 1, 1]);
        catalog.insert("4_1", vec![1, -2, 1, -2]);

        assert_eq!(catalog.names(), ["3_1", "4_1", "5_1"]);
    }
}
