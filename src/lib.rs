//! # Artin - Braid Words and Their Elementary Transformations
//!
//! Artin represents elements of braid groups as words over signed
//! generators and implements the elementary moves used to explore,
//! simplify, and relate equivalent braid words: the Markov moves
//! (stabilization/destabilization, conjugation), both Artin relations,
//! cyclic shifts, and free reduction. It is the word-level foundation for
//! braid-word simplification search and knot-invariant tooling built on
//! top.
//!
//! ## Philosophy
//!
//! - **Predicate before mutation** - every move pairs a pure `is_*_performable`
//!   query with an atomic mutator; nothing is half-applied
//! - **Derived, not declared** - the strand count follows the generator
//!   sequence; it is never free-floating state
//! - **Enumerable rewrite sites** - `*_performable_indices` scans feed
//!   exhaustive search drivers without re-deriving preconditions
//! - **Pure core, swappable adapters** - Hexagonal architecture
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         ARTIN                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure math, no I/O)                                   │
//! │    BraidWord, Generator, BraidError                         │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Lookup                                                    │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Catalog: Memory                                           │
//! │    API: Python bindings                                      │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    Atlas - name-based construction                          │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use artin::{Atlas, BraidWord};
//!
//! // A trefoil from the built-in catalog
//! let atlas = Atlas::new();
//! let mut braid = atlas.word("3_1").unwrap();
//! assert_eq!(braid.values(), (2, &[1, 1, 1][..]));
//!
//! // Markov moves preserve the closure's knot type
//! braid.stabilization(false);
//! assert_eq!(braid.values(), (3, &[1, 1, 1, 2][..]));
//! braid.destabilization().unwrap();
//!
//! // Free reduction cancels adjacent inverse pairs
//! let mut word = BraidWord::new(vec![1, 2, -2, 1, 1]).unwrap();
//! word.remove_sigma_inverse_pair(1).unwrap();
//! assert_eq!(word.generators(), &[1, 1, 1]);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure math, no I/O
/// Contains: BraidWord, Generator, BraidError
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Lookup trait
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: catalog, python submodules
pub mod adapters;

/// Engine - orchestration layer
/// Contains: Atlas main struct
pub mod engine;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::*;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{BraidError, BraidResult, BraidWord, Generator};

// Port traits
pub use crate::ports::{Lookup, LookupError, LookupResult};

// Adapters
pub use crate::adapters::catalog::MemoryCatalog;

// Engine
pub use crate::engine::Atlas;
