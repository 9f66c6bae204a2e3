//! # Engine
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - Catalog adapters are connected to the Lookup port
//! - Name-based braid-word construction is exposed

mod atlas;

pub use atlas::Atlas;
