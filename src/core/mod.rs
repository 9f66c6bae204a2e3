//! # Core Domain
//!
//! Pure braid-word math, no I/O.
//!
//! Contains the braid-word entity and its error types. Everything here is
//! deterministic, synchronous, and free of external collaborators; name
//! resolution lives behind the ports instead.

mod error;
mod word;

pub use error::{BraidError, BraidResult};
pub use word::{BraidWord, Generator};
