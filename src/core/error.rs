//! Error types for braid-word construction and transformation.
//!
//! Two failure kinds exist, mirroring the two ways a caller can go wrong:
//! handing over a malformed generator sequence, or invoking a transformation
//! whose precondition does not hold. Transformations are atomic: on error
//! the word is left untouched.

use thiserror::Error;

/// Result type alias for braid-word operations
pub type BraidResult<T> = std::result::Result<T, BraidError>;

/// Errors produced by [`BraidWord`](crate::core::BraidWord)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BraidError {
    /// A generator sequence contained a zero entry.
    ///
    /// Generators are nonzero by definition: `g > 0` is the Artin generator
    /// of index `g`, `g < 0` its inverse. Zero names no crossing.
    #[error("invalid braid word: zero generator at position {position}")]
    ZeroGenerator {
        /// Position of the first zero entry in the rejected sequence
        position: usize,
    },

    /// A mutating operation was invoked while its predicate is false.
    ///
    /// This covers indices outside the word as well as windows that do not
    /// match the transformation's shape; predicates answer `false` for
    /// both, and mutators refuse both identically.
    #[error("illegal transformation: {op} is not performable here")]
    IllegalTransformation {
        /// Name of the refused operation
        op: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_generator_message_names_position() {
        let err = BraidError::ZeroGenerator { position: 3 };
        assert_eq!(
            err.to_string(),
            "invalid braid word: zero generator at position 3"
        );
    }

    #[test]
    fn test_illegal_transformation_message_names_operation() {
        let err = BraidError::IllegalTransformation {
            op: "destabilization",
        };
        assert!(err.to_string().contains("destabilization"));
    }
}
