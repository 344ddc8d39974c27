//! Generation error types.

use crate::entropy::EntropyError;
use thiserror::Error;

/// Errors that can occur during constrained generation.
///
/// All variants are raised synchronously at the violated precondition;
/// no partial output is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The avoidance set leaves no valid output alphabet.
    #[error("avoidance set leaves no allowed value in the output alphabet")]
    ImpossibleConstraint,

    /// `max < min` for bounded integer generation.
    #[error("invalid integer range: maximum {max} < minimum {min}")]
    InvalidRange {
        /// Requested lower bound.
        min: u64,
        /// Requested upper bound.
        max: u64,
    },

    /// The sampling source buffer is empty.
    #[error("sampling source buffer is empty")]
    EmptySource,

    /// The underlying entropy source failed.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
