//! Entropy source abstraction.
//!
//! This module provides a trait-based abstraction over the process-wide
//! secure random source, allowing the production OS-backed source and a
//! deterministic seeded source for tests to be used interchangeably.

mod seeded;
mod source;

pub use seeded::SeededEntropy;
pub use source::{EntropyError, EntropySource, OsEntropy};
