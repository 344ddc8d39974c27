//! The constrained random engine.
//!
//! Owns an injected secure entropy source and exposes raw byte
//! generation, bounded-integer generation, constrained sampling,
//! printable-text generation, and length-accurate hex/base64 encoders.
//! All operations are independent, stateless with respect to each
//! other, and take `&self`, so a single engine may be shared across
//! threads.
//!
//! Uniformity under constraints is obtained by rejection sampling:
//! draw from the full alphabet and redraw anything that lands in the
//! forbidden subset. A uniform draw restricted this way stays uniform
//! over the allowed values, and the redraw count per output byte is
//! geometric with success probability `(allowed / alphabet)`.

mod avoid;
mod bytes;
mod error;
mod integer;
mod sample;
mod text;

pub use avoid::AvoidanceSet;
pub use error::GenerateError;
pub use integer::DEFAULT_INTEGER_MAX;

use crate::entropy::{EntropySource, OsEntropy};

/// Constrained secure-random generation engine.
///
/// Generic over its entropy source so tests can inject a deterministic
/// stream while production callers use the OS source. Construction is
/// cheap; the engine holds no state besides the source handle.
#[derive(Debug)]
pub struct RandomEngine<S: EntropySource = OsEntropy> {
    source: S,
}

impl RandomEngine<OsEntropy> {
    /// Creates an engine backed by the OS secure entropy source.
    pub fn new() -> Self {
        Self {
            source: OsEntropy::new(),
        }
    }
}

impl Default for RandomEngine<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EntropySource> RandomEngine<S> {
    /// Creates an engine backed by the given entropy source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the underlying entropy source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Draws fresh entropy into `dest`.
    pub(crate) fn draw(&self, dest: &mut [u8]) -> Result<(), GenerateError> {
        self.source.fill(dest)?;
        Ok(())
    }
}
