//! Deterministic seeded entropy source for tests.

use std::sync::Mutex;

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use super::{EntropyError, EntropySource};

/// A deterministic entropy source backed by ChaCha20.
///
/// Produces a reproducible byte stream from a fixed seed so that
/// statistical tests and failure reproductions are deterministic.
/// The stream is cryptographic-quality but the seed is caller-chosen,
/// so this source must never back production key material.
///
/// `ChaCha20Rng` is not shareable by itself; the draw is serialized
/// behind a mutex scoped only around the fill.
#[derive(Debug)]
pub struct SeededEntropy {
    inner: Mutex<ChaCha20Rng>,
}

impl SeededEntropy {
    /// Creates a source producing the stream determined by `seed`.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: Mutex::new(ChaCha20Rng::from_seed(seed)),
        }
    }

    /// Creates a source from a small integer seed, for test brevity.
    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let mut rng = match self.inner.lock() {
            Ok(guard) => guard,
            // A panic elsewhere cannot corrupt the ChaCha state; keep going.
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let a = SeededEntropy::from_u64(7);
        let b = SeededEntropy::from_u64(7);

        let mut buf_a = [0u8; 64];
        let mut buf_b = [0u8; 64];
        a.fill(&mut buf_a).unwrap();
        b.fill(&mut buf_b).unwrap();

        assert_eq!(buf_a, buf_b);
    }

    #[test]
    fn test_different_seed_different_stream() {
        let a = SeededEntropy::from_u64(1);
        let b = SeededEntropy::from_u64(2);

        let mut buf_a = [0u8; 64];
        let mut buf_b = [0u8; 64];
        a.fill(&mut buf_a).unwrap();
        b.fill(&mut buf_b).unwrap();

        assert_ne!(buf_a, buf_b);
    }

    #[test]
    fn test_stream_advances_between_draws() {
        let source = SeededEntropy::from_seed([0x42; 32]);

        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        source.fill(&mut first).unwrap();
        source.fill(&mut second).unwrap();

        assert_ne!(first, second);
    }
}
