//! Entropy source trait and the OS-backed implementation.
//!
//! Every generation call draws fresh entropy; no source is ever reused
//! or reseeded deterministically in production code.

use rand_core::RngCore;
use thiserror::Error;

/// Errors that can occur while drawing entropy.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("entropy source failure: {0}")]
    SourceFailed(String),
}

/// Trait for secure entropy sources.
///
/// Implementations take `&self` and must be safe to share across
/// threads: many callers may draw concurrently without external
/// locking. If the underlying source is not itself thread-safe, the
/// implementation must serialize access with a lock scoped only around
/// the draw.
pub trait EntropySource: Send + Sync {
    /// Fills `dest` with fresh random bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// The OS-backed cryptographically secure entropy source.
///
/// Wraps the operating system CSPRNG (`getrandom` and friends via
/// `rand_core::OsRng`). Initialized once, no teardown, shared read-only
/// by all generation calls for the process lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl OsEntropy {
    /// Creates a handle to the OS entropy source.
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        // OsRng is a stateless handle; every call reaches the OS source.
        let mut rng = rand_core::OsRng;
        rng.try_fill_bytes(dest)
            .map_err(|e| EntropyError::SourceFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_entropy_fills_buffer() {
        let source = OsEntropy::new();
        let mut buf = [0u8; 64];
        source.fill(&mut buf).unwrap();

        // 64 zero bytes from a working CSPRNG is a 2^-512 event.
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_os_entropy_zero_length_fill() {
        let source = OsEntropy::new();
        let mut buf = [0u8; 0];
        source.fill(&mut buf).unwrap();
    }

    #[test]
    fn test_consecutive_draws_differ() {
        let source = OsEntropy::new();
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        source.fill(&mut a).unwrap();
        source.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }
}
