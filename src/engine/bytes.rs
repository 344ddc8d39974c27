//! Raw byte generation under an avoidance set.

use super::{AvoidanceSet, GenerateError, RandomEngine};
use crate::entropy::EntropySource;

impl<S: EntropySource> RandomEngine<S> {
    /// Generates exactly `length` uniformly random bytes.
    pub fn bytes(&self, length: usize) -> Result<Vec<u8>, GenerateError> {
        self.bytes_avoiding(length, &AvoidanceSet::new())
    }

    /// Generates exactly `length` bytes, each uniform over the byte
    /// values not in `avoid`.
    ///
    /// Bytes landing in the avoidance set are individually redrawn
    /// until allowed, which preserves uniformity over the remaining
    /// alphabet. Expected redraws per byte are `256 / (256 - |avoid|)`,
    /// so the loop terminates almost surely for any non-full set.
    ///
    /// # Errors
    ///
    /// [`GenerateError::ImpossibleConstraint`] if `avoid` covers all
    /// 256 byte values and `length > 0`.
    pub fn bytes_avoiding(
        &self,
        length: usize,
        avoid: &AvoidanceSet,
    ) -> Result<Vec<u8>, GenerateError> {
        if length == 0 {
            return Ok(Vec::new());
        }
        if avoid.is_full() {
            return Err(GenerateError::ImpossibleConstraint);
        }

        let mut out = vec![0u8; length];
        self.draw(&mut out)?;

        if avoid.is_empty() {
            // Fast path: nothing to reject.
            return Ok(out);
        }

        let mut redraw = [0u8; 1];
        for byte in out.iter_mut() {
            while avoid.contains(*byte) {
                self.draw(&mut redraw)?;
                *byte = redraw[0];
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SeededEntropy;

    fn engine() -> RandomEngine<SeededEntropy> {
        RandomEngine::with_source(SeededEntropy::from_u64(0xB17E5))
    }

    #[test]
    fn test_exact_length() {
        let engine = engine();
        for length in [1usize, 2, 16, 255, 256, 1000] {
            assert_eq!(engine.bytes(length).unwrap().len(), length);
        }
    }

    #[test]
    fn test_zero_length_is_empty() {
        let engine = engine();
        assert!(engine.bytes(0).unwrap().is_empty());
        assert!(engine
            .bytes_avoiding(0, &(0..=255u8).collect())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_avoided_bytes_never_appear() {
        let engine = engine();
        let avoid: AvoidanceSet = [0x00u8, 0x0A, 0x41, 0xFF].into();

        for _ in 0..100 {
            let data = engine.bytes_avoiding(256, &avoid).unwrap();
            assert_eq!(data.len(), 256);
            assert!(data.iter().all(|b| !avoid.contains(*b)));
        }
    }

    #[test]
    fn test_large_avoidance_set_terminates() {
        let engine = engine();
        // All but one value forbidden: output must be that value.
        let avoid: AvoidanceSet = (0..=255u8).filter(|&b| b != 0x5A).collect();

        let data = engine.bytes_avoiding(64, &avoid).unwrap();
        assert!(data.iter().all(|&b| b == 0x5A));
    }

    #[test]
    fn test_full_avoidance_set_rejected() {
        let engine = engine();
        let avoid: AvoidanceSet = (0..=255u8).collect();

        assert!(matches!(
            engine.bytes_avoiding(1, &avoid),
            Err(GenerateError::ImpossibleConstraint)
        ));
    }
}
