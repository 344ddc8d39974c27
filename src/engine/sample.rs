//! Constrained sampling from a caller-provided source buffer.

use super::{AvoidanceSet, GenerateError, RandomEngine};
use crate::entropy::EntropySource;

impl<S: EntropySource> RandomEngine<S> {
    /// Samples exactly `length` bytes from `source`, with replacement.
    pub fn sample(&self, source: &[u8], length: usize) -> Result<Vec<u8>, GenerateError> {
        self.sample_avoiding(source, length, &AvoidanceSet::new())
    }

    /// Samples exactly `length` bytes from `source`, with replacement,
    /// skipping values in `avoid`.
    ///
    /// Each output position picks a uniform index into `source` via the
    /// bounded-integer primitive and re-picks while the chosen byte is
    /// avoided, so the result is uniform over the multiset of allowed
    /// bytes in `source`. `length` may exceed `source.len()`.
    ///
    /// # Errors
    ///
    /// [`GenerateError::EmptySource`] if `source` is empty;
    /// [`GenerateError::ImpossibleConstraint`] if every byte value
    /// present in `source` is avoided.
    pub fn sample_avoiding(
        &self,
        source: &[u8],
        length: usize,
        avoid: &AvoidanceSet,
    ) -> Result<Vec<u8>, GenerateError> {
        if source.is_empty() {
            return Err(GenerateError::EmptySource);
        }
        // Termination check up front: the re-pick loop would spin
        // forever if no byte in the buffer is allowed.
        if !source.iter().any(|b| !avoid.contains(*b)) {
            return Err(GenerateError::ImpossibleConstraint);
        }

        let last_index = source.len() as u64 - 1;
        let mut out = Vec::with_capacity(length);
        for _ in 0..length {
            loop {
                let index = self.integer_up_to(last_index)? as usize;
                let byte = source[index];
                if !avoid.contains(byte) {
                    out.push(byte);
                    break;
                }
            }
        }

        Ok(out)
    }
}
