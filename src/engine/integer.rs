//! Bounded integer generation without modulo bias.

use super::{GenerateError, RandomEngine};
use crate::entropy::EntropySource;

/// Default upper bound for [`RandomEngine::integer`]: 2^32, inclusive.
pub const DEFAULT_INTEGER_MAX: u64 = 1 << 32;

impl<S: EntropySource> RandomEngine<S> {
    /// Returns a uniform integer in `[0, 2^32]` inclusive.
    pub fn integer(&self) -> Result<u64, GenerateError> {
        self.integer_between(0, DEFAULT_INTEGER_MAX)
    }

    /// Returns a uniform integer in `[0, max]` inclusive.
    pub fn integer_up_to(&self, max: u64) -> Result<u64, GenerateError> {
        self.integer_between(0, max)
    }

    /// Returns a uniform integer in `[min, max]` inclusive.
    ///
    /// Draws the minimal number of whole bytes covering the range
    /// width, then rejects any draw at or above the largest multiple
    /// of the width representable in that many bytes. Surviving draws
    /// reduce without modulo bias. The acceptance probability is
    /// always above 1/2, so the expected number of draws is below 2.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidRange`] if `max < min`.
    pub fn integer_between(&self, min: u64, max: u64) -> Result<u64, GenerateError> {
        if max < min {
            return Err(GenerateError::InvalidRange { min, max });
        }
        if min == max {
            return Ok(min);
        }
        if min == 0 && max == u64::MAX {
            // Full domain: a plain 8-byte draw is already unbiased.
            let mut buf = [0u8; 8];
            self.draw(&mut buf)?;
            return Ok(u64::from_le_bytes(buf));
        }

        let width = (max - min + 1) as u128;
        let bits = 128 - (width - 1).leading_zeros();
        let draw_bytes = ((bits + 7) / 8) as usize;
        let span: u128 = 1 << (8 * draw_bytes as u32);
        let limit = span - (span % width);

        let mut buf = [0u8; 8];
        loop {
            self.draw(&mut buf[..draw_bytes])?;
            let mut value: u128 = 0;
            for &b in &buf[..draw_bytes] {
                value = (value << 8) | u128::from(b);
            }
            if value < limit {
                return Ok(min + (value % width) as u64);
            }
        }
    }
}
