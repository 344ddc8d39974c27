//! Printable-text generation and length-accurate hex/base64 encoders.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;

use super::{AvoidanceSet, GenerateError, RandomEngine};
use crate::entropy::EntropySource;

/// Lowest printable byte value, inclusive.
const PRINTABLE_MIN: u8 = 32;
/// Highest printable byte value, inclusive.
const PRINTABLE_MAX: u8 = 126;

impl<S: EntropySource> RandomEngine<S> {
    /// Generates exactly `length` printable ASCII bytes.
    ///
    /// Output values are strictly greater than 31 and strictly less
    /// than 127, i.e. the visible printable range `{32..126}`.
    pub fn printable(&self, length: usize) -> Result<Vec<u8>, GenerateError> {
        self.printable_avoiding(length, &AvoidanceSet::new())
    }

    /// Generates exactly `length` printable ASCII bytes, none of which
    /// are in `avoid`.
    ///
    /// Same rejection-sampling guarantees as byte generation, applied
    /// to the printable alphabet instead of the full byte range.
    ///
    /// # Errors
    ///
    /// [`GenerateError::ImpossibleConstraint`] if `avoid` covers the
    /// entire printable range and `length > 0`.
    pub fn printable_avoiding(
        &self,
        length: usize,
        avoid: &AvoidanceSet,
    ) -> Result<Vec<u8>, GenerateError> {
        if length == 0 {
            return Ok(Vec::new());
        }
        if avoid.covers(PRINTABLE_MIN..=PRINTABLE_MAX) {
            return Err(GenerateError::ImpossibleConstraint);
        }

        let span = u64::from(PRINTABLE_MAX - PRINTABLE_MIN);
        let mut out = Vec::with_capacity(length);
        for _ in 0..length {
            loop {
                let byte = PRINTABLE_MIN + self.integer_up_to(span)? as u8;
                if !avoid.contains(byte) {
                    out.push(byte);
                    break;
                }
            }
        }

        Ok(out)
    }

    /// Generates a random hex string of even length ≥ `min_length`.
    ///
    /// Raw bytes of length `ceil(min_length / 2)` are generated and
    /// hex-encoded; every byte maps to exactly two digits, so the
    /// output always decodes cleanly under a standard hex decoder.
    ///
    /// `decodable = false` relaxes only the length contract, never the
    /// correctness contract: the output is well-formed either way.
    pub fn hex(&self, min_length: usize, decodable: bool) -> Result<String, GenerateError> {
        if !decodable {
            tracing::debug!(min_length, "decodable=false requested; output stays well-formed");
        }
        if min_length == 0 {
            return Ok(String::new());
        }

        let raw = self.bytes(min_length.div_ceil(2))?;
        Ok(hex::encode(raw))
    }

    /// Generates a random standard-padded base64 string of length
    /// ≥ `min_length`.
    ///
    /// Raw bytes of length `ceil(min_length × 3 / 4)` are generated
    /// and encoded with standard padding, so the output length is a
    /// multiple of 4 and any conformant decoder accepts it.
    ///
    /// `decodable = false` relaxes only the length contract, never the
    /// correctness contract: the output is well-formed either way.
    pub fn base64(&self, min_length: usize, decodable: bool) -> Result<String, GenerateError> {
        if !decodable {
            tracing::debug!(min_length, "decodable=false requested; output stays well-formed");
        }
        if min_length == 0 {
            return Ok(String::new());
        }

        let raw = self.bytes((min_length * 3).div_ceil(4))?;
        Ok(BASE64_STANDARD.encode(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::SeededEntropy;

    fn engine() -> RandomEngine<SeededEntropy> {
        RandomEngine::with_source(SeededEntropy::from_u64(0x7E47))
    }

    #[test]
    fn test_printable_range_and_length() {
        let engine = engine();
        for length in [1usize, 10, 95, 500] {
            let data = engine.printable(length).unwrap();
            assert_eq!(data.len(), length);
            assert!(data.iter().all(|&b| b > 31 && b < 127));
        }
    }

    #[test]
    fn test_printable_zero_length() {
        let engine = engine();
        assert!(engine.printable(0).unwrap().is_empty());
    }

    #[test]
    fn test_printable_avoidance() {
        let engine = engine();
        let avoid: AvoidanceSet = (b'a'..=b'z').collect();

        let data = engine.printable_avoiding(500, &avoid).unwrap();
        assert!(data.iter().all(|b| !b.is_ascii_lowercase()));
    }

    #[test]
    fn test_printable_fully_avoided_rejected() {
        let engine = engine();
        let avoid: AvoidanceSet = (32..=126u8).collect();

        assert!(matches!(
            engine.printable_avoiding(1, &avoid),
            Err(GenerateError::ImpossibleConstraint)
        ));
    }

    #[test]
    fn test_hex_length_and_decodability() {
        let engine = engine();
        for min_length in [1usize, 2, 5, 63, 64, 1000] {
            let text = engine.hex(min_length, true).unwrap();
            assert!(text.len() >= min_length);
            assert_eq!(text.len() % 2, 0);

            let decoded = hex::decode(&text).unwrap();
            assert_eq!(decoded.len(), text.len() / 2);
        }
    }

    #[test]
    fn test_hex_five_decodes_to_three_bytes() {
        let engine = engine();
        let text = engine.hex(5, true).unwrap();
        assert_eq!(text.len(), 6);
        assert_eq!(hex::decode(&text).unwrap().len(), 3);
    }

    #[test]
    fn test_base64_length_and_decodability() {
        let engine = engine();
        for min_length in [1usize, 3, 4, 5, 100, 1000] {
            let text = engine.base64(min_length, true).unwrap();
            assert!(text.len() >= min_length);
            assert_eq!(text.len() % 4, 0);
            BASE64_STANDARD.decode(&text).unwrap();
        }
    }

    #[test]
    fn test_encoders_zero_length() {
        let engine = engine();
        assert!(engine.hex(0, true).unwrap().is_empty());
        assert!(engine.base64(0, true).unwrap().is_empty());
    }

    #[test]
    fn test_decodable_false_still_well_formed() {
        let engine = engine();

        let hex_text = engine.hex(9, false).unwrap();
        assert!(hex_text.len() >= 9);
        hex::decode(&hex_text).unwrap();

        let b64_text = engine.base64(9, false).unwrap();
        assert!(b64_text.len() >= 9);
        BASE64_STANDARD.decode(&b64_text).unwrap();
    }
}
