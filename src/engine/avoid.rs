//! Forbidden-byte sets for constrained generation.

/// A set of byte values that generated output must never contain.
///
/// Backed by a 256-bit bitmap, so membership checks inside the
/// rejection-sampling loops are a mask and shift. Inserting a value
/// twice is a no-op; values outside 0–255 are unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvoidanceSet {
    bits: [u64; 4],
}

impl AvoidanceSet {
    /// Creates an empty set (nothing avoided).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a byte value to the set.
    pub fn insert(&mut self, value: u8) {
        self.bits[(value >> 6) as usize] |= 1u64 << (value & 63);
    }

    /// Returns true if `value` is avoided.
    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        self.bits[(value >> 6) as usize] & (1u64 << (value & 63)) != 0
    }

    /// Returns the number of distinct avoided values.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if nothing is avoided.
    pub fn is_empty(&self) -> bool {
        self.bits == [0; 4]
    }

    /// Returns true if all 256 byte values are avoided.
    ///
    /// A full set leaves no valid output alphabet for full-range
    /// generation, so operations reject it up front.
    pub fn is_full(&self) -> bool {
        self.bits == [u64::MAX; 4]
    }

    /// Returns true if every value in `alphabet` is avoided.
    pub fn covers(&self, alphabet: impl IntoIterator<Item = u8>) -> bool {
        alphabet.into_iter().all(|b| self.contains(b))
    }
}

impl FromIterator<u8> for AvoidanceSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl From<&[u8]> for AvoidanceSet {
    fn from(values: &[u8]) -> Self {
        values.iter().copied().collect()
    }
}

impl<const N: usize> From<[u8; N]> for AvoidanceSet {
    fn from(values: [u8; N]) -> Self {
        values.into_iter().collect()
    }
}
