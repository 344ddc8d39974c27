//! XOR obfuscation transforms and the keyed munge/unmunge pair.

use thiserror::Error;

use crate::engine::{GenerateError, RandomEngine};
use crate::entropy::{EntropySource, OsEntropy};

/// Shortest key `munge` will draw, inclusive.
const MIN_KEY_LEN: u64 = 4;
/// Longest key `munge` will draw, inclusive.
const MAX_KEY_LEN: u64 = 16;

/// Errors that can occur during obfuscation.
#[derive(Debug, Error)]
pub enum MungeError {
    /// The input buffer is empty.
    #[error("input buffer is empty")]
    EmptyInput,

    /// The key buffer is empty.
    #[error("key is empty")]
    EmptyKey,

    /// A munged buffer is too short to carry its key header.
    #[error("munged buffer too short for its key header")]
    TruncatedHeader,

    /// Key generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// XORs every byte of `data` with a single key byte.
///
/// # Errors
///
/// [`MungeError::EmptyInput`] if `data` is empty.
pub fn xor(data: &[u8], key: u8) -> Result<Vec<u8>, MungeError> {
    if data.is_empty() {
        return Err(MungeError::EmptyInput);
    }
    Ok(data.iter().map(|b| b ^ key).collect())
}

/// XORs `data` against `key` cycled byte-by-byte.
///
/// Position `i` is combined with `key[i mod key.len()]`.
///
/// # Errors
///
/// [`MungeError::EmptyInput`] if `data` is empty;
/// [`MungeError::EmptyKey`] if `key` is empty.
pub fn multi_byte_xor(data: &[u8], key: &[u8]) -> Result<Vec<u8>, MungeError> {
    if data.is_empty() {
        return Err(MungeError::EmptyInput);
    }
    if key.is_empty() {
        return Err(MungeError::EmptyKey);
    }
    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(b, k)| b ^ k)
        .collect())
}

/// XORs `data` with a rotating single-byte keystream.
///
/// The keystream byte for position `i` is `key` rotated left by
/// `i mod 8` bits. The keystream depends only on position and key, so
/// applying the transform twice restores the input.
///
/// # Errors
///
/// [`MungeError::EmptyInput`] if `data` is empty.
pub fn rotating_xor(data: &[u8], key: u8) -> Result<Vec<u8>, MungeError> {
    if data.is_empty() {
        return Err(MungeError::EmptyInput);
    }
    Ok(data
        .iter()
        .enumerate()
        .map(|(i, b)| b ^ key.rotate_left((i % 8) as u32))
        .collect())
}

/// XORs `data` with a rotating multi-byte keystream.
///
/// Position `i` uses `key[i mod k]` rotated left by `(i / k) mod 8`
/// bits, so the key pattern shifts every full cycle. Self-inverse by
/// re-application.
///
/// # Errors
///
/// [`MungeError::EmptyInput`] if `data` is empty;
/// [`MungeError::EmptyKey`] if `key` is empty.
pub fn multi_byte_rotating_xor(data: &[u8], key: &[u8]) -> Result<Vec<u8>, MungeError> {
    if data.is_empty() {
        return Err(MungeError::EmptyInput);
    }
    if key.is_empty() {
        return Err(MungeError::EmptyKey);
    }
    let k = key.len();
    Ok(data
        .iter()
        .enumerate()
        .map(|(i, b)| b ^ key[i % k].rotate_left(((i / k) % 8) as u32))
        .collect())
}

/// Keyed obfuscator producing self-describing munged buffers.
///
/// The raw transforms above never draw entropy; only
/// [`Munger::munge`] does, to pick its key.
#[derive(Debug)]
pub struct Munger<S: EntropySource = OsEntropy> {
    engine: RandomEngine<S>,
}

impl Munger<OsEntropy> {
    /// Creates a munger whose keys come from the OS entropy source.
    pub fn new() -> Self {
        Self {
            engine: RandomEngine::new(),
        }
    }
}

impl Default for Munger<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EntropySource> Munger<S> {
    /// Creates a munger drawing keys from the given engine.
    pub fn with_engine(engine: RandomEngine<S>) -> Self {
        Self { engine }
    }

    /// Obfuscates `data` under a freshly drawn random key.
    ///
    /// The key (length uniform in [4, 16]) is prepended as a
    /// self-describing header (`key_len, key…`) ahead of the
    /// transformed body, so [`Munger::unmunge`] needs no out-of-band
    /// state.
    ///
    /// # Errors
    ///
    /// [`MungeError::EmptyInput`] if `data` is empty;
    /// [`MungeError::Generate`] if key generation fails.
    pub fn munge(&self, data: &[u8]) -> Result<Vec<u8>, MungeError> {
        if data.is_empty() {
            return Err(MungeError::EmptyInput);
        }

        let key_len = self.engine.integer_between(MIN_KEY_LEN, MAX_KEY_LEN)? as usize;
        let key = self.engine.bytes(key_len)?;
        let body = multi_byte_rotating_xor(data, &key)?;

        tracing::trace!(key_len, body_len = body.len(), "munged buffer");

        let mut out = Vec::with_capacity(1 + key_len + body.len());
        out.push(key_len as u8);
        out.extend_from_slice(&key);
        out.extend_from_slice(&body);
        Ok(out)
    }

    /// Inverts [`Munger::munge`], recovering the original buffer.
    ///
    /// # Errors
    ///
    /// [`MungeError::TruncatedHeader`] if the buffer is shorter than
    /// its declared header plus one body byte;
    /// [`MungeError::EmptyKey`] if the header declares a zero-length
    /// key.
    pub fn unmunge(&self, data: &[u8]) -> Result<Vec<u8>, MungeError> {
        let (&key_len, rest) = data.split_first().ok_or(MungeError::TruncatedHeader)?;
        let key_len = key_len as usize;
        if key_len == 0 {
            return Err(MungeError::EmptyKey);
        }
        if rest.len() <= key_len {
            return Err(MungeError::TruncatedHeader);
        }

        let (key, body) = rest.split_at(key_len);
        multi_byte_rotating_xor(body, key)
    }
}
