//! Symmetric byte obfuscation.
//!
//! Pure, deterministic, invertible XOR transforms over byte buffers,
//! plus a self-describing `munge`/`unmunge` pair that draws its key
//! from the constrained random engine. These are obfuscation
//! primitives, not encryption.

mod obfuscate;

pub use obfuscate::{
    multi_byte_rotating_xor, multi_byte_xor, rotating_xor, xor, MungeError, Munger,
};
