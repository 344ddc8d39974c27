//! Constrained Secure-Random Generation Library
//!
//! Produces random byte sequences, integers, and encoded strings
//! (printable ASCII, hex, base64) that satisfy caller-supplied
//! constraints: exact length, exclusion of specific byte values
//! ("avoidance"), and guaranteed decodability of encoded output.
//! Intended consumers are session-key/material generation, fuzz and
//! test-data generation, and obfuscation-key generation — layers that
//! must never receive output violating the requested constraints.
//!
//! # Architecture
//!
//! ```text
//! entropy (OS-backed or seeded source)
//!    ↓
//! engine (rejection sampling, bounded integers, encoders)
//!    ↓
//! munge (obfuscation keys)     rpc (request validation)
//! ```
//!
//! # Design Principles
//!
//! - **Uniform under constraints**: rejection sampling, never modulo
//!   reduction, so avoidance and bounded ranges stay bias-free
//! - **Injected entropy**: the secure source is a constructor argument,
//!   not a hidden global, so tests can substitute a seeded stream
//! - **Stateless operations**: every call is a pure function of its
//!   inputs plus fresh entropy; one engine is safely shared by threads
//! - **Errors at the precondition**: impossible constraints fail
//!   immediately with no partial output
//!
//! # Example
//!
//! ```
//! use constrained_random::{AvoidanceSet, RandomEngine};
//!
//! let engine = RandomEngine::new();
//!
//! // 32 key bytes that never contain NUL or newline
//! let avoid: AvoidanceSet = [0x00u8, 0x0A].into();
//! let key = engine.bytes_avoiding(32, &avoid).unwrap();
//! assert_eq!(key.len(), 32);
//! assert!(key.iter().all(|b| !avoid.contains(*b)));
//!
//! // A session token that any base64 decoder accepts
//! let token = engine.base64(24, true).unwrap();
//! assert!(token.len() >= 24);
//!
//! // An unbiased die roll
//! let roll = engine.integer_between(1, 6).unwrap();
//! assert!((1..=6).contains(&roll));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod engine;
pub mod entropy;
pub mod munge;
pub mod rpc;

// Re-export commonly used types at crate root
pub use engine::{AvoidanceSet, GenerateError, RandomEngine, DEFAULT_INTEGER_MAX};
pub use entropy::{EntropyError, EntropySource, OsEntropy, SeededEntropy};
pub use munge::{MungeError, Munger};
pub use rpc::{SubscribeRequest, ValidationError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
