//! Constrained Random CLI
//!
//! Command-line demonstration of the constrained random engine:
//! generates sample material under typical constraints and prints it.

use constrained_random::{AvoidanceSet, Munger, RandomEngine};
use tracing::{info, warn};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Constrained Random Generator v{}",
        constrained_random::VERSION
    );

    let engine = RandomEngine::new();

    // Raw key material avoiding NUL and line terminators (common wire hazards)
    let avoid: AvoidanceSet = [0x00u8, 0x0A, 0x0D].into();
    match engine.bytes_avoiding(32, &avoid) {
        Ok(key) => println!(
            "Key bytes (no NUL/CR/LF): {}",
            hex::encode(&key)
        ),
        Err(e) => warn!("byte generation failed: {}", e),
    }

    // Printable material, e.g. for a generated password
    match engine.printable(24) {
        Ok(data) => match String::from_utf8(data) {
            Ok(text) => println!("Printable: {}", text),
            Err(e) => warn!("printable output was not ASCII: {}", e),
        },
        Err(e) => warn!("printable generation failed: {}", e),
    }

    // Decodable encoded tokens
    match engine.hex(16, true) {
        Ok(token) => println!("Hex token: {}", token),
        Err(e) => warn!("hex generation failed: {}", e),
    }
    match engine.base64(16, true) {
        Ok(token) => println!("Base64 token: {}", token),
        Err(e) => warn!("base64 generation failed: {}", e),
    }

    // Unbiased bounded integer
    match engine.integer_between(0, 100) {
        Ok(value) => println!("Integer in [0, 100]: {}", value),
        Err(e) => warn!("integer generation failed: {}", e),
    }

    // Obfuscation round trip
    let munger = Munger::new();
    let message = b"constrained random demo payload";
    match munger.munge(message) {
        Ok(munged) => {
            println!("Munged ({} bytes): {}", munged.len(), hex::encode(&munged));
            match munger.unmunge(&munged) {
                Ok(recovered) if recovered == message => {
                    info!("munge round trip verified");
                }
                Ok(_) => warn!("munge round trip produced different bytes"),
                Err(e) => warn!("unmunge failed: {}", e),
            }
        }
        Err(e) => warn!("munge failed: {}", e),
    }
}
