//! Domain Services
//!
//! Address generation. Addresses are opaque identifiers to the rest of
//! the system; nothing downstream parses them.

use rand::RngCore;

/// Entropy per address.
pub const ADDRESS_BYTES: usize = 20;

/// Prefix marking service-issued addresses.
pub const ADDRESS_PREFIX: &str = "wx";

/// Generate a fresh wallet address: prefix + hex of random bytes.
pub fn generate_address() -> String {
    let mut bytes = [0u8; ADDRESS_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    format!("{}{}", ADDRESS_PREFIX, hex::encode(bytes))
}
