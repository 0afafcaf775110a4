//! Password Hashing and Verification
//!
//! bcrypt-based credential handling:
//! - Salted, slow one-way hashing with a fixed work factor
//! - Constant-time verification (bcrypt compares internally)
//! - Zeroization of plaintext material on drop
//!
//! The work factor must stay constant across a deployment: hashes
//! record the cost they were created with, so verification of old
//! hashes keeps working, but mixing costs silently weakens new ones.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Reference work factor. Tunable via configuration, but fixed per
/// deployment.
pub const DEFAULT_COST: u32 = 10;

/// Lowest cost bcrypt accepts (the crate keeps its floor private).
/// Only suitable for tests.
pub const MIN_COST: u32 = 4;

/// Hashing/verification infrastructure errors.
///
/// A verification mismatch is *not* an error; it is `Ok(false)` from
/// [`PasswordHash::verify`].
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// The hashing primitive itself failed.
    #[error("password hashing failed: {0}")]
    HashingFailed(String),

    /// A stored hash is not a valid bcrypt string.
    #[error("invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Plaintext (zeroized on drop)
// ============================================================================

/// Plaintext password with automatic memory zeroization.
///
/// Does not implement `Clone`, and its `Debug` output is redacted, so
/// the raw credential cannot leak through logs or accidental copies.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Plaintext(String);

impl Plaintext {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// True when the password is absent in the presence-check sense.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Plaintext {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for Plaintext {
    fn from(raw: &str) -> Self {
        Self::new(raw.to_owned())
    }
}

impl fmt::Debug for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Plaintext").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password hash (safe to store)
// ============================================================================

/// Salted bcrypt hash of a password.
///
/// The encoded string carries the algorithm version, cost, and salt,
/// so it is self-describing and safe to persist as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a hash loaded from storage, rejecting strings that are not
    /// bcrypt-encoded.
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        if !hash.starts_with("$2") {
            return Err(PasswordHashError::InvalidHashFormat);
        }
        Ok(Self(hash))
    }

    /// Encoded form for storage.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify a plaintext against this hash.
    ///
    /// Runs in time independent of where a mismatch occurs. A mismatch
    /// is `Ok(false)`; only infrastructure failures are errors. A hash
    /// that does not parse is a format error; everything else (I/O,
    /// out-of-range cost) is a hashing failure.
    pub fn verify(&self, plaintext: &Plaintext) -> Result<bool, PasswordHashError> {
        bcrypt::verify(plaintext.as_bytes(), &self.0).map_err(|e| match e {
            bcrypt::BcryptError::InvalidHash(_)
            | bcrypt::BcryptError::InvalidPrefix(_)
            | bcrypt::BcryptError::InvalidCost(_)
            | bcrypt::BcryptError::InvalidSaltLen(_)
            | bcrypt::BcryptError::InvalidBase64(_) => PasswordHashError::InvalidHashFormat,
            other => PasswordHashError::HashingFailed(other.to_string()),
        })
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PasswordHash").field(&"[HASH]").finish()
    }
}

/// Hash a plaintext password with the given work factor.
///
/// Each call salts independently, so identical passwords produce
/// different hashes. This is CPU-bound on purpose; callers on an async
/// runtime should offload it to a blocking pool.
pub fn hash(plaintext: &Plaintext, cost: u32) -> Result<PasswordHash, PasswordHashError> {
    let encoded = bcrypt::hash(plaintext.as_bytes(), cost)
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
    Ok(PasswordHash(encoded))
}
