//! Application Configuration
//!
//! Configuration for the auth application layer. Secrets are loaded by
//! the binary and passed in; nothing here reads the environment.

use chrono::Duration;
use platform::password;
use platform::token::{TOKEN_TTL, TokenSigner};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Process-wide token signing secret
    pub token_secret: Vec<u8>,
    /// Token lifetime (24 hours)
    pub token_ttl: Duration,
    /// bcrypt work factor. Must stay constant across a deployment so
    /// previously issued hashes keep verifying.
    pub hash_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; 32],
            token_ttl: TOKEN_TTL,
            hash_cost: password::DEFAULT_COST,
        }
    }
}

impl AuthConfig {
    /// Config with a random signing secret (for development).
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Development config: random secret, minimum hash cost.
    pub fn development() -> Self {
        Self {
            hash_cost: password::MIN_COST,
            ..Self::with_random_secret()
        }
    }

    /// Build the token signer for this configuration.
    pub fn signer(&self) -> TokenSigner {
        TokenSigner::new(&self.token_secret, self.token_ttl)
    }
}
