//! bcrypt Credential Hasher
//!
//! [`CredentialHasher`] implementation over `platform::password`.
//! bcrypt is CPU-bound on purpose, so both operations run on the
//! blocking pool: a slow hash must not stall unrelated requests on
//! the async executor.

use platform::password::{self, PasswordHash, Plaintext};

use crate::domain::repository::CredentialHasher;
use crate::error::{AuthError, AuthResult};

/// Hasher with a fixed work factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn with_default_cost() -> Self {
        Self::new(password::DEFAULT_COST)
    }
}

impl CredentialHasher for BcryptHasher {
    async fn hash(&self, plaintext: Plaintext) -> AuthResult<PasswordHash> {
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || password::hash(&plaintext, cost))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))??;
        Ok(hashed)
    }

    async fn verify(&self, plaintext: Plaintext, hash: &PasswordHash) -> AuthResult<bool> {
        let hash = hash.clone();
        let matches = tokio::task::spawn_blocking(move || hash.verify(&plaintext))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))??;
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify() {
        let hasher = BcryptHasher::new(password::MIN_COST);
        let hashed = hasher.hash(Plaintext::from("secret1")).await.unwrap();

        assert!(
            hasher
                .verify(Plaintext::from("secret1"), &hashed)
                .await
                .unwrap()
        );
        assert!(
            !hasher
                .verify(Plaintext::from("wrong"), &hashed)
                .await
                .unwrap()
        );
    }
}
