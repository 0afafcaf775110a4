//! Access Token Signing and Verification
//!
//! Stateless bearer tokens: a signed claims payload binding the subject
//! id and an expiry. Validity is determined entirely by signature and
//! expiry, never by a lookup.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default token lifetime: 24 hours from issuance.
pub const TOKEN_TTL: Duration = Duration::hours(24);

/// Token errors.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed (bad key material).
    #[error("token signing failed: {0}")]
    Signing(String),

    /// The token's expiry has passed.
    #[error("token expired")]
    Expired,

    /// Malformed token or signature mismatch.
    #[error("invalid token")]
    Invalid,
}

/// Signed claims payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the user id the token was issued for.
    pub sub: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiry (Unix timestamp).
    pub exp: i64,
}

/// Issues and verifies HS256-signed bearer tokens with a process-wide
/// secret and a fixed lifetime.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a token for `subject`, expiring `ttl` from now.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as of an explicit instant. Deterministic for a
    /// fixed `issued_at`, which makes expiry assertions possible in
    /// tests with an injected clock.
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_owned(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Decode and validate a token: signature first, then expiry.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
