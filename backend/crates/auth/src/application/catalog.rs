//! Error Message Catalog
//!
//! User-facing error messages keyed by (entity, field, condition).
//! The catalog is an immutable configuration value injected into the
//! service at construction — never global, never mutated. It can be
//! loaded from a JSON document with the same shape, or fall back to
//! the built-in English defaults.

use serde::Deserialize;

/// Static error-message catalog, read-only to this service.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageCatalog {
    pub user: UserMessages,
}

/// Messages for the `user` entity.
#[derive(Debug, Clone, Deserialize)]
pub struct UserMessages {
    pub required: RequiredMessages,
    /// Unified message for every login failure: unknown email, lookup
    /// failure, wrong password.
    pub invalid_credentials: String,
}

/// Required-field conditions, one message per field.
#[derive(Debug, Clone, Deserialize)]
pub struct RequiredMessages {
    /// The input payload itself was absent.
    pub payload: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            user: UserMessages {
                required: RequiredMessages {
                    payload: "User details are required".to_string(),
                    name: "Name is required".to_string(),
                    email: "Email is required".to_string(),
                    password: "Password is required".to_string(),
                },
                invalid_credentials: "Invalid email or password".to_string(),
            },
        }
    }
}

impl MessageCatalog {
    /// Load a catalog from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
