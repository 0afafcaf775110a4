//! Auth (Account Credential) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, collaborator traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and hashing implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User registration with bcrypt-hashed passwords
//! - Wallet provisioning hand-off on successful registration
//! - Login with stateless 24-hour bearer tokens (JWT)
//!
//! ## Security Model
//! - Passwords stored only as salted bcrypt hashes (cost 10)
//! - Login failures are indistinguishable: unknown email, lookup
//!   failure, and wrong password all surface the same message
//! - Plaintext passwords zeroized after use, never logged

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::repository::{CredentialHasher, UserStore, WalletProvisioner};
pub use error::{AuthError, AuthResult};
pub use infra::hasher::BcryptHasher;
pub use infra::postgres::PgUserStore;
pub use presentation::router::auth_router_generic;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::memory::MemoryUserStore;
    pub use crate::infra::postgres::PgUserStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
