//! Wallet Backend Module
//!
//! Wallet provisioning for registered users. One wallet per user,
//! created as the final step of registration and readable by its owner.
//!
//! Clean Architecture structure:
//! - `domain/` - Wallet entity, address generation, repository trait
//! - `application/` - Use cases (provision, fetch own wallet)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers
//!
//! Provisioning is idempotent: asking for a wallet a user already has
//! returns the existing one, so a retried registration cannot mint a
//! second wallet.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::generate_wallet::GenerateWalletUseCase;
pub use application::get_wallet::GetWalletUseCase;
pub use domain::entities::Wallet;
pub use domain::repository::WalletRepository;
pub use error::{WalletError, WalletResult};
pub use infra::memory::MemoryWalletRepository;
pub use infra::postgres::PgWalletRepository;
pub use presentation::dto::WalletDto;
pub use presentation::handlers::{WalletAppState, WalletOwner};
pub use presentation::router::wallet_router_generic;

#[cfg(test)]
mod tests;
