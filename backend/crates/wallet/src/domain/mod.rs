//! Domain Layer
//!
//! Wallet entity, address generation, and the repository trait.

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

// Re-exports
pub use entities::Wallet;
pub use repository::WalletRepository;
pub use value_objects::WalletId;
