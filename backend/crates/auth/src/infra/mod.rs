//! Infrastructure Layer
//!
//! Database implementations and cryptographic adapters.

pub mod hasher;
pub mod memory;
pub mod postgres;

pub use hasher::BcryptHasher;
pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;
