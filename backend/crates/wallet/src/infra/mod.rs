//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::MemoryWalletRepository;
pub use postgres::PgWalletRepository;
