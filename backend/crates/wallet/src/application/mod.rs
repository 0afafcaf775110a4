//! Application Layer
//!
//! Use cases.

pub mod generate_wallet;
pub mod get_wallet;

// Re-exports
pub use generate_wallet::GenerateWalletUseCase;
pub use get_wallet::GetWalletUseCase;
