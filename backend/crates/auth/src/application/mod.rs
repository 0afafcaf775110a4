//! Application Layer
//!
//! Use cases and application services.

pub mod catalog;
pub mod config;
pub mod login;
pub mod register;
pub mod validate;

// Re-exports
pub use catalog::MessageCatalog;
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use validate::Validator;
