//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routing.

pub mod dto;
pub mod handlers;
pub mod router;

pub use dto::WalletDto;
pub use handlers::{WalletAppState, WalletOwner};
pub use router::wallet_router_generic;
