//! Wallet Router

use axum::{Router, routing::get};

use crate::domain::repository::WalletRepository;
use crate::presentation::handlers::{self, WalletAppState};

/// Create the wallet router over any repository implementation.
///
/// The caller is expected to layer bearer authentication on top; the
/// handlers require a [`WalletOwner`] extension.
///
/// [`WalletOwner`]: crate::presentation::handlers::WalletOwner
pub fn wallet_router_generic<R>(state: WalletAppState<R>) -> Router
where
    R: WalletRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::get_own_wallet::<R>))
        .with_state(state)
}
