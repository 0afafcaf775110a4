//! Auth Router

use axum::{Router, routing::post};
use serde::Serialize;

use crate::domain::repository::{CredentialHasher, UserStore, WalletProvisioner};
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router for any store/provisioner/hasher combination.
pub fn auth_router_generic<S, W, H>(state: AuthAppState<S, W, H>) -> Router
where
    S: UserStore + Send + Sync + 'static,
    W: WalletProvisioner + Send + Sync + 'static,
    W::Receipt: Serialize,
    H: CredentialHasher + Send + Sync + 'static,
{
    Router::new()
        .route("/register", post(handlers::register::<S, W, H>))
        .route("/login", post(handlers::login::<S, W, H>))
        .with_state(state)
}
