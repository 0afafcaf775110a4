//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use std::sync::Arc;

use crate::application::catalog::MessageCatalog;
use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::{CredentialHasher, UserStore, WalletProvisioner};
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest};

/// Shared state for auth handlers
pub struct AuthAppState<S, W, H>
where
    S: UserStore,
    W: WalletProvisioner,
    H: CredentialHasher,
{
    pub store: Arc<S>,
    pub wallet: Arc<W>,
    pub hasher: Arc<H>,
    pub config: Arc<AuthConfig>,
    pub catalog: Arc<MessageCatalog>,
}

// Manual impl: every field is an Arc, no bounds needed.
impl<S, W, H> Clone for AuthAppState<S, W, H>
where
    S: UserStore,
    W: WalletProvisioner,
    H: CredentialHasher,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            wallet: self.wallet.clone(),
            hasher: self.hasher.clone(),
            config: self.config.clone(),
            catalog: self.catalog.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
///
/// The success payload is whatever the wallet provisioner returned.
pub async fn register<S, W, H>(
    State(state): State<AuthAppState<S, W, H>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<Json<W::Receipt>>
where
    S: UserStore + Send + Sync + 'static,
    W: WalletProvisioner + Send + Sync + 'static,
    W::Receipt: Serialize,
    H: CredentialHasher + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.store.clone(),
        state.wallet.clone(),
        state.hasher.clone(),
        state.catalog.clone(),
    );

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let receipt = use_case.execute(input).await?;

    Ok(Json(receipt))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<S, W, H>(
    State(state): State<AuthAppState<S, W, H>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    S: UserStore + Send + Sync + 'static,
    W: WalletProvisioner + Send + Sync + 'static,
    H: CredentialHasher + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.store.clone(),
        state.hasher.clone(),
        state.config.clone(),
        state.catalog.clone(),
    );

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
        user: output.user.into(),
    }))
}
