//! HTTP Handlers
//!
//! The wallet routes sit behind bearer authentication. This crate does
//! not do token work itself: the authenticating middleware (wired in
//! the api binary) resolves the caller and inserts a [`WalletOwner`]
//! extension, which is all the handlers consume.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, State};
use uuid::Uuid;

use crate::application::get_wallet::GetWalletUseCase;
use crate::domain::repository::WalletRepository;
use crate::error::WalletResult;
use crate::presentation::dto::WalletDto;

/// Shared state for wallet handlers
pub struct WalletAppState<R>
where
    R: WalletRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for WalletAppState<R>
where
    R: WalletRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// Authenticated caller identity, inserted by the auth middleware.
#[derive(Debug, Clone, Copy)]
pub struct WalletOwner {
    pub user_id: Uuid,
}

/// GET /api/wallet
pub async fn get_own_wallet<R>(
    State(state): State<WalletAppState<R>>,
    Extension(owner): Extension<WalletOwner>,
) -> WalletResult<Json<WalletDto>>
where
    R: WalletRepository + Send + Sync + 'static,
{
    let use_case = GetWalletUseCase::new(state.repo.clone());
    let wallet = use_case.execute(owner.user_id).await?;

    Ok(Json(WalletDto::from(wallet)))
}
