//! Get Wallet Use Case
//!
//! Fetches a user's own wallet.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Wallet;
use crate::domain::repository::WalletRepository;
use crate::error::{WalletError, WalletResult};

/// Get wallet use case
pub struct GetWalletUseCase<R>
where
    R: WalletRepository,
{
    repo: Arc<R>,
}

impl<R> GetWalletUseCase<R>
where
    R: WalletRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: Uuid) -> WalletResult<Wallet> {
        self.repo
            .find_by_user_id(user_id)
            .await?
            .ok_or(WalletError::NotFound)
    }
}
