//! Generate Wallet Use Case
//!
//! Provisions a wallet for a user. Idempotent: a user who already has
//! a wallet gets the existing one back, so a caller retrying a
//! partially failed registration cannot end up with two wallets.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Wallet;
use crate::domain::repository::WalletRepository;
use crate::error::{WalletError, WalletResult};

/// Generate wallet use case
pub struct GenerateWalletUseCase<R>
where
    R: WalletRepository,
{
    repo: Arc<R>,
}

impl<R> GenerateWalletUseCase<R>
where
    R: WalletRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: Uuid) -> WalletResult<Wallet> {
        if let Some(existing) = self.repo.find_by_user_id(user_id).await? {
            tracing::debug!(user_id = %user_id, "Wallet already provisioned, returning it");
            return Ok(existing);
        }

        let wallet = Wallet::provision(user_id);

        match self.repo.create(&wallet).await {
            Ok(()) => {
                tracing::info!(
                    user_id = %user_id,
                    wallet_id = %wallet.id,
                    "Wallet provisioned"
                );
                Ok(wallet)
            }
            // A concurrent provision won the insert race; theirs is the
            // wallet of record.
            Err(WalletError::AlreadyProvisioned) => self
                .repo
                .find_by_user_id(user_id)
                .await?
                .ok_or_else(|| WalletError::Internal("wallet vanished after conflict".into())),
            Err(err) => Err(err),
        }
    }
}
