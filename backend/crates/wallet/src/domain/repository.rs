//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer.

use uuid::Uuid;

use crate::domain::entities::Wallet;
use crate::error::WalletResult;

/// Wallet repository trait
#[trait_variant::make(WalletRepository: Send)]
pub trait LocalWalletRepository {
    /// Persist a new wallet. A second wallet for the same user is
    /// rejected as [`WalletError::AlreadyProvisioned`].
    ///
    /// [`WalletError::AlreadyProvisioned`]: crate::error::WalletError::AlreadyProvisioned
    async fn create(&self, wallet: &Wallet) -> WalletResult<()>;

    /// Get the user's wallet, if one has been provisioned.
    async fn find_by_user_id(&self, user_id: Uuid) -> WalletResult<Option<Wallet>>;
}
