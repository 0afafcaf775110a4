//! Domain Entities

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::services::generate_address;
use crate::domain::value_objects::WalletId;

/// Wallet entity - one per user, created at registration time.
///
/// The owning user is referenced by its raw identifier: the wallet
/// crate has no dependency on the user model, only on the id handed
/// over at provisioning time.
#[derive(Debug, Clone)]
pub struct Wallet {
    pub id: WalletId,
    pub user_id: Uuid,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Wallet {
    /// Create a fresh wallet for a user, with a newly generated address.
    pub fn provision(user_id: Uuid) -> Self {
        Self {
            id: WalletId::new(),
            user_id,
            address: generate_address(),
            created_at: Utc::now(),
        }
    }
}
