//! Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::Wallet;

/// Wallet as it appears on the wire. Also the payload a successful
/// registration responds with.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl From<Wallet> for WalletDto {
    fn from(wallet: Wallet) -> Self {
        Self {
            id: wallet.id.into_uuid(),
            user_id: wallet.user_id,
            address: wallet.address,
            created_at: wallet.created_at,
        }
    }
}
