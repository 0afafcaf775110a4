//! PostgreSQL Wallet Repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Wallet;
use crate::domain::repository::WalletRepository;
use crate::domain::value_objects::WalletId;
use crate::error::{WalletError, WalletResult};

/// PostgreSQL-backed wallet repository
#[derive(Clone)]
pub struct PgWalletRepository {
    pool: PgPool,
}

impl PgWalletRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the wallets table if it does not exist yet. The unique
    /// index on user_id enforces one wallet per user.
    pub async fn ensure_schema(&self) -> WalletResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS wallets (
                wallet_id   UUID PRIMARY KEY,
                user_id     UUID NOT NULL UNIQUE,
                address     TEXT NOT NULL,
                created_at  TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl WalletRepository for PgWalletRepository {
    async fn create(&self, wallet: &Wallet) -> WalletResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO wallets (
                wallet_id,
                user_id,
                address,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(wallet.id.as_uuid())
        .bind(wallet.user_id)
        .bind(&wallet.address)
        .bind(wallet.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) => Err(map_unique_violation(err)),
        }
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> WalletResult<Option<Wallet>> {
        let row = sqlx::query_as::<_, WalletRow>(
            r#"
            SELECT
                wallet_id,
                user_id,
                address,
                created_at
            FROM wallets
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(WalletRow::into_wallet))
    }
}

/// Unique violation on the user_id index surfaces as the domain conflict.
fn map_unique_violation(err: sqlx::Error) -> WalletError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return WalletError::AlreadyProvisioned;
        }
    }
    WalletError::Database(err)
}

#[derive(sqlx::FromRow)]
struct WalletRow {
    wallet_id: Uuid,
    user_id: Uuid,
    address: String,
    created_at: DateTime<Utc>,
}

impl WalletRow {
    fn into_wallet(self) -> Wallet {
        Wallet {
            id: WalletId::from_uuid(self.wallet_id),
            user_id: self.user_id,
            address: self.address,
            created_at: self.created_at,
        }
    }
}
