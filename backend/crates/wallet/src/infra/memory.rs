//! In-Memory Wallet Repository
//!
//! [`WalletRepository`] implementation over a `RwLock<HashMap>`, keyed
//! by user id. Used by tests and for running without a database. One
//! wallet per user is arbitrated under the write lock, matching the
//! PostgreSQL unique index.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::domain::entities::Wallet;
use crate::domain::repository::WalletRepository;
use crate::error::{WalletError, WalletResult};

/// In-memory wallet repository, keyed by the owning user id.
#[derive(Clone, Default)]
pub struct MemoryWalletRepository {
    inner: Arc<RwLock<HashMap<Uuid, Wallet>>>,
}

impl MemoryWalletRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored wallets.
    pub fn len(&self) -> usize {
        self.inner.read().expect("wallet lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WalletRepository for MemoryWalletRepository {
    async fn create(&self, wallet: &Wallet) -> WalletResult<()> {
        let mut map = self.inner.write().expect("wallet lock poisoned");

        if map.contains_key(&wallet.user_id) {
            return Err(WalletError::AlreadyProvisioned);
        }

        map.insert(wallet.user_id, wallet.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> WalletResult<Option<Wallet>> {
        let map = self.inner.read().expect("wallet lock poisoned");
        Ok(map.get(&user_id).cloned())
    }
}
