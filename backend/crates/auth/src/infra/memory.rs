//! In-Memory User Store
//!
//! [`UserStore`] implementation over a `RwLock<HashMap>`. Used by the
//! test suites and for running the service without a database. Keeps
//! the same uniqueness semantics as the PostgreSQL store: a duplicate
//! email on create is a conflict, arbitrated under the write lock.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserStore;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// In-memory user store, keyed by email.
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    inner: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.inner.read().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let map = self.inner.read().expect("store lock poisoned");
        Ok(map.get(email.as_str()).cloned())
    }

    async fn create(&self, new_user: NewUser) -> AuthResult<User> {
        let mut map = self.inner.write().expect("store lock poisoned");

        if map.contains_key(new_user.email.as_str()) {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: UserId::new(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };

        map.insert(user.email.as_str().to_owned(), user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_name::UserName;
    use platform::password::{MIN_COST, Plaintext, hash};

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: UserName::new("Ana").unwrap(),
            email: Email::new(email).unwrap(),
            password_hash: hash(&Plaintext::from("secret1"), MIN_COST).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_an_id_and_find_returns_it() {
        let store = MemoryUserStore::new();
        let created = store.create(new_user("a@x.com")).await.unwrap();

        let found = store
            .find_by_email(&Email::new("a@x.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = MemoryUserStore::new();
        store.create(new_user("a@x.com")).await.unwrap();

        let err = store.create(new_user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn unknown_email_is_none() {
        let store = MemoryUserStore::new();
        let found = store
            .find_by_email(&Email::new("nobody@x.com").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
