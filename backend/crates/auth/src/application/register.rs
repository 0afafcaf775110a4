//! Register Use Case
//!
//! Creates a new user account and hands off wallet provisioning.
//!
//! The pipeline is strictly sequential: validate, hash, persist,
//! provision. Each step gates the next, and the first failure is the
//! operation's result. Registration only counts as successful once
//! wallet provisioning has also succeeded; the provisioning receipt is
//! the success payload.

use std::sync::Arc;

use platform::password::Plaintext;

use crate::application::catalog::MessageCatalog;
use crate::application::validate::Validator;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::{CredentialHasher, UserStore, WalletProvisioner};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Register input
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<S, W, H>
where
    S: UserStore,
    W: WalletProvisioner,
    H: CredentialHasher,
{
    store: Arc<S>,
    wallet: Arc<W>,
    hasher: Arc<H>,
    validator: Validator,
}

impl<S, W, H> RegisterUseCase<S, W, H>
where
    S: UserStore,
    W: WalletProvisioner,
    H: CredentialHasher,
{
    pub fn new(
        store: Arc<S>,
        wallet: Arc<W>,
        hasher: Arc<H>,
        catalog: Arc<MessageCatalog>,
    ) -> Self {
        Self {
            store,
            wallet,
            hasher,
            validator: Validator::new(catalog),
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<W::Receipt> {
        // Validate: nothing below runs if a field is missing.
        self.validator.registration(Some(&input))?;

        let RegisterInput {
            name,
            email,
            password,
        } = input;

        // Hash: the plaintext stops existing past this point.
        let password_hash = self.hasher.hash(Plaintext::new(password)).await?;

        let new_user = NewUser {
            name: UserName::new(name).map_err(|e| AuthError::Internal(e.to_string()))?,
            email: Email::new(email).map_err(|e| AuthError::Internal(e.to_string()))?,
            password_hash,
        };

        // Persist: the store assigns the id and enforces email
        // uniqueness; its errors propagate verbatim.
        let user = self.store.create(new_user).await?;

        tracing::info!(user_id = %user.id, "User registered");

        // Provision: the wallet result is the operation's result.
        match self.wallet.generate_wallet(&user.id).await {
            Ok(receipt) => Ok(receipt),
            Err(err) => {
                // Known partial-failure state: the user record stays
                // (no compensating rollback), without a wallet.
                tracing::warn!(
                    user_id = %user.id,
                    error = %err,
                    "Wallet provisioning failed after user creation; orphaned user record remains"
                );
                Err(err)
            }
        }
    }
}
