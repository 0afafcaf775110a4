//! Collaborator Traits
//!
//! Interfaces for the external collaborators this core depends on:
//! the persistent user store, the wallet-provisioning subsystem, and
//! the credential hasher. Implementations live in the infrastructure
//! layer (or, for wallets, in a sibling crate bridged by the binary).

use platform::password::{PasswordHash, Plaintext};

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// Persistent user store.
#[trait_variant::make(UserStore: Send)]
pub trait LocalUserStore {
    /// Find a user by their email lookup key.
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Persist a new user, assigning its identifier. The store owns
    /// email uniqueness: a duplicate surfaces as `AuthError::EmailTaken`.
    async fn create(&self, new_user: NewUser) -> AuthResult<User>;
}

/// Wallet-provisioning subsystem, invoked after a successful
/// registration. The receipt's shape is owned by the collaborator, as
/// is idempotency/retry behavior.
#[trait_variant::make(WalletProvisioner: Send)]
pub trait LocalWalletProvisioner {
    type Receipt: Send;

    async fn generate_wallet(&self, user_id: &UserId) -> AuthResult<Self::Receipt>;
}

/// One-way credential hashing.
///
/// A trait rather than free functions so use cases stay observable:
/// tests assert that no hashing happens once validation has failed.
/// Implementations own the work factor and any executor offloading.
#[trait_variant::make(CredentialHasher: Send)]
pub trait LocalCredentialHasher {
    /// Hash a plaintext password. Failure is infrastructure, fatal to
    /// the request.
    async fn hash(&self, plaintext: Plaintext) -> AuthResult<PasswordHash>;

    /// Verify a plaintext against a stored hash. A mismatch is
    /// `Ok(false)`, not an error.
    async fn verify(&self, plaintext: Plaintext, hash: &PasswordHash) -> AuthResult<bool>;
}
