//! Login Use Case
//!
//! Authenticates a login attempt and issues a bearer token.
//!
//! Every failure after validation surfaces as the same
//! invalid-credentials message: unknown email, store failure during
//! lookup, and wrong password are indistinguishable to the caller, so
//! account existence cannot be probed. The store-failure case is
//! logged internally at error level before being folded in.

use std::sync::Arc;

use platform::password::Plaintext;

use crate::application::catalog::MessageCatalog;
use crate::application::config::AuthConfig;
use crate::application::validate::Validator;
use crate::domain::entity::user::PublicUser;
use crate::domain::repository::{CredentialHasher, UserStore};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output: the token plus the user record without its credential.
#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub token: String,
    pub user: PublicUser,
}

/// Login use case
pub struct LoginUseCase<S, H>
where
    S: UserStore,
    H: CredentialHasher,
{
    store: Arc<S>,
    hasher: Arc<H>,
    config: Arc<AuthConfig>,
    validator: Validator,
}

impl<S, H> LoginUseCase<S, H>
where
    S: UserStore,
    H: CredentialHasher,
{
    pub fn new(
        store: Arc<S>,
        hasher: Arc<H>,
        config: Arc<AuthConfig>,
        catalog: Arc<MessageCatalog>,
    ) -> Self {
        Self {
            store,
            hasher,
            config,
            validator: Validator::new(catalog),
        }
    }

    fn invalid_credentials(&self) -> AuthError {
        AuthError::InvalidCredentials(self.validator.catalog().user.invalid_credentials.clone())
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Validate: email and password presence.
        self.validator.login(Some(&input))?;

        let LoginInput { email, password } = input;

        // Look up by email. Not-found and lookup failure fold into the
        // same caller-facing error; only the log tells them apart.
        let email = Email::new(email).map_err(|e| AuthError::Internal(e.to_string()))?;
        let user = match self.store.find_by_email(&email).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(self.invalid_credentials()),
            Err(err) => {
                tracing::error!(error = %err, "User lookup failed during login");
                return Err(self.invalid_credentials());
            }
        };

        // Verify. A mismatch is a normal negative result; only a
        // hashing infrastructure failure propagates as an error.
        let matches = self
            .hasher
            .verify(Plaintext::new(password), &user.password_hash)
            .await?;

        if !matches {
            return Err(self.invalid_credentials());
        }

        // Project the record before it goes anywhere: the hash stays
        // behind.
        let user = user.to_public();

        // Issue the token for the user's identifier.
        let token = self.config.signer().issue(&user.id.to_string())?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutput { token, user })
    }
}
