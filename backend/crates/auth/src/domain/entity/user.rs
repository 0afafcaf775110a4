//! User Entity
//!
//! The credential-bearing user record, in its three shapes:
//! pre-persistence ([`NewUser`]), persisted ([`User`]), and the
//! public projection that structurally excludes the credential
//! ([`PublicUser`]).

use chrono::{DateTime, Utc};
use platform::password::PasswordHash;

use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};

/// Persisted user record.
///
/// Invariant: the password field holds a hash, never plaintext — the
/// type makes anything else unrepresentable. The id is assigned by the
/// store on creation. Deliberately not `Serialize`: anything that
/// leaves the service goes through [`PublicUser`].
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier, opaque and unique
    pub id: UserId,
    /// Display name
    pub name: UserName,
    /// Unique lookup key
    pub email: Email,
    /// Salted bcrypt hash of the password
    pub password_hash: PasswordHash,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Project to the public-facing shape, dropping the credential.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.as_str().to_owned(),
            email: self.email.as_str().to_owned(),
            created_at: self.created_at,
        }
    }
}

/// A user record before the store has assigned an identifier.
///
/// Built by registration after validation succeeds; the plaintext
/// password has already been replaced by its hash at this point.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
    pub password_hash: PasswordHash,
}

/// Public projection of a user: no credential field exists here, so
/// nothing needs to be stripped or deleted downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::{MIN_COST, Plaintext, hash};

    #[test]
    fn public_projection_has_no_credential() {
        let password_hash = hash(&Plaintext::from("secret1"), MIN_COST).unwrap();
        let user = User {
            id: UserId::new(),
            name: UserName::new("Ana").unwrap(),
            email: Email::new("a@x.com").unwrap(),
            password_hash: password_hash.clone(),
            created_at: Utc::now(),
        };

        let public = user.to_public();
        assert_eq!(public.name, "Ana");
        assert_eq!(public.email, "a@x.com");
        // The hash never appears in the projection's debug output.
        assert!(!format!("{:?}", public).contains(password_hash.as_str()));
    }
}
