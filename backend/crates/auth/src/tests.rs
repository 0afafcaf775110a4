//! Unit tests for the register and login use cases, driven through
//! in-memory collaborators with call counting.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::application::catalog::MessageCatalog;
use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::{CredentialHasher, UserStore, WalletProvisioner};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};
use crate::infra::hasher::BcryptHasher;
use crate::infra::memory::MemoryUserStore;
use platform::password::{self, PasswordHash, Plaintext};

// ============================================================================
// Test doubles
// ============================================================================

/// Hasher that counts invocations, so tests can assert that no hashing
/// happens once validation has failed.
struct CountingHasher {
    inner: BcryptHasher,
    hash_calls: AtomicUsize,
    verify_calls: AtomicUsize,
}

impl CountingHasher {
    fn new() -> Self {
        Self {
            inner: BcryptHasher::new(password::MIN_COST),
            hash_calls: AtomicUsize::new(0),
            verify_calls: AtomicUsize::new(0),
        }
    }

    fn hash_count(&self) -> usize {
        self.hash_calls.load(Ordering::SeqCst)
    }

    fn verify_count(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }
}

impl CredentialHasher for CountingHasher {
    async fn hash(&self, plaintext: Plaintext) -> AuthResult<PasswordHash> {
        self.hash_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.hash(plaintext).await
    }

    async fn verify(&self, plaintext: Plaintext, hash: &PasswordHash) -> AuthResult<bool> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.verify(plaintext, hash).await
    }
}

/// Wallet receipt used by the recording provisioner.
#[derive(Debug, Clone, Serialize)]
struct WalletReceipt {
    user_id: Uuid,
}

/// Wallet provisioner that records calls and can be told to fail.
struct RecordingWallet {
    calls: AtomicUsize,
    fail: bool,
}

impl RecordingWallet {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WalletProvisioner for RecordingWallet {
    type Receipt = WalletReceipt;

    async fn generate_wallet(&self, user_id: &UserId) -> AuthResult<WalletReceipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AuthError::Provisioning(
                "wallet service unavailable".to_string(),
            ));
        }
        Ok(WalletReceipt {
            user_id: user_id.into_uuid(),
        })
    }
}

/// Store whose every operation fails, for the lookup-failure fold.
struct FailingStore;

impl UserStore for FailingStore {
    async fn find_by_email(&self, _email: &Email) -> AuthResult<Option<User>> {
        Err(AuthError::Internal("store down".to_string()))
    }

    async fn create(&self, _new_user: NewUser) -> AuthResult<User> {
        Err(AuthError::Internal("store down".to_string()))
    }
}

// ============================================================================
// Harness
// ============================================================================

struct Harness {
    store: Arc<MemoryUserStore>,
    wallet: Arc<RecordingWallet>,
    hasher: Arc<CountingHasher>,
    config: Arc<AuthConfig>,
    catalog: Arc<MessageCatalog>,
}

impl Harness {
    fn new() -> Self {
        Self::with_wallet(RecordingWallet::new())
    }

    fn with_wallet(wallet: RecordingWallet) -> Self {
        Self {
            store: Arc::new(MemoryUserStore::new()),
            wallet: Arc::new(wallet),
            hasher: Arc::new(CountingHasher::new()),
            config: Arc::new(AuthConfig::development()),
            catalog: Arc::new(MessageCatalog::default()),
        }
    }

    fn register(&self) -> RegisterUseCase<MemoryUserStore, RecordingWallet, CountingHasher> {
        RegisterUseCase::new(
            self.store.clone(),
            self.wallet.clone(),
            self.hasher.clone(),
            self.catalog.clone(),
        )
    }

    fn login(&self) -> LoginUseCase<MemoryUserStore, CountingHasher> {
        LoginUseCase::new(
            self.store.clone(),
            self.hasher.clone(),
            self.config.clone(),
            self.catalog.clone(),
        )
    }
}

fn ana() -> RegisterInput {
    RegisterInput {
        name: "Ana".to_string(),
        email: "a@x.com".to_string(),
        password: "secret1".to_string(),
    }
}

fn login_input(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_string(),
        password: password.to_string(),
    }
}

// ============================================================================
// Register
// ============================================================================

mod register {
    use super::*;

    #[tokio::test]
    async fn missing_fields_cause_field_errors_and_no_side_effects() {
        let cases = [
            (
                RegisterInput {
                    name: String::new(),
                    ..ana()
                },
                "Name is required",
            ),
            (
                RegisterInput {
                    email: String::new(),
                    ..ana()
                },
                "Email is required",
            ),
            (
                RegisterInput {
                    password: String::new(),
                    ..ana()
                },
                "Password is required",
            ),
        ];

        for (input, expected) in cases {
            let harness = Harness::new();
            let err = harness.register().execute(input).await.unwrap_err();

            match err {
                AuthError::Validation(msg) => assert_eq!(msg, expected),
                other => panic!("expected validation error, got {other:?}"),
            }
            assert_eq!(harness.hasher.hash_count(), 0, "hashing must not run");
            assert!(harness.store.is_empty(), "no record must be persisted");
            assert_eq!(harness.wallet.call_count(), 0, "no wallet call must run");
        }
    }

    #[tokio::test]
    async fn empty_name_fails_before_any_hashing() {
        let harness = Harness::new();
        let input = RegisterInput {
            name: String::new(),
            ..ana()
        };

        let err = harness.register().execute(input).await.unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(harness.hasher.hash_count(), 0);
    }

    #[tokio::test]
    async fn persisted_password_is_a_verifiable_hash_not_plaintext() {
        let harness = Harness::new();
        harness.register().execute(ana()).await.unwrap();

        let stored = harness
            .store
            .find_by_email(&Email::new("a@x.com").unwrap())
            .await
            .unwrap()
            .unwrap();

        assert_ne!(stored.password_hash.as_str(), "secret1");
        assert!(
            stored
                .password_hash
                .verify(&Plaintext::from("secret1"))
                .unwrap()
        );
    }

    #[tokio::test]
    async fn success_returns_the_wallet_receipt_for_the_new_user() {
        let harness = Harness::new();
        let receipt = harness.register().execute(ana()).await.unwrap();

        let stored = harness
            .store
            .find_by_email(&Email::new("a@x.com").unwrap())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(receipt.user_id, stored.id.into_uuid());
        assert_eq!(harness.wallet.call_count(), 1);
    }

    #[tokio::test]
    async fn wallet_is_not_called_when_persistence_fails() {
        let harness = Harness::new();
        harness.register().execute(ana()).await.unwrap();
        assert_eq!(harness.wallet.call_count(), 1);

        // Same email again: the store rejects, the wallet stays quiet.
        let err = harness.register().execute(ana()).await.unwrap_err();

        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(harness.wallet.call_count(), 1);
    }

    #[tokio::test]
    async fn provisioning_failure_surfaces_and_leaves_the_user_record() {
        let harness = Harness::with_wallet(RecordingWallet::failing());

        let err = harness.register().execute(ana()).await.unwrap_err();

        assert!(matches!(err, AuthError::Provisioning(_)));
        // The orphaned record stays; there is no compensating rollback.
        assert_eq!(harness.store.len(), 1);
    }
}

// ============================================================================
// Login
// ============================================================================

mod login {
    use super::*;

    #[tokio::test]
    async fn missing_fields_are_validation_errors() {
        let harness = Harness::new();

        let err = harness
            .login()
            .execute(login_input("", "secret1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));

        let err = harness
            .login()
            .execute(login_input("a@x.com", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));

        assert_eq!(harness.hasher.verify_count(), 0);
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let harness = Harness::new();
        harness.register().execute(ana()).await.unwrap();

        let unknown = harness
            .login()
            .execute(login_input("nobody@x.com", "secret1"))
            .await
            .unwrap_err();
        let wrong = harness
            .login()
            .execute(login_input("a@x.com", "wrong"))
            .await
            .unwrap_err();

        let (AuthError::InvalidCredentials(a), AuthError::InvalidCredentials(b)) =
            (unknown, wrong)
        else {
            panic!("expected invalid-credentials errors");
        };
        assert_eq!(a, b, "messages must be indistinguishable");
    }

    #[tokio::test]
    async fn lookup_failure_folds_into_the_same_invalid_credentials() {
        let catalog = Arc::new(MessageCatalog::default());
        let use_case = LoginUseCase::new(
            Arc::new(FailingStore),
            Arc::new(CountingHasher::new()),
            Arc::new(AuthConfig::development()),
            catalog.clone(),
        );

        let err = use_case
            .execute(login_input("a@x.com", "secret1"))
            .await
            .unwrap_err();

        match err {
            AuthError::InvalidCredentials(msg) => {
                assert_eq!(msg, catalog.user.invalid_credentials);
            }
            other => panic!("expected invalid credentials, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn token_binds_the_subject_and_expires_in_24_hours() {
        let harness = Harness::new();
        harness.register().execute(ana()).await.unwrap();

        let output = harness
            .login()
            .execute(login_input("a@x.com", "secret1"))
            .await
            .unwrap();

        let claims = harness.config.signer().decode(&output.token).unwrap();
        assert_eq!(claims.sub, output.user.id.to_string());

        let expected_exp = (Utc::now() + Duration::hours(24)).timestamp();
        assert!(
            (claims.exp - expected_exp).abs() <= 1,
            "expiry must be ~24h from issuance"
        );
    }

    #[tokio::test]
    async fn register_then_login_round_trip() {
        let harness = Harness::new();
        let receipt = harness.register().execute(ana()).await.unwrap();

        let output = harness
            .login()
            .execute(login_input("a@x.com", "secret1"))
            .await
            .unwrap();

        let claims = harness.config.signer().decode(&output.token).unwrap();
        assert_eq!(claims.sub, receipt.user_id.to_string());
    }

    #[tokio::test]
    async fn ana_scenario() {
        let harness = Harness::new();

        harness.register().execute(ana()).await.unwrap();

        let err = harness
            .login()
            .execute(login_input("a@x.com", "wrong"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials(_)));

        let output = harness
            .login()
            .execute(login_input("a@x.com", "secret1"))
            .await
            .unwrap();
        assert!(!output.token.is_empty());
        assert_eq!(output.user.name, "Ana");
        assert_eq!(output.user.email, "a@x.com");
        // PublicUser structurally lacks a credential field; nothing to
        // strip, nothing to leak.
    }
}
