//! Unit tests for the wallet use cases over the in-memory repository.

use std::sync::Arc;

use uuid::Uuid;

use crate::application::generate_wallet::GenerateWalletUseCase;
use crate::application::get_wallet::GetWalletUseCase;
use crate::error::WalletError;
use crate::infra::memory::MemoryWalletRepository;

#[tokio::test]
async fn generate_creates_a_wallet_for_the_user() {
    let repo = Arc::new(MemoryWalletRepository::new());
    let use_case = GenerateWalletUseCase::new(repo.clone());
    let user_id = Uuid::new_v4();

    let wallet = use_case.execute(user_id).await.unwrap();

    assert_eq!(wallet.user_id, user_id);
    assert!(!wallet.address.is_empty());
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn generate_is_idempotent_per_user() {
    let repo = Arc::new(MemoryWalletRepository::new());
    let use_case = GenerateWalletUseCase::new(repo.clone());
    let user_id = Uuid::new_v4();

    let first = use_case.execute(user_id).await.unwrap();
    let second = use_case.execute(user_id).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.address, second.address);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn different_users_get_different_wallets() {
    let repo = Arc::new(MemoryWalletRepository::new());
    let use_case = GenerateWalletUseCase::new(repo.clone());

    let a = use_case.execute(Uuid::new_v4()).await.unwrap();
    let b = use_case.execute(Uuid::new_v4()).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_ne!(a.address, b.address);
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn get_returns_not_found_without_a_wallet() {
    let repo = Arc::new(MemoryWalletRepository::new());
    let use_case = GetWalletUseCase::new(repo);

    let err = use_case.execute(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, WalletError::NotFound));
}

#[tokio::test]
async fn get_returns_the_provisioned_wallet() {
    let repo = Arc::new(MemoryWalletRepository::new());
    let user_id = Uuid::new_v4();

    let provisioned = GenerateWalletUseCase::new(repo.clone())
        .execute(user_id)
        .await
        .unwrap();
    let fetched = GetWalletUseCase::new(repo).execute(user_id).await.unwrap();

    assert_eq!(fetched.id, provisioned.id);
    assert_eq!(fetched.address, provisioned.address);
}
