//! Integration tests for the MySQL account repository
//!
//! These tests require a MySQL instance with the account schema loaded.
//! Run with: cargo test -p hub_infra --test account_repository_integration -- --ignored

#![cfg(feature = "mysql")]

use hub_core::repositories::AccountRepository;
use hub_infra::database::{DatabasePool, MySqlAccountRepository};
use hub_shared::config::DatabaseConfig;

async fn repository() -> MySqlAccountRepository {
    let pool = DatabasePool::new(&DatabaseConfig::from_env()).await.unwrap();
    MySqlAccountRepository::new(pool.get_pool().clone())
}

#[tokio::test]
#[ignore] // Requires MySQL server
async fn test_unknown_identity_is_absent() {
    let repo = repository().await;

    let found = repo
        .find_by_object_id("00000000-0000-0000-0000-000000000000", "no-such-object")
        .await
        .unwrap();
    assert!(found.is_none());

    let found = repo
        .find_by_username("00000000-0000-0000-0000-000000000000", "nobody@example.invalid")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
#[ignore] // Requires MySQL server
async fn test_link_unknown_user_changes_nothing() {
    let repo = repository().await;

    assert!(!repo.link_object_id(-1, "object").await.unwrap());
    assert!(repo.find_role_assignments(-1).await.unwrap().is_empty());
}
