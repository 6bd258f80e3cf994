//! In-memory implementation of AccountRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::{Account, RoleAssignment};
use crate::errors::DomainError;

use super::r#trait::AccountRepository;

/// In-memory account repository
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<Vec<Account>>>,
    roles: Arc<RwLock<HashMap<i64, Vec<RoleAssignment>>>>,
}

impl InMemoryAccountRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `accounts`
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
            roles: Arc::default(),
        }
    }

    pub async fn add_account(&self, account: Account) {
        self.accounts.write().await.push(account);
    }

    pub async fn add_role(&self, user_id: i64, assignment: RoleAssignment) {
        self.roles
            .write()
            .await
            .entry(user_id)
            .or_default()
            .push(assignment);
    }

    /// Snapshot of an account regardless of eligibility
    pub async fn account(&self, user_id: i64) -> Option<Account> {
        self.accounts
            .read()
            .await
            .iter()
            .find(|account| account.user_id == user_id)
            .cloned()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_object_id(
        &self,
        tenant_id: &str,
        object_id: &str,
    ) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|account| {
                account.is_eligible()
                    && account.tenant_id == tenant_id
                    && account.object_id.as_deref() == Some(object_id)
            })
            .cloned())
    }

    async fn find_by_username(
        &self,
        tenant_id: &str,
        username: &str,
    ) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|account| {
                account.is_eligible()
                    && account.tenant_id == tenant_id
                    && account.username.to_lowercase() == username
            })
            .cloned())
    }

    async fn link_object_id(&self, user_id: i64, object_id: &str) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        match accounts.iter_mut().find(|account| account.user_id == user_id) {
            Some(account) if !account.has_object_id() => {
                account.object_id = Some(object_id.to_string());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn find_role_assignments(&self, user_id: i64) -> Result<Vec<RoleAssignment>, DomainError> {
        let roles = self.roles.read().await;
        Ok(roles.get(&user_id).cloned().unwrap_or_default())
    }
}
