//! Account repository trait: the data-access boundary of the sign-in flow.

use async_trait::async_trait;

use crate::domain::entities::account::{Account, RoleAssignment};
use crate::errors::DomainError;

/// Read access to accounts and role assignments, plus the single write the
/// sign-in flow performs (linking an Entra object id).
///
/// Lookups only return eligible accounts: account active and company active.
/// Implementations report an unreachable backend as
/// `DomainError::ServiceUnavailable`.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find the account linked to `(tenant_id, object_id)`
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Eligible account found
    /// * `Ok(None)` - No eligible account carries this linkage
    /// * `Err(DomainError)` - Backend failure
    async fn find_by_object_id(
        &self,
        tenant_id: &str,
        object_id: &str,
    ) -> Result<Option<Account>, DomainError>;

    /// Find an account by `(tenant_id, username)`
    ///
    /// # Arguments
    /// * `tenant_id` - Entra tenant id
    /// * `username` - Sign-in name, already lower-cased by the caller
    async fn find_by_username(
        &self,
        tenant_id: &str,
        username: &str,
    ) -> Result<Option<Account>, DomainError>;

    /// Link `object_id` to the account, only if its current link is empty
    ///
    /// # Returns
    /// * `Ok(true)` - Link written
    /// * `Ok(false)` - Account missing or already linked; nothing changed
    /// * `Err(DomainError)` - Backend failure
    async fn link_object_id(&self, user_id: i64, object_id: &str) -> Result<bool, DomainError>;

    /// All role assignments of an account, including inactive and expired ones
    async fn find_role_assignments(&self, user_id: i64) -> Result<Vec<RoleAssignment>, DomainError>;
}
