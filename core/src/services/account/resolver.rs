//! Identity-to-account resolution

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::entities::account::{effective_roles, ResolvedAccount};
use crate::domain::entities::identity::VerifiedClaims;
use crate::errors::{AuthError, DomainError};
use crate::repositories::AccountRepository;
use crate::services::clock::Clock;

/// Resolves verified claims to an eligible account with its effective roles.
pub struct AccountResolver<A: AccountRepository> {
    repository: Arc<A>,
    clock: Arc<dyn Clock>,
}

impl<A: AccountRepository> AccountResolver<A> {
    pub fn new(repository: Arc<A>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Find the account for `claims`.
    ///
    /// Looks up `(tid, oid)` first. When that misses and the token carries a
    /// sign-in name, falls back to `(tid, lower(name))` and links the object
    /// id to the account found, provided none is linked yet. A failed link is
    /// logged and does not fail the sign-in.
    ///
    /// # Errors
    /// * `AuthError::AccountNotMapped` - No eligible account matches
    /// * `DomainError::ServiceUnavailable` - Account store unreachable
    pub async fn resolve(&self, claims: &VerifiedClaims) -> Result<ResolvedAccount, DomainError> {
        let account = match self
            .repository
            .find_by_object_id(&claims.tenant_id, &claims.object_id)
            .await?
        {
            Some(account) => account,
            None => {
                let Some(username) = claims.normalized_username() else {
                    info!(tenant_id = %claims.tenant_id, "No account linked and token carries no username");
                    return Err(AuthError::AccountNotMapped.into());
                };

                let Some(account) = self
                    .repository
                    .find_by_username(&claims.tenant_id, &username)
                    .await?
                else {
                    info!(tenant_id = %claims.tenant_id, "No account mapped to identity");
                    return Err(AuthError::AccountNotMapped.into());
                };

                if !account.has_object_id() {
                    self.backfill_object_id(account.user_id, &claims.object_id).await;
                }
                account
            }
        };

        let assignments = self.repository.find_role_assignments(account.user_id).await?;
        let roles = effective_roles(&assignments, self.clock.now());
        let display_name = account.display_name(claims.name.as_deref());

        debug!(user_id = account.user_id, roles = roles.len(), "Identity resolved");

        Ok(ResolvedAccount {
            account,
            roles,
            display_name,
        })
    }

    async fn backfill_object_id(&self, user_id: i64, object_id: &str) {
        match self.repository.link_object_id(user_id, object_id).await {
            Ok(true) => info!(user_id, "Linked Entra object id to account"),
            Ok(false) => debug!(user_id, "Account already linked, object id left unchanged"),
            Err(e) => warn!(user_id, error = %e, "Failed to link Entra object id"),
        }
    }
}
