//! Main authentication service implementation

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::entities::session::Session;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::account::AccountResolver;
use crate::services::clock::Clock;
use crate::services::session::{SessionService, SessionStore};
use crate::services::token::{KeySetCache, KeySetFetcher, TokenValidator};

use super::config::AuthServiceConfig;

/// Authentication service for the Entra ID sign-in flow
pub struct AuthService<F, A, S>
where
    F: KeySetFetcher,
    A: AccountRepository,
    S: SessionStore,
{
    /// Identity token validation
    validator: TokenValidator<F>,
    /// Identity-to-account mapping
    resolver: AccountResolver<A>,
    /// Session issuance and lookup
    sessions: SessionService<S>,
    clock: Arc<dyn Clock>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<F, A, S> AuthService<F, A, S>
where
    F: KeySetFetcher,
    A: AccountRepository,
    S: SessionStore,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `key_cache` - Shared cache of discovery signing keys
    /// * `account_repository` - Account lookups and object id linking
    /// * `session_store` - Where issued sessions are kept
    /// * `config` - Service configuration
    /// * `clock` - Time source for every expiry decision
    pub fn new(
        key_cache: Arc<KeySetCache<F>>,
        account_repository: Arc<A>,
        session_store: S,
        config: AuthServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        if config.expected_audience.is_none() {
            error!("ENTRA_CLIENT_ID is not set; every sign-in will be refused");
        }

        Self {
            validator: TokenValidator::new(key_cache, config.authority_host.clone()),
            resolver: AccountResolver::new(account_repository, clock.clone()),
            sessions: SessionService::new(session_store, config.session_ttl, clock.clone()),
            clock,
            config,
        }
    }

    /// Exchange an Entra ID identity token for a session.
    ///
    /// No session is created unless the token is valid and an eligible
    /// account is found.
    ///
    /// # Errors
    /// * `TokenError` - Malformed or invalid token
    /// * `AuthError::ConfigurationMissing` - No expected audience configured
    /// * `AuthError::AccountNotMapped` - Valid identity without an account
    /// * `DomainError::ServiceUnavailable` - Database or session store down
    pub async fn exchange(&self, id_token: &str) -> DomainResult<Session> {
        let claims = self
            .validator
            .validate(
                id_token,
                self.config.expected_audience.as_deref(),
                self.clock.now(),
            )
            .await?;

        let resolved = self.resolver.resolve(&claims).await?;
        let session = self.sessions.create(&resolved).await?;

        info!(
            user_id = session.user.user_id,
            company_id = session.user.company_id,
            "Entra ID sign-in completed"
        );
        Ok(session)
    }

    /// Session for a bearer token
    ///
    /// # Errors
    /// * `AuthError::SessionNotFound` - Unknown, deleted or expired token
    pub async fn current_session(&self, token: &str) -> DomainResult<Session> {
        self.sessions
            .get(token)
            .await?
            .ok_or_else(|| AuthError::SessionNotFound.into())
    }

    /// End the session for `token`. Always succeeds; store failures are logged.
    pub async fn logout(&self, token: Option<&str>) {
        let Some(token) = token.filter(|token| !token.is_empty()) else {
            return;
        };

        if let Err(e) = self.sessions.delete(token).await {
            warn!(error = %e, "Failed to delete session on logout");
        }
    }

    pub fn config(&self) -> &AuthServiceConfig {
        &self.config
    }
}
