//! Session service

use chrono::Duration;
use rand::{rngs::OsRng, RngCore};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::account::ResolvedAccount;
use crate::domain::entities::session::Session;
use crate::errors::DomainError;
use crate::services::clock::Clock;

use super::store::SessionStore;

/// Random bytes per session token
const TOKEN_BYTES: usize = 32;

/// Characters of a token that may appear in logs
const LOG_PREFIX_LEN: usize = 8;

/// Issues, looks up and deletes sessions.
pub struct SessionService<S: SessionStore> {
    store: S,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<S: SessionStore> SessionService<S> {
    /// # Arguments
    ///
    /// * `store` - Session storage backend
    /// * `ttl` - Fixed session lifetime; sessions are never extended
    /// * `clock` - Time source for issue and expiry checks
    pub fn new(store: S, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { store, ttl, clock }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a new session for `resolved`
    pub async fn create(&self, resolved: &ResolvedAccount) -> Result<Session, DomainError> {
        let session = Session::new(
            generate_session_token(),
            resolved,
            self.clock.now(),
            self.ttl,
        );
        self.store.insert(session.clone()).await?;

        info!(
            user_id = session.user.user_id,
            session = log_prefix(&session.token),
            expires_at = %session.expires_at,
            "Session issued"
        );
        Ok(session)
    }

    /// Live session for `token`, if any
    pub async fn get(&self, token: &str) -> Result<Option<Session>, DomainError> {
        let session = self.store.find(token, self.clock.now()).await?;
        if session.is_none() {
            debug!(session = log_prefix(token), "Session not found or expired");
        }
        Ok(session)
    }

    /// Delete the session for `token`; unknown tokens are ignored
    pub async fn delete(&self, token: &str) -> Result<(), DomainError> {
        self.store.remove(token).await?;
        debug!(session = log_prefix(token), "Session deleted");
        Ok(())
    }
}

/// Fresh opaque session token: 32 bytes from the OS generator, hex encoded
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

fn log_prefix(token: &str) -> &str {
    token
        .char_indices()
        .nth(LOG_PREFIX_LEN)
        .map_or(token, |(end, _)| &token[..end])
}
