//! Redis-backed session store shared between API instances

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::warn;

use hub_core::domain::entities::session::Session;
use hub_core::errors::DomainError;
use hub_core::services::session::SessionStore;

use super::redis_client::RedisClient;

/// Sessions stored as JSON under `<prefix><token>` with a Redis expiry.
///
/// Redis drops entries once their lifetime passes; `find` also checks
/// `expires_at` against the caller's clock.
#[derive(Clone)]
pub struct RedisSessionStore {
    client: RedisClient,
    key_prefix: String,
}

impl RedisSessionStore {
    pub fn new(client: RedisClient, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
        }
    }

    fn key(&self, token: &str) -> String {
        session_key(&self.key_prefix, token)
    }
}

pub(crate) fn session_key(prefix: &str, token: &str) -> String {
    format!("{}{}", prefix, token)
}

/// Redis expiry for a session: its full lifetime, at least one second
pub(crate) fn expiry_seconds(session: &Session) -> u64 {
    session.remaining_seconds(session.issued_at).max(1) as u64
}

/// Decodes a stored session, `None` if it is unreadable or expired at `now`
pub(crate) fn decode_session(raw: &str, now: DateTime<Utc>) -> Option<Session> {
    match serde_json::from_str::<Session>(raw) {
        Ok(session) if !session.is_expired(now) => Some(session),
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "Discarding unreadable stored session");
            None
        }
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn insert(&self, session: Session) -> Result<(), DomainError> {
        let value = serde_json::to_string(&session).map_err(|e| DomainError::Internal {
            message: format!("Failed to encode session: {}", e),
        })?;

        self.client
            .set_with_expiry(&self.key(&session.token), &value, expiry_seconds(&session))
            .await?;
        Ok(())
    }

    async fn find(&self, token: &str, now: DateTime<Utc>) -> Result<Option<Session>, DomainError> {
        let raw = self.client.get(&self.key(token)).await?;
        Ok(raw.and_then(|raw| decode_session(&raw, now)))
    }

    async fn remove(&self, token: &str) -> Result<(), DomainError> {
        self.client.delete(&self.key(token)).await?;
        Ok(())
    }
}
