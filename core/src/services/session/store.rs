//! Session store trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

/// Storage for issued sessions, keyed by token.
///
/// A session is never returned once `now >= expires_at`. Removing an unknown
/// token is not an error.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a new session under its token
    async fn insert(&self, session: Session) -> Result<(), DomainError>;

    /// Look up a live session
    ///
    /// # Returns
    /// * `Ok(Some(Session))` - Session exists and has not expired at `now`
    /// * `Ok(None)` - Unknown or expired token
    /// * `Err(DomainError)` - Store unreachable
    async fn find(&self, token: &str, now: DateTime<Utc>) -> Result<Option<Session>, DomainError>;

    /// Remove a session if present
    async fn remove(&self, token: &str) -> Result<(), DomainError>;
}

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn insert(&self, session: Session) -> Result<(), DomainError> {
        (**self).insert(session).await
    }

    async fn find(&self, token: &str, now: DateTime<Utc>) -> Result<Option<Session>, DomainError> {
        (**self).find(token, now).await
    }

    async fn remove(&self, token: &str) -> Result<(), DomainError> {
        (**self).remove(token).await
    }
}
