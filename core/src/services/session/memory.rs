//! Process-local session store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

use super::store::SessionStore;

/// In-memory session store.
///
/// Expired entries are swept on every lookup. Sessions do not survive a
/// restart and are not shared between instances.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions, expired ones included until the next sweep
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session);
        Ok(())
    }

    async fn find(&self, token: &str, now: DateTime<Utc>) -> Result<Option<Session>, DomainError> {
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        if sessions.len() < before {
            debug!(swept = before - sessions.len(), "Expired sessions removed");
        }

        Ok(sessions.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<(), DomainError> {
        self.sessions.write().await.remove(token);
        Ok(())
    }
}
