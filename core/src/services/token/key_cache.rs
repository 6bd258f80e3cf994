//! Process-wide cache of discovery signing keys

use async_trait::async_trait;
use jsonwebtoken::jwk::Jwk;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::errors::DomainError;

/// Source of the published signing key set
#[async_trait]
pub trait KeySetFetcher: Send + Sync {
    /// Fetch every key currently published by the discovery endpoint
    async fn fetch_keys(&self) -> Result<Vec<Jwk>, DomainError>;
}

#[async_trait]
impl<T: KeySetFetcher + ?Sized> KeySetFetcher for Arc<T> {
    async fn fetch_keys(&self) -> Result<Vec<Jwk>, DomainError> {
        (**self).fetch_keys().await
    }
}

/// Signing keys keyed by `kid`, filled lazily on a miss.
///
/// Entries are only ever added, never replaced or evicted. Concurrent misses
/// may each trigger a fetch; inserts are idempotent so the map converges.
pub struct KeySetCache<F: KeySetFetcher> {
    fetcher: F,
    keys: RwLock<HashMap<String, Jwk>>,
}

impl<F: KeySetFetcher> KeySetCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            keys: RwLock::new(HashMap::new()),
        }
    }

    /// Look up the key for `kid`, refreshing from the discovery endpoint on a miss.
    ///
    /// A failed fetch is reported as `None`: the token cannot be validated and
    /// is rejected, rather than surfacing a transport fault.
    pub async fn get_key(&self, kid: &str) -> Option<Jwk> {
        if let Some(key) = self.keys.read().await.get(kid) {
            return Some(key.clone());
        }

        debug!(kid, "Signing key not cached, fetching key set");
        let fetched = match self.fetcher.fetch_keys().await {
            Ok(keys) => keys,
            Err(e) => {
                warn!(kid, error = %e, "Signing key set fetch failed");
                return None;
            }
        };

        let mut keys = self.keys.write().await;
        let before = keys.len();
        for key in fetched {
            if let Some(key_id) = key.common.key_id.clone() {
                keys.entry(key_id).or_insert(key);
            }
        }
        if keys.len() > before {
            info!(added = keys.len() - before, total = keys.len(), "Signing keys cached");
        }

        keys.get(kid).cloned()
    }

    /// Number of cached keys
    pub async fn len(&self) -> usize {
        self.keys.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.keys.read().await.is_empty()
    }
}
