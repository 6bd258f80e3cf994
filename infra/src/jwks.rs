//! Entra ID signing key discovery
//!
//! Fetches the published JSON Web Key Set over HTTPS. The set is parsed one
//! key at a time so an entry this crate cannot use does not hide the others.

use async_trait::async_trait;
use jsonwebtoken::jwk::Jwk;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use hub_core::errors::DomainError;
use hub_core::services::token::KeySetFetcher;
use hub_shared::config::EntraConfig;

use crate::InfrastructureError;

/// Fetches the signing key set from a discovery endpoint
#[derive(Clone)]
pub struct HttpKeySetFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpKeySetFetcher {
    /// Create a fetcher for `url`; every request is bounded by `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Create from the Entra ID configuration
    pub fn from_config(config: &EntraConfig) -> Result<Self, InfrastructureError> {
        Self::new(
            config.jwks_url.clone(),
            Duration::from_secs(config.jwks_fetch_timeout_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<Jwk>, InfrastructureError> {
        let body: Value = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(parse_key_set(&body))
    }
}

#[async_trait]
impl KeySetFetcher for HttpKeySetFetcher {
    async fn fetch_keys(&self) -> Result<Vec<Jwk>, DomainError> {
        debug!(url = %self.url, "Fetching signing key set");

        match self.fetch().await {
            Ok(keys) => {
                info!(url = %self.url, count = keys.len(), "Signing key set fetched");
                Ok(keys)
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "Signing key set request failed");
                Err(e.into())
            }
        }
    }
}

/// Usable keys of a `{"keys": [...]}` document.
///
/// Entries without a non-empty `kid`, or that are not valid JWKs, are skipped.
pub fn parse_key_set(body: &Value) -> Vec<Jwk> {
    let Some(entries) = body.get("keys").and_then(Value::as_array) else {
        warn!("Key set document has no keys array");
        return Vec::new();
    };

    let keys: Vec<Jwk> = entries
        .iter()
        .filter(|entry| {
            entry
                .get("kid")
                .and_then(Value::as_str)
                .map_or(false, |kid| !kid.is_empty())
        })
        .filter_map(|entry| match serde_json::from_value::<Jwk>(entry.clone()) {
            Ok(jwk) => Some(jwk),
            Err(e) => {
                debug!(error = %e, "Skipping unusable key set entry");
                None
            }
        })
        .collect();

    if keys.len() < entries.len() {
        debug!(skipped = entries.len() - keys.len(), "Key set entries skipped");
    }
    keys
}
