//! Configuration for the authentication service

use chrono::Duration;
use hub_shared::config::auth::{AuthConfig, DEFAULT_AUTHORITY_HOST};
use hub_shared::config::SessionConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Client id every identity token must be issued for; `None` refuses all exchanges
    pub expected_audience: Option<String>,
    /// Authority host used to build the expected issuer
    pub authority_host: String,
    /// Fixed session lifetime
    pub session_ttl: Duration,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            expected_audience: None,
            authority_host: DEFAULT_AUTHORITY_HOST.to_string(),
            session_ttl: Duration::seconds(SessionConfig::default().ttl_seconds),
        }
    }
}

impl AuthServiceConfig {
    /// Create a configuration expecting `client_id` as audience
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            expected_audience: Some(client_id.into()),
            ..Default::default()
        }
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            expected_audience: config.entra.client_id().map(str::to_string),
            authority_host: config.entra.authority_host.clone(),
            session_ttl: Duration::seconds(config.session.ttl_seconds),
        }
    }
}
