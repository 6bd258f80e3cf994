//! Authentication configuration: Entra ID token validation and session lifetime

use serde::{Deserialize, Serialize};

use super::{env_non_empty, env_parse};

/// Default Entra ID authority host used to build expected issuers
pub const DEFAULT_AUTHORITY_HOST: &str = "login.microsoftonline.com";

/// Multi-tenant signing key discovery endpoint
pub const DEFAULT_JWKS_URL: &str = "https://login.microsoftonline.com/common/discovery/v2.0/keys";

/// Default session lifetime (12 hours)
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 12 * 60 * 60;

/// Microsoft Entra ID (Azure AD) OpenID Connect configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntraConfig {
    /// Application (client) id expected in the `aud` claim.
    /// `None` is a deployment error: every exchange is refused.
    #[serde(default)]
    pub client_id: Option<String>,

    /// Authority host, e.g. `login.microsoftonline.com`
    #[serde(default = "default_authority_host")]
    pub authority_host: String,

    /// Signing key discovery endpoint
    #[serde(default = "default_jwks_url")]
    pub jwks_url: String,

    /// Upper bound for one key discovery request, in seconds
    #[serde(default = "default_jwks_fetch_timeout")]
    pub jwks_fetch_timeout_secs: u64,
}

impl Default for EntraConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            authority_host: default_authority_host(),
            jwks_url: default_jwks_url(),
            jwks_fetch_timeout_secs: default_jwks_fetch_timeout(),
        }
    }
}

impl EntraConfig {
    /// Create a configuration for the given client id
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            client_id: env_non_empty("ENTRA_CLIENT_ID"),
            authority_host: env_non_empty("ENTRA_AUTHORITY_HOST")
                .unwrap_or_else(default_authority_host),
            jwks_url: env_non_empty("ENTRA_JWKS_URL").unwrap_or_else(default_jwks_url),
            jwks_fetch_timeout_secs: env_parse(
                "ENTRA_JWKS_TIMEOUT_SECS",
                default_jwks_fetch_timeout(),
            ),
        }
    }

    /// Returns the configured client id, ignoring blank values
    pub fn client_id(&self) -> Option<&str> {
        self.client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Issuer a token from `tenant_id` must carry
    pub fn expected_issuer(&self, tenant_id: &str) -> String {
        format!("https://{}/{}/v2.0", self.authority_host, tenant_id)
    }
}

/// Where sessions are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// Process-local map, lost on restart
    Memory,
    /// Redis, shared between instances
    Redis,
}

impl std::str::FromStr for SessionBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" => Ok(SessionBackend::Memory),
            "redis" => Ok(SessionBackend::Redis),
            _ => Err(format!("Invalid session store: {}", s)),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Session lifetime in seconds
    pub ttl_seconds: i64,

    /// Session store backend
    pub backend: SessionBackend,

    /// Key prefix used by shared stores
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
            backend: SessionBackend::Memory,
            key_prefix: default_key_prefix(),
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            ttl_seconds: env_parse("SESSION_TTL_SECONDS", DEFAULT_SESSION_TTL_SECONDS),
            backend: env_parse("SESSION_STORE", SessionBackend::Memory),
            key_prefix: env_non_empty("SESSION_KEY_PREFIX").unwrap_or_else(default_key_prefix),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Entra ID configuration
    pub entra: EntraConfig,

    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            entra: EntraConfig::from_env(),
            session: SessionConfig::from_env(),
        }
    }
}

fn default_authority_host() -> String {
    String::from(DEFAULT_AUTHORITY_HOST)
}

fn default_jwks_url() -> String {
    String::from(DEFAULT_JWKS_URL)
}

fn default_jwks_fetch_timeout() -> u64 {
    10
}

fn default_key_prefix() -> String {
    String::from("hub:session:")
}
