//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Halo Hub backend.
//! It provides the concrete adapters behind the ports declared in `hub_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Key discovery**: HTTP fetcher for the Entra ID signing key set
//! - **Database**: MySQL account repository using SQLx
//! - **Cache**: Redis-backed session store shared between instances
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable Redis session storage (default)

use hub_core::errors::DomainError;

/// Signing key discovery over HTTP
pub mod jwks;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Cache module - Redis client and session store
#[cfg(feature = "redis-cache")]
pub mod cache;

pub use jwks::HttpKeySetFetcher;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[cfg(feature = "redis-cache")]
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stored data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            #[cfg(feature = "mysql")]
            InfrastructureError::Database(_) => DomainError::database_unavailable(),
            #[cfg(feature = "redis-cache")]
            InfrastructureError::Cache(_) => DomainError::session_store_unavailable(),
            InfrastructureError::Http(_) => DomainError::ServiceUnavailable {
                service: "key_discovery".to_string(),
            },
            InfrastructureError::Serialization(e) => DomainError::Internal {
                message: e.to_string(),
            },
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}
