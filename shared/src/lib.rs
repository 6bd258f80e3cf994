//! Shared configuration and response types for the Halo Hub server
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types loaded from the environment
//! - Error and success response envelopes
//! - Health check types

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, DatabaseConfig, EntraConfig, Environment, ServerConfig,
    SessionBackend, SessionConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{DataResponse, HealthResponse, HealthStatus, OkResponse};
