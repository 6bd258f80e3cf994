//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, InvalidTokenReason, TokenError};

use hub_shared::error_codes;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// An upstream dependency (database, session store) could not be reached
    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    pub fn database_unavailable() -> Self {
        DomainError::ServiceUnavailable {
            service: "database".to_string(),
        }
    }

    pub fn session_store_unavailable() -> Self {
        DomainError::ServiceUnavailable {
            service: "session_store".to_string(),
        }
    }

    pub fn invalid_token(reason: InvalidTokenReason) -> Self {
        DomainError::Token(TokenError::InvalidToken { reason })
    }

    /// Stable machine-readable code for response bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::ServiceUnavailable { .. } => error_codes::SERVICE_UNAVAILABLE,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Auth(AuthError::ConfigurationMissing { .. }) => {
                error_codes::CONFIGURATION_MISSING
            }
            DomainError::Auth(AuthError::AccountNotMapped) => error_codes::ACCOUNT_NOT_MAPPED,
            DomainError::Auth(AuthError::SessionNotFound) => error_codes::UNAUTHORIZED,
            DomainError::Token(TokenError::InvalidTokenFormat) => error_codes::INVALID_TOKEN_FORMAT,
            DomainError::Token(TokenError::InvalidTokenEncoding) => {
                error_codes::INVALID_TOKEN_ENCODING
            }
            DomainError::Token(TokenError::InvalidToken { .. }) => error_codes::INVALID_TOKEN,
        }
    }

    /// True when the caller sent something we refuse, as opposed to a fault on our side
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::Token(_)
                | DomainError::Auth(AuthError::AccountNotMapped)
                | DomainError::Auth(AuthError::SessionNotFound)
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
