//! Error type definitions for token validation and sign-in
//!
//! The presentation layer maps these onto HTTP statuses; the variants are kept
//! distinct so that "someone sent a bad token" never looks like "the
//! deployment is broken".

use thiserror::Error;

/// Why a well-formed token was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTokenReason {
    #[error("unsupported signing algorithm")]
    UnsupportedAlgorithm,

    #[error("missing key id")]
    MissingKeyId,

    #[error("unknown signing key")]
    UnknownSigningKey,

    #[error("signature mismatch")]
    BadSignature,

    #[error("token expired or missing expiry")]
    Expired,

    #[error("audience mismatch")]
    AudienceMismatch,

    #[error("missing tenant or object id")]
    MissingIdentityClaims,

    #[error("issuer mismatch")]
    IssuerMismatch,
}

/// Identity token errors. All of them are client-side problems.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid token encoding")]
    InvalidTokenEncoding,

    #[error("Invalid token: {reason}")]
    InvalidToken { reason: InvalidTokenReason },
}

/// Sign-in and session errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Operator error: a required setting is absent
    #[error("Configuration missing: {key}")]
    ConfigurationMissing { key: String },

    /// The identity is genuine but no application account grants entry
    #[error("No account mapped to this identity")]
    AccountNotMapped,

    #[error("Session not found or expired")]
    SessionNotFound,
}
