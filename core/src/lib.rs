//! # Halo Hub Core
//!
//! Core domain layer for the Halo Hub backend.
//! This crate contains the Entra ID token validation pipeline, the mapping of
//! verified identities onto tenant-scoped accounts, session issuance, the
//! repository and store interfaces, and the error taxonomy.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    effective_roles, Account, ResolvedAccount, RoleAssignment, Session, SessionUser,
    VerifiedClaims, SESSION_TTL_HOURS,
};
pub use errors::{AuthError, DomainError, DomainResult, InvalidTokenReason, TokenError};
pub use repositories::{AccountRepository, InMemoryAccountRepository};
pub use services::{
    AccountResolver, AuthService, AuthServiceConfig, Clock, InMemorySessionStore, KeySetCache,
    KeySetFetcher, ManualClock, SessionService, SessionStore, SystemClock, TokenValidator,
};
