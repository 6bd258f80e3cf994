//! Domain entities representing core business objects.

pub mod account;
pub mod identity;
pub mod session;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use account::{effective_roles, Account, ResolvedAccount, RoleAssignment};
pub use identity::VerifiedClaims;
pub use session::{Session, SessionUser, SESSION_TTL_HOURS};
