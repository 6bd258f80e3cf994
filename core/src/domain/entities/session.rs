//! Server-side session issued after a successful sign-in.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::account::ResolvedAccount;

/// Session lifetime (12 hours)
pub const SESSION_TTL_HOURS: i64 = 12;

/// User details carried by a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: i64,
    pub company_id: i64,
    pub staff_id: Option<i64>,
    pub username: String,
    pub display_name: String,
    pub company_name: String,
    pub staff_email: Option<String>,
}

impl From<&ResolvedAccount> for SessionUser {
    fn from(resolved: &ResolvedAccount) -> Self {
        let account = &resolved.account;
        Self {
            user_id: account.user_id,
            company_id: account.company_id,
            staff_id: account.staff_id,
            username: account.username.clone(),
            display_name: resolved.display_name.clone(),
            company_name: account.company_name.clone(),
            staff_email: account.staff_email.clone(),
        }
    }
}

/// Opaque-token session.
///
/// Never mutated after creation: `expires_at` is always `issued_at + ttl`
/// and nothing extends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub user: SessionUser,
    pub roles: Vec<String>,
}

impl Session {
    /// Creates a session for `resolved` that expires `ttl` after `issued_at`
    pub fn new(
        token: String,
        resolved: &ResolvedAccount,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            token,
            issued_at,
            expires_at: issued_at + ttl,
            user: SessionUser::from(resolved),
            roles: resolved.roles.clone(),
        }
    }

    /// Expired once `now` reaches `expires_at`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Seconds left before expiry, zero once expired
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}
