//! Tenant-scoped application account, as seen by the sign-in flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Account record keyed by `(tenant_id, object_id)`, with
/// `(tenant_id, lower(username))` as the secondary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Internal user id
    pub user_id: i64,

    /// Entra tenant the account belongs to
    pub tenant_id: String,

    /// Linked Entra object id; empty until the first sign-in backfills it
    pub object_id: Option<String>,

    /// Sign-in name as stored
    pub username: String,

    /// Profile first name
    pub first_name: Option<String>,

    /// Profile last name
    pub last_name: Option<String>,

    /// Account-level active flag
    pub is_active: bool,

    pub company_id: i64,
    pub company_name: String,

    /// Company-level active flag
    pub company_is_active: bool,

    /// Linked staff record, if the account belongs to a staff member
    pub staff_id: Option<i64>,
    pub staff_email: Option<String>,
}

impl Account {
    /// Only active accounts in active companies may sign in
    pub fn is_eligible(&self) -> bool {
        self.is_active && self.company_is_active
    }

    /// Whether an object id is already linked
    pub fn has_object_id(&self) -> bool {
        self.object_id
            .as_deref()
            .map_or(false, |oid| !oid.trim().is_empty())
    }

    /// "First Last" from the profile, if either part is present
    pub fn profile_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Display name: profile name, else the token's name claim, else the username
    pub fn display_name(&self, token_name: Option<&str>) -> String {
        self.profile_name()
            .or_else(|| {
                token_name
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| self.username.clone())
    }
}

/// One role granted to an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role_name: String,
    pub is_active: bool,

    /// `None` means the assignment never expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl RoleAssignment {
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            is_active: true,
            expires_at: None,
        }
    }

    pub fn expiring_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Active and not yet expired at `now`
    pub fn is_effective(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.expires_at.map_or(true, |expires_at| expires_at > now)
    }
}

/// Effective role names: deduplicated and sorted
pub fn effective_roles(assignments: &[RoleAssignment], now: DateTime<Utc>) -> Vec<String> {
    assignments
        .iter()
        .filter(|assignment| assignment.is_effective(now))
        .map(|assignment| assignment.role_name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Outcome of mapping a verified identity onto an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAccount {
    pub account: Account,
    pub roles: Vec<String>,
    pub display_name: String,
}
