//! Identity asserted by a verified Entra ID token.

use serde::{Deserialize, Serialize};

/// Claims of an identity token that passed every validation step.
///
/// Only exists for the duration of one exchange; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedClaims {
    /// Directory (tenant) id, `tid`
    pub tenant_id: String,

    /// Object id of the user within the tenant, `oid`
    pub object_id: String,

    /// First usable sign-in name: `preferred_username`, then `upn`, then `email`
    pub email: Option<String>,

    /// Display name, `name`
    pub name: Option<String>,

    /// Expiry in epoch seconds, `exp`
    pub expiry: i64,
}

impl VerifiedClaims {
    /// Lower-cased sign-in name used for the fallback account lookup
    pub fn normalized_username(&self) -> Option<String> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_lowercase)
    }
}
