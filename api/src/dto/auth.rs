use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use hub_core::domain::entities::session::{Session, SessionUser};

/// Body of `POST /api/auth/microsoft/exchange`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExchangeRequest {
    /// Entra ID identity token (compact JWS)
    #[serde(rename = "idToken", default)]
    #[validate(length(min = 1))]
    pub id_token: String,
}

impl ExchangeRequest {
    /// Strips surrounding whitespace so a blank token fails validation
    pub fn trimmed(mut self) -> Self {
        self.id_token = self.id_token.trim().to_string();
        self
    }
}

/// Issued session, returned by the exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: SessionUser,
    pub roles: Vec<String>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            session_token: session.token,
            expires_at: session.expires_at,
            user: session.user,
            roles: session.roles,
        }
    }
}

/// Current session, returned by `GET /api/auth/me`. Never echoes the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user: SessionUser,
    pub roles: Vec<String>,
    pub expires_at: DateTime<Utc>,
}

impl From<&Session> for MeResponse {
    fn from(session: &Session) -> Self {
        Self {
            user: session.user.clone(),
            roles: session.roles.clone(),
            expires_at: session.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_id_token_fails_validation() {
        let request: ExchangeRequest = serde_json::from_str(r#"{"idToken": "  \t "}"#).unwrap();
        assert!(request.validate().is_ok());
        assert!(request.trimmed().validate().is_err());
    }

    #[test]
    fn test_trimmed_keeps_token_body() {
        let request = ExchangeRequest {
            id_token: " a.b.c\n".to_string(),
        };
        assert_eq!(request.trimmed().id_token, "a.b.c");
    }
}
