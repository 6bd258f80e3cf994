//! Entra ID identity token validation

use chrono::{DateTime, Utc};
use jsonwebtoken::{crypto, Algorithm, DecodingKey};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::identity::VerifiedClaims;
use crate::errors::{AuthError, DomainError, InvalidTokenReason};

use super::decoder::{decode, DecodedToken};
use super::key_cache::{KeySetCache, KeySetFetcher};

/// The only accepted signing algorithm
const REQUIRED_ALGORITHM: &str = "RS256";

/// Setting that supplies the expected audience
const AUDIENCE_SETTING: &str = "ENTRA_CLIENT_ID";

/// Claims checked in order to find a sign-in name
const USERNAME_CLAIMS: [&str; 3] = ["preferred_username", "upn", "email"];

/// Validates identity tokens against the discovery key set.
pub struct TokenValidator<F: KeySetFetcher> {
    key_cache: Arc<KeySetCache<F>>,
    authority_host: String,
}

impl<F: KeySetFetcher> TokenValidator<F> {
    /// # Arguments
    ///
    /// * `key_cache` - Shared signing key cache
    /// * `authority_host` - Host part of the expected issuer, e.g. `login.microsoftonline.com`
    pub fn new(key_cache: Arc<KeySetCache<F>>, authority_host: impl Into<String>) -> Self {
        Self {
            key_cache,
            authority_host: authority_host.into(),
        }
    }

    /// Validates `token` and returns its claims.
    ///
    /// Checks run strictly in this order and the first failure wins:
    /// 1. header declares `alg` = `RS256` and a `kid`
    /// 2. the key for `kid` is known (fetched on a miss)
    /// 3. RS256 signature over the received signing input
    /// 4. `exp` present and later than `now`
    /// 5. `aud` equals `expected_audience` (`None` is a configuration error)
    /// 6. `tid` and `oid` present
    /// 7. `iss` equals `https://<authority_host>/<tid>/v2.0`
    pub async fn validate(
        &self,
        token: &str,
        expected_audience: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<VerifiedClaims, DomainError> {
        let decoded = decode(token)?;

        if decoded.header.alg.as_deref() != Some(REQUIRED_ALGORITHM) {
            return Err(reject(InvalidTokenReason::UnsupportedAlgorithm));
        }
        let kid = decoded
            .header
            .kid
            .as_deref()
            .filter(|kid| !kid.is_empty())
            .ok_or_else(|| reject(InvalidTokenReason::MissingKeyId))?;

        let jwk = self
            .key_cache
            .get_key(kid)
            .await
            .ok_or_else(|| reject(InvalidTokenReason::UnknownSigningKey))?;

        verify_signature(&decoded, &jwk)?;

        let expiry = decoded
            .payload
            .get("exp")
            .and_then(Value::as_f64)
            .ok_or_else(|| reject(InvalidTokenReason::Expired))?;
        if expiry <= now.timestamp() as f64 {
            return Err(reject(InvalidTokenReason::Expired));
        }

        let expected_audience = expected_audience
            .map(str::trim)
            .filter(|aud| !aud.is_empty())
            .ok_or_else(|| AuthError::ConfigurationMissing {
                key: AUDIENCE_SETTING.to_string(),
            })?;
        if !audience_matches(decoded.payload.get("aud"), expected_audience) {
            return Err(reject(InvalidTokenReason::AudienceMismatch));
        }

        let (tenant_id, object_id) = match (decoded.string_claim("tid"), decoded.string_claim("oid")) {
            (Some(tid), Some(oid)) => (tid.to_string(), oid.to_string()),
            _ => return Err(reject(InvalidTokenReason::MissingIdentityClaims)),
        };

        let expected_issuer = format!("https://{}/{}/v2.0", self.authority_host, tenant_id);
        if decoded.payload.get("iss").and_then(Value::as_str) != Some(expected_issuer.as_str()) {
            return Err(reject(InvalidTokenReason::IssuerMismatch));
        }

        Ok(VerifiedClaims {
            email: USERNAME_CLAIMS
                .iter()
                .find_map(|claim| decoded.string_claim(claim))
                .map(str::to_string),
            name: decoded.string_claim("name").map(str::to_string),
            expiry: expiry as i64,
            tenant_id,
            object_id,
        })
    }
}

fn reject(reason: InvalidTokenReason) -> DomainError {
    debug!(%reason, "Identity token rejected");
    DomainError::invalid_token(reason)
}

fn verify_signature(decoded: &DecodedToken, jwk: &jsonwebtoken::jwk::Jwk) -> Result<(), DomainError> {
    let key = DecodingKey::from_jwk(jwk).map_err(|_| reject(InvalidTokenReason::BadSignature))?;

    match crypto::verify(
        &decoded.signature,
        decoded.signing_input.as_bytes(),
        &key,
        Algorithm::RS256,
    ) {
        Ok(true) => Ok(()),
        _ => Err(reject(InvalidTokenReason::BadSignature)),
    }
}

/// `aud` may be a single string or an array of strings
fn audience_matches(aud: Option<&Value>, expected: &str) -> bool {
    match aud {
        Some(Value::String(aud)) => aud == expected,
        Some(Value::Array(values)) => values.iter().any(|v| v.as_str() == Some(expected)),
        _ => false,
    }
}
