//! Compact JWS decoding

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::TokenError;

/// JOSE header fields the validator looks at
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JwtHeader {
    #[serde(default)]
    pub alg: Option<String>,
    #[serde(default)]
    pub kid: Option<String>,
    #[serde(default)]
    pub typ: Option<String>,
}

/// A token split into its parts.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    pub header: JwtHeader,
    pub payload: Map<String, Value>,
    /// `<header-segment>.<payload-segment>` exactly as received
    pub signing_input: String,
    /// Signature segment, still base64url encoded
    pub signature: String,
}

impl DecodedToken {
    /// String claim, `None` when absent, not a string, or blank
    pub fn string_claim(&self, name: &str) -> Option<&str> {
        self.payload
            .get(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Splits and decodes a compact-serialized token.
///
/// The signing input is sliced out of the original string rather than
/// rebuilt from parsed JSON, so signature checks see the bytes that were
/// actually signed.
pub fn decode(token: &str) -> Result<DecodedToken, TokenError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [header_segment, payload_segment, signature_segment] = segments[..] else {
        return Err(TokenError::InvalidTokenFormat);
    };

    let header: JwtHeader = serde_json::from_slice(&decode_segment(header_segment)?)
        .map_err(|_| TokenError::InvalidTokenEncoding)?;
    let payload: Map<String, Value> = serde_json::from_slice(&decode_segment(payload_segment)?)
        .map_err(|_| TokenError::InvalidTokenEncoding)?;

    Ok(DecodedToken {
        header,
        payload,
        signing_input: format!("{}.{}", header_segment, payload_segment),
        signature: signature_segment.to_string(),
    })
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, TokenError> {
    URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|_| TokenError::InvalidTokenEncoding)
}
