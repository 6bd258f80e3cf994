//! Identity token module
//!
//! This module handles Entra ID identity token verification:
//! - Compact JWT decoding that keeps the signed bytes intact
//! - Process-wide cache of discovery signing keys, keyed by key id
//! - RS256 signature and claim validation

mod decoder;
mod key_cache;
mod validator;


pub use decoder::{decode, DecodedToken, JwtHeader};
pub use key_cache::{KeySetCache, KeySetFetcher};
pub use validator::TokenValidator;
