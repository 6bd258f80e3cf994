//! Request and response bodies

pub mod auth;

pub use auth::{ExchangeRequest, MeResponse, SessionResponse};
pub use hub_shared::{DataResponse, ErrorResponse, OkResponse};
