//! Response envelope types

pub mod response;

pub use response::{DataResponse, HealthResponse, HealthStatus, OkResponse};
