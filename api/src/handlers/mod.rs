//! Shared handler helpers

pub mod error;

pub use error::{
    domain_error_into_actix, handle_domain_error, handle_validation_error, json_error_handler,
    status_for,
};
