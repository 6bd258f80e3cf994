//! CORS middleware configuration for the sign-in and session endpoints.
//!
//! Browser clients call the exchange endpoint directly after the Microsoft
//! redirect, so the configuration is environment-aware: permissive in
//! development and limited to `ALLOWED_ORIGINS` elsewhere.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

use hub_shared::config::Environment;

const DEFAULT_MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance configured for `environment`.
///
/// # Environment Variables
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (non-development only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors(environment: Environment) -> Cors {
    let max_age = parse_max_age(env::var("CORS_MAX_AGE").ok().as_deref());

    if environment.is_development() {
        create_development_cors(max_age)
    } else {
        let origins = allowed_origins(env::var("ALLOWED_ORIGINS").ok().as_deref());
        create_restricted_cors(&origins, max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
}

fn create_restricted_cors(origins: &[String], max_age: usize) -> Cors {
    log::info!("Configuring CORS with {} allowed origin(s)", origins.len());

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(max_age);

    for origin in origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}

/// Splits a comma-separated origin list, dropping blanks
pub fn allowed_origins(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

fn parse_max_age(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_MAX_AGE)
}
