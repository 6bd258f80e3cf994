use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use hub_core::errors::{AuthError, DomainError};
use hub_shared::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::SessionNotFound) => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::AccountNotMapped) => StatusCode::FORBIDDEN,
        DomainError::Auth(AuthError::ConfigurationMissing { .. }) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    let message = match error {
        DomainError::Token(_) => "The identity token is not valid".to_string(),
        DomainError::Auth(AuthError::SessionNotFound) => {
            "Session is missing, expired or revoked".to_string()
        }
        DomainError::Auth(AuthError::AccountNotMapped) => {
            "No account is set up for this identity".to_string()
        }
        DomainError::Auth(AuthError::ConfigurationMissing { key }) => {
            format!("Server configuration missing: {}", key)
        }
        DomainError::ServiceUnavailable { .. } => {
            "A required service is temporarily unavailable".to_string()
        }
        DomainError::Internal { .. } => "An internal error occurred".to_string(),
    };

    if status.is_server_error() {
        log::error!("Domain Error: {}", error);
    } else {
        log::debug!("Request refused: {}", error);
    }

    HttpResponse::build(status).json(ErrorResponse::new(error.error_code(), message))
}

/// 400 response for a body that failed validation
pub fn handle_validation_error(errors: &ValidationErrors) -> HttpResponse {
    log::debug!("Validation failed: {}", errors);

    let fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::INVALID_REQUEST, "Request body failed validation")
            .add_detail("fields", fields),
    )
}

/// Turns JSON extraction failures into the standard 400 body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Malformed JSON body: {}", err);

    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::INVALID_REQUEST,
        "Request body must be a JSON object",
    ));
    InternalError::from_response(err, response).into()
}

/// Wraps a domain error so middleware can return it as an `actix_web::Error`
pub fn domain_error_into_actix(error: DomainError) -> actix_web::Error {
    let response = handle_domain_error(&error);
    InternalError::from_response(error.to_string(), response).into()
}
