use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{DataResponse, ExchangeRequest, SessionResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_error};

use hub_core::repositories::AccountRepository;
use hub_core::services::{KeySetFetcher, SessionStore};

use super::AppState;

/// Handler for POST /api/auth/microsoft/exchange
///
/// Validates the Entra ID identity token, maps it onto an account and
/// issues a session.
///
/// # Request Body
///
/// ```json
/// { "idToken": "eyJ..." }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "data": {
///         "sessionToken": "9f2c...",
///         "expiresAt": "2026-01-01T12:00:00Z",
///         "user": { "userId": 7, "companyId": 3, "username": "...", ... },
///         "roles": ["admin"]
///     }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or blank `idToken`
/// - 401 Unauthorized: Malformed or invalid identity token
/// - 403 Forbidden: No account is mapped to the identity
/// - 500 Internal Server Error: Client id not configured
/// - 503 Service Unavailable: Account database or session store unreachable
pub async fn exchange<F, A, S>(
    state: web::Data<AppState<F, A, S>>,
    request: web::Json<ExchangeRequest>,
) -> HttpResponse
where
    F: KeySetFetcher + 'static,
    A: AccountRepository + 'static,
    S: SessionStore + 'static,
{
    let request = request.into_inner().trimmed();
    if let Err(errors) = request.validate() {
        return handle_validation_error(&errors);
    }

    match state.auth_service.exchange(&request.id_token).await {
        Ok(session) => HttpResponse::Ok().json(DataResponse::new(SessionResponse::from(session))),
        Err(error) => handle_domain_error(&error),
    }
}
