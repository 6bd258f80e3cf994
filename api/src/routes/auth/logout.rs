use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::OkResponse;
use crate::middleware::auth::extract_bearer_token;

use hub_core::repositories::AccountRepository;
use hub_core::services::{KeySetFetcher, SessionStore};

use super::AppState;

/// Handler for POST /api/auth/logout
///
/// Deletes the session named by the bearer token. Idempotent: a missing,
/// unknown or already-deleted token still yields `{"ok": true}`.
pub async fn logout<F, A, S>(
    req: HttpRequest,
    state: web::Data<AppState<F, A, S>>,
) -> HttpResponse
where
    F: KeySetFetcher + 'static,
    A: AccountRepository + 'static,
    S: SessionStore + 'static,
{
    let token = extract_bearer_token(req.headers());
    state.auth_service.logout(token.as_deref()).await;

    HttpResponse::Ok().json(OkResponse::ok())
}
