use actix_web::HttpResponse;

use crate::dto::{DataResponse, MeResponse};
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/auth/me
///
/// Requires `Authorization: Bearer {sessionToken}`; the session itself is
/// resolved by the session middleware.
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(DataResponse::new(MeResponse::from(&auth.session)))
}
