//! Session authentication middleware for protecting API endpoints.
//!
//! Extracts the opaque session token from the `Authorization: Bearer`
//! header, looks the session up, and injects an [`AuthContext`] into the
//! request. Requests without a live session get the standard 401 body.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
};

use hub_core::{
    domain::entities::session::Session,
    errors::{AuthError, DomainError},
    repositories::AccountRepository,
    services::{AuthService, KeySetFetcher, SessionStore},
};

use crate::handlers::error::{domain_error_into_actix, handle_domain_error};

/// Session of the authenticated caller, injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub session: Session,
}

/// Looks up live sessions by token.
///
/// Lets the middleware stay independent of the auth service's type
/// parameters; register it as `web::Data<dyn SessionLookup>`.
pub trait SessionLookup: Send + Sync {
    fn lookup<'a>(&'a self, token: &'a str) -> LocalBoxFuture<'a, Result<Session, DomainError>>;
}

impl<F, A, S> SessionLookup for AuthService<F, A, S>
where
    F: KeySetFetcher,
    A: AccountRepository,
    S: SessionStore,
{
    fn lookup<'a>(&'a self, token: &'a str) -> LocalBoxFuture<'a, Result<Session, DomainError>> {
        Box::pin(self.current_session(token))
    }
}

/// Session authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionAuth;

impl SessionAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Session authentication middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token = extract_bearer_token(req.headers());
        let sessions = req.app_data::<web::Data<dyn SessionLookup>>().cloned();

        Box::pin(async move {
            let lookup = match (token, sessions) {
                (Some(token), Some(sessions)) => sessions.lookup(&token).await,
                (None, _) => Err(AuthError::SessionNotFound.into()),
                (Some(_), None) => {
                    log::error!("Session lookup is not registered in app data");
                    Err(DomainError::Internal {
                        message: "session lookup not configured".to_string(),
                    })
                }
            };

            match lookup {
                Ok(session) => {
                    req.extensions_mut().insert(AuthContext { session });
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(error) => {
                    let response = handle_domain_error(&error);
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Extracts the bearer token from an Authorization header.
///
/// The scheme is matched case-insensitively and surrounding whitespace is
/// ignored. Returns `None` for other schemes or an empty token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(char::is_whitespace)?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token.to_string())
    } else {
        None
    }
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| domain_error_into_actix(AuthError::SessionNotFound.into()));

        ready(result)
    }
}
