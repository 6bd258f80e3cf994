//! Application factory
//!
//! Wires the auth routes, session middleware, CORS and the JSON error
//! handler into an Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpResponse,
};

use hub_core::repositories::AccountRepository;
use hub_core::services::{KeySetFetcher, SessionStore};
use hub_shared::{error_codes, Environment, ErrorResponse, HealthResponse};

use crate::handlers::json_error_handler;
use crate::middleware::{create_cors, SessionAuth, SessionLookup};
use crate::routes::auth::{exchange::exchange, logout::logout, me::me, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<F, A, S>(
    app_state: web::Data<AppState<F, A, S>>,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    F: KeySetFetcher + 'static,
    A: AccountRepository + 'static,
    S: SessionStore + 'static,
{
    let sessions: Arc<dyn SessionLookup> = app_state.auth_service.clone();

    App::new()
        .app_data(app_state)
        .app_data(web::Data::from(sessions))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(create_cors(environment))
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/auth")
                .route("/microsoft/exchange", web::post().to(exchange::<F, A, S>))
                .service(
                    web::resource("/me")
                        .wrap(SessionAuth::new())
                        .route(web::get().to(me)),
                )
                .route("/logout", web::post().to(logout::<F, A, S>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "hub-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
