//! Authentication route handlers
//!
//! - `POST /api/auth/microsoft/exchange` trades an Entra ID identity token for a session
//! - `GET /api/auth/me` describes the current session
//! - `POST /api/auth/logout` ends the current session

pub mod exchange;
pub mod logout;
pub mod me;

use std::sync::Arc;

use hub_core::repositories::AccountRepository;
use hub_core::services::{AuthService, KeySetFetcher, SessionStore};

/// Application state that holds shared services
pub struct AppState<F, A, S>
where
    F: KeySetFetcher,
    A: AccountRepository,
    S: SessionStore,
{
    pub auth_service: Arc<AuthService<F, A, S>>,
}

impl<F, A, S> AppState<F, A, S>
where
    F: KeySetFetcher,
    A: AccountRepository,
    S: SessionStore,
{
    pub fn new(auth_service: Arc<AuthService<F, A, S>>) -> Self {
        Self { auth_service }
    }
}
