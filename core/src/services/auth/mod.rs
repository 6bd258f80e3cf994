//! Sign-in orchestration
//!
//! Ties the token validator, account resolver and session service together:
//! - Exchange of an Entra ID identity token for a session
//! - Session lookup for authenticated requests
//! - Logout

mod config;
mod service;


pub use config::AuthServiceConfig;
pub use service::AuthService;
