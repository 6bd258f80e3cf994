//! Session issuance and lookup
//!
//! - `SessionStore`: token-keyed storage with expiry enforced on read
//! - `InMemorySessionStore`: process-local store, swept lazily
//! - `SessionService`: issues opaque tokens and applies the session lifetime

mod memory;
mod service;
mod store;


pub use memory::InMemorySessionStore;
pub use service::{generate_session_token, SessionService};
pub use store::SessionStore;
