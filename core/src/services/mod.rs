//! Business services containing domain logic and use cases.

pub mod account;
pub mod auth;
pub mod clock;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use account::AccountResolver;
pub use auth::{AuthService, AuthServiceConfig};
pub use clock::{Clock, ManualClock, SystemClock};
pub use session::{InMemorySessionStore, SessionService, SessionStore};
pub use token::{KeySetCache, KeySetFetcher, TokenValidator};
