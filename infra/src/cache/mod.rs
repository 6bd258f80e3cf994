//! Cache module for Redis-backed session storage
//!
//! Provides the Redis client with connection retry logic and the session store
//! that lets several API instances share sessions.

pub mod redis_client;
pub mod session_store;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use session_store::RedisSessionStore;

// Re-export commonly used types
pub use hub_shared::config::CacheConfig;
