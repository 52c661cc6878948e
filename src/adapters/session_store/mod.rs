//! Session Store Adapters
//!
//! Implementations of the SessionStore port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - process-local map with expiry (development, single instance)
//! - **RedisSessionStore** - JSON records under `todos:session:<id>` with Redis TTLs
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::session_store::{InMemorySessionStore, RedisSessionStore};
//!
//! let store = RedisSessionStore::connect("redis://localhost:6379").await?;
//! let store = InMemorySessionStore::new();
//! ```

mod in_memory;
mod redis;

pub use self::in_memory::InMemorySessionStore;
pub use self::redis::{RedisSessionStore, DEFAULT_KEY_PREFIX};
