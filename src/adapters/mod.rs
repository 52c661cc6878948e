//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum router, session middleware and endpoints
//! - `session_store` - in-memory and Redis session stores
//! - `validation` - title rules behind the `TitleValidator` port

pub mod http;
pub mod session_store;
pub mod validation;

pub use session_store::{InMemorySessionStore, RedisSessionStore};
pub use validation::TitleRules;
