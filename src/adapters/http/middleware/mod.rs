//! HTTP middleware for axum.
//!
//! - `cookie` - signing and parsing of the session cookie
//! - `session` - loads the session before a handler runs and saves it after

pub mod cookie;
pub mod session;

pub use cookie::{CookieSigner, SessionCookie};
pub use session::{session_middleware, ActiveSession, SessionHandle, SessionRejection, SessionState};
