//! HTTP adapters - axum router, session middleware and todo list endpoints.

pub mod error;
pub mod middleware;
mod router;
pub mod todo_lists;

pub use error::ErrorResponse;
pub use middleware::{
    session_middleware, ActiveSession, CookieSigner, SessionCookie, SessionHandle, SessionState,
};
pub use router::build_router;
pub use todo_lists::{todo_list_routes, TodoHandlers};
