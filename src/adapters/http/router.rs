//! Application router assembly.

use std::time::Duration;

use axum::{middleware, response::Redirect, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::middleware::{session_middleware, SessionState};
use super::todo_lists::{todo_list_routes, TodoHandlers};

/// Build the full router: todo list routes behind the session middleware,
/// wrapped in request tracing and a timeout.
pub fn build_router(
    handlers: TodoHandlers,
    sessions: SessionState,
    request_timeout: Duration,
) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/lists") }))
        .merge(todo_list_routes(handlers))
        .layer(middleware::from_fn_with_state(sessions, session_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
