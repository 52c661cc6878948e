//! Session middleware and extractor for axum.
//!
//! ```text
//! Request → session_middleware → loads record, rebuilds TodoSession,
//!                                injects SessionHandle into extensions
//!                                      ↓
//!                              Handler → ActiveSession extractor
//!                                      ↓
//!           session_middleware → snapshots TodoSession, saves record,
//!                                sets the signed cookie
//! ```
//!
//! A missing, forged or expired cookie starts a fresh session. The store is
//! written after every request, which also refreshes its time-to-live.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::SET_COOKIE, request::Parts, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::{Mutex, MutexGuard};

use crate::adapters::http::error::ErrorResponse;
use crate::application::TodoSession;
use crate::domain::foundation::SessionId;
use crate::domain::todo::fixtures::demo_todo_lists;
use crate::ports::{SessionStore, SessionStoreError};

use super::cookie::{CookieSigner, SessionCookie};

/// Middleware state: where sessions live and how the cookie looks.
#[derive(Clone)]
pub struct SessionState {
    store: Arc<dyn SessionStore>,
    signer: CookieSigner,
    cookie: SessionCookie,
    seed_demo_data: bool,
}

impl SessionState {
    pub fn new(store: Arc<dyn SessionStore>, signer: CookieSigner, cookie: SessionCookie) -> Self {
        Self {
            store,
            signer,
            cookie,
            seed_demo_data: false,
        }
    }

    /// Start fresh sessions with the demo lists instead of nothing.
    pub fn with_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    fn fresh_session(&self) -> TodoSession {
        if self.seed_demo_data {
            TodoSession::with_todo_lists(demo_todo_lists())
        } else {
            TodoSession::new()
        }
    }

    /// Resolve the request's session, falling back to a fresh one.
    async fn open(&self, headers: &HeaderMap) -> Result<(SessionId, TodoSession), SessionStoreError> {
        let presented = self
            .cookie
            .read(headers)
            .and_then(|value| self.signer.verify(value));

        let Some(id) = presented else {
            return Ok((SessionId::new(), self.fresh_session()));
        };

        match self.store.load(&id).await {
            Ok(Some(record)) => Ok((id, TodoSession::from_record(record))),
            Ok(None) => {
                tracing::debug!(session_id = %id, "Session expired or unknown, starting fresh");
                Ok((SessionId::new(), self.fresh_session()))
            }
            Err(SessionStoreError::DeserializationFailed(reason)) => {
                tracing::warn!(session_id = %id, %reason, "Discarding unreadable session");
                Ok((SessionId::new(), self.fresh_session()))
            }
            Err(e) => Err(e),
        }
    }
}

/// Shared handle to the live session of one request.
#[derive(Clone)]
pub struct SessionHandle(Arc<Mutex<TodoSession>>);

impl SessionHandle {
    pub fn new(session: TodoSession) -> Self {
        Self(Arc::new(Mutex::new(session)))
    }

    pub async fn lock(&self) -> MutexGuard<'_, TodoSession> {
        self.0.lock().await
    }
}

/// Loads the session before the handler runs and persists it afterwards.
pub async fn session_middleware(
    State(state): State<SessionState>,
    mut request: Request,
    next: Next,
) -> Response {
    let (id, session) = match state.open(request.headers()).await {
        Ok(opened) => opened,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load session");
            return ErrorResponse::session_store().with_status(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let handle = SessionHandle::new(session);
    request.extensions_mut().insert(handle.clone());

    let mut response = next.run(request).await;

    let record = handle.lock().await.to_record();
    if let Err(e) = state.store.save(&id, &record, state.cookie.max_age).await {
        tracing::error!(session_id = %id, error = %e, "Failed to save session");
        return ErrorResponse::session_store().with_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    match HeaderValue::from_str(&state.cookie.render(&state.signer.sign(&id))) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => tracing::error!(error = %e, "Session cookie is not a valid header value"),
    }

    response
}

/// Extractor for the live session.
///
/// Fails with 500 if the session middleware is not installed on the route.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(ActiveSession(handle): ActiveSession) -> impl IntoResponse {
///     let session = handle.lock().await;
///     format!("{} lists", session.todo_lists().len())
/// }
/// ```
#[derive(Clone)]
pub struct ActiveSession(pub SessionHandle);

#[async_trait]
impl<S> FromRequestParts<S> for ActiveSession
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionHandle>()
            .cloned()
            .map(ActiveSession)
            .ok_or(SessionRejection::MissingMiddleware)
    }
}

/// Rejection type for the session extractor.
#[derive(Debug, Clone)]
pub enum SessionRejection {
    MissingMiddleware,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            SessionRejection::MissingMiddleware => {
                tracing::error!("ActiveSession used on a route without session_middleware");
                ErrorResponse::internal("Session unavailable.")
                    .with_status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
