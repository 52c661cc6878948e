//! Session Store Port - Interface for persisting per-browser session data.
//!
//! The store only ever sees plain data ([`SessionRecord`]). Live aggregates
//! are rebuilt from it at the start of each request and snapshotted back
//! into it at the end.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::{SessionId, TodoListId};
use crate::domain::todo::TodoListRecord;

/// Errors that can occur during session store operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),

    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
}

/// One-shot message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }
}

/// Everything persisted for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub todo_lists: Vec<TodoListRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_list_id: Option<TodoListId>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flash: Vec<FlashMessage>,
}

/// Port for loading and saving session records.
///
/// # Contract
///
/// - `load` returns `None` for unknown or expired sessions
/// - `save` replaces the whole record and resets its time-to-live
/// - Concurrent saves for one session are last-write-wins
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the record for a session.
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the backend fails or the stored data
    /// cannot be decoded.
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError>;

    /// Save the record for a session, expiring it after `ttl`.
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the record cannot be encoded or written.
    async fn save(
        &self,
        id: &SessionId,
        record: &SessionRecord,
        ttl: Duration,
    ) -> Result<(), SessionStoreError>;
}
