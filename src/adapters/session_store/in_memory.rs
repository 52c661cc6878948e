//! In-Memory Session Store Adapter
//!
//! Keeps session records in a process-local map with per-entry expiry.
//! Suitable for single-instance deployments, development and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::ports::{SessionRecord, SessionStore, SessionStoreError};

#[derive(Debug, Clone)]
struct StoredSession {
    record: SessionRecord,
    expires_at: Timestamp,
}

impl StoredSession {
    fn is_expired(&self, now: &Timestamp) -> bool {
        !self.expires_at.is_after(now)
    }
}

/// In-memory storage for session records.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, StoredSession>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Drop every expired session and return how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, stored| !stored.is_expired(&now));
        before - sessions.len()
    }

    /// Get the number of stored sessions, expired or not
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        let now = Timestamp::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(id) {
                None => return Ok(None),
                Some(stored) if !stored.is_expired(&now) => {
                    return Ok(Some(stored.record.clone()))
                }
                Some(_) => {}
            }
        }

        self.sessions.write().await.remove(id);
        Ok(None)
    }

    async fn save(
        &self,
        id: &SessionId,
        record: &SessionRecord,
        ttl: Duration,
    ) -> Result<(), SessionStoreError> {
        let stored = StoredSession {
            record: record.clone(),
            expires_at: Timestamp::now().plus_secs(ttl.as_secs()),
        };
        self.sessions.write().await.insert(*id, stored);
        Ok(())
    }
}
