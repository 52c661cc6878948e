//! Redis-backed session store for multi-instance deployments.
//!
//! Each session is one string key holding the JSON-encoded record, written
//! with `SET .. EX` so Redis handles expiry.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::time::Duration;

use crate::domain::foundation::SessionId;
use crate::ports::{SessionRecord, SessionStore, SessionStoreError};

/// Default key prefix for session entries.
pub const DEFAULT_KEY_PREFIX: &str = "todos:session:";

/// Redis-backed session store.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: MultiplexedConnection,
    key_prefix: String,
}

impl RedisSessionStore {
    /// Wrap an existing connection.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self {
            conn,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    /// Open a multiplexed connection to `url`.
    ///
    /// # Errors
    /// Returns `SessionStoreError::Unavailable` if the URL is invalid or the
    /// server cannot be reached.
    pub async fn connect(url: &str) -> Result<Self, SessionStoreError> {
        let client = redis::Client::open(url).map_err(unavailable)?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(unavailable)?;
        Ok(Self::new(conn))
    }

    /// Set the key prefix.
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    fn key_for(&self, id: &SessionId) -> String {
        session_key(&self.key_prefix, id)
    }
}

fn session_key(prefix: &str, id: &SessionId) -> String {
    format!("{}{}", prefix, id)
}

fn unavailable(e: redis::RedisError) -> SessionStoreError {
    SessionStoreError::Unavailable(e.to_string())
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        let mut conn = self.conn.clone();

        let payload: Option<String> = conn.get(self.key_for(id)).await.map_err(unavailable)?;

        payload
            .map(|json| {
                serde_json::from_str(&json)
                    .map_err(|e| SessionStoreError::DeserializationFailed(e.to_string()))
            })
            .transpose()
    }

    async fn save(
        &self,
        id: &SessionId,
        record: &SessionRecord,
        ttl: Duration,
    ) -> Result<(), SessionStoreError> {
        let json = serde_json::to_string(record)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;

        let mut conn = self.conn.clone();

        // EX must be at least 1
        redis::cmd("SET")
            .arg(self.key_for(id))
            .arg(json)
            .arg("EX")
            .arg(ttl.as_secs().max(1))
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_key_uses_prefix() {
        let id: SessionId = "6f1c9a52-44a8-4b8e-9a0f-3f3c1b2a9d10".parse().unwrap();
        assert_eq!(
            session_key(DEFAULT_KEY_PREFIX, &id),
            "todos:session:6f1c9a52-44a8-4b8e-9a0f-3f3c1b2a9d10"
        );
    }

    #[tokio::test]
    async fn connect_rejects_malformed_url() {
        let result = RedisSessionStore::connect("not-a-redis-url").await;
        assert!(matches!(result, Err(SessionStoreError::Unavailable(_))));
    }
}
