use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::modules::oauth::application::{
    domain::session::SessionData,
    ports::outgoing::{SessionStore, SessionStoreError},
};

/// Redis-backed sessions.
///
/// ## Redis data model
/// ```text
/// portfolio:session:{sha256(session_id)} -> JSON(SessionData)
/// ```
/// The raw id only ever lives in the signed cookie; Redis TTL handles expiry.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Arc<Pool>,
}

impl RedisSessionStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn session_key(session_id: &str) -> String {
        let digest = Sha256::digest(session_id.as_bytes());
        format!("portfolio:session:{digest:x}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionStoreError::Unavailable(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, session_id: &str) -> Result<Option<SessionData>, SessionStoreError> {
        let mut conn = self.get_conn().await?;

        let raw: Option<String> = conn
            .get(Self::session_key(session_id))
            .await
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))?;

        raw.map(|json| {
            serde_json::from_str(&json).map_err(|e| SessionStoreError::Serialization(e.to_string()))
        })
        .transpose()
    }

    async fn save(
        &self,
        session_id: &str,
        data: &SessionData,
        ttl_seconds: i64,
    ) -> Result<(), SessionStoreError> {
        let ttl = u64::try_from(ttl_seconds)
            .ok()
            .filter(|t| *t > 0)
            .ok_or_else(|| SessionStoreError::Unavailable("session TTL must be positive".into()))?;

        let json =
            serde_json::to_string(data).map_err(|e| SessionStoreError::Serialization(e.to_string()))?;

        let mut conn = self.get_conn().await?;
        conn.set_ex::<_, _, ()>(Self::session_key(session_id), json, ttl)
            .await
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))
    }

    async fn destroy(&self, session_id: &str) -> Result<(), SessionStoreError> {
        let mut conn = self.get_conn().await?;
        conn.del::<_, ()>(Self::session_key(session_id))
            .await
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))
    }
}
