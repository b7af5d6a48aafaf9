use async_trait::async_trait;

use crate::modules::oauth::application::domain::session::SessionData;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),

    #[error("Session data could not be encoded: {0}")]
    Serialization(String),
}

/// Keyed storage for visitor sessions. Entries expire after `ttl_seconds`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, session_id: &str) -> Result<Option<SessionData>, SessionStoreError>;

    async fn save(
        &self,
        session_id: &str,
        data: &SessionData,
        ttl_seconds: i64,
    ) -> Result<(), SessionStoreError>;

    async fn destroy(&self, session_id: &str) -> Result<(), SessionStoreError>;
}
