use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::oauth::application::{
    domain::session::SessionData,
    ports::outgoing::{SessionStore, SessionStoreError},
};

/// Process-local sessions, used when no Redis URL is configured.
#[derive(Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, (SessionData, DateTime<Utc>)>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, session_id: &str) -> Result<Option<SessionData>, SessionStoreError> {
        let now = Utc::now();
        {
            let entries = self.entries.read().await;
            match entries.get(session_id) {
                Some((data, expires_at)) if *expires_at > now => return Ok(Some(data.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // expired
        self.entries.write().await.remove(session_id);
        Ok(None)
    }

    async fn save(
        &self,
        session_id: &str,
        data: &SessionData,
        ttl_seconds: i64,
    ) -> Result<(), SessionStoreError> {
        let expires_at = Utc::now() + Duration::seconds(ttl_seconds);
        let mut entries = self.entries.write().await;
        entries.retain(|_, (_, exp)| *exp > Utc::now());
        entries.insert(session_id.to_string(), (data.clone(), expires_at));
        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> Result<(), SessionStoreError> {
        self.entries.write().await.remove(session_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_session() -> SessionData {
        let mut data = SessionData::default();
        data.flags.is_admin = true;
        data
    }

    #[tokio::test]
    async fn saved_session_is_loaded_back() {
        let store = InMemorySessionStore::new();

        store.save("sid-1", &admin_session(), 60).await.unwrap();

        assert_eq!(store.load("sid-1").await.unwrap(), Some(admin_session()));
    }

    #[tokio::test]
    async fn unknown_session_is_none() {
        let store = InMemorySessionStore::new();

        assert_eq!(store.load("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn expired_session_is_dropped() {
        let store = InMemorySessionStore::new();

        store.save("sid-1", &admin_session(), -1).await.unwrap();

        assert_eq!(store.load("sid-1").await.unwrap(), None);
        assert!(store.entries.read().await.is_empty());
    }

    #[tokio::test]
    async fn destroy_removes_session() {
        let store = InMemorySessionStore::new();
        store.save("sid-1", &admin_session(), 60).await.unwrap();

        store.destroy("sid-1").await.unwrap();

        assert_eq!(store.load("sid-1").await.unwrap(), None);
    }
}
