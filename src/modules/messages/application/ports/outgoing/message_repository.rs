use async_trait::async_trait;

use crate::modules::messages::application::domain::message::{ContactMessage, NewMessage};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Remote database is not configured")]
    NotConfigured,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Append-only store of contact messages.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert one row; the timestamp is assigned by the database.
    async fn insert(&self, message: &NewMessage) -> Result<ContactMessage, MessageRepositoryError>;

    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError>;
}
