use async_trait::async_trait;

use crate::modules::content::application::domain::entities::ContentDocument;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteStoreError {
    #[error("Remote store is not configured")]
    NotConfigured,

    #[error("No content stored remotely")]
    NotFound,

    #[error("Stored content is malformed: {0}")]
    Malformed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Hosted copy of the whole content document, kept in a single row.
#[async_trait]
pub trait RemoteContentStore: Send + Sync {
    async fn fetch_content(&self) -> Result<ContentDocument, RemoteStoreError>;

    /// Insert or replace the stored document. Calling twice with the same
    /// document leaves the same remote state as calling once.
    async fn upsert_content(&self, document: &ContentDocument) -> Result<(), RemoteStoreError>;
}
