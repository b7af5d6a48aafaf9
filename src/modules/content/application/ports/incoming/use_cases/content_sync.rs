use async_trait::async_trait;

use crate::modules::content::application::domain::entities::ContentDocument;

//
// ──────────────────────────────────────────────────────────
// Outcomes
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The hosted copy was read and parsed.
    Remote(ContentDocument),
    /// Remote was unavailable; callers keep whatever they already show.
    KeepCurrent(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Synced,
    /// Local write succeeded, remote write did not. Nothing is rolled back.
    SavedLocally { reason: String },
}

impl CommitOutcome {
    pub fn is_synced(&self) -> bool {
        matches!(self, CommitOutcome::Synced)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
    #[error("Local write failed: {0}")]
    LocalWriteFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ContentSync: Send + Sync {
    /// Fetch the hosted document. Never fails; failures become `KeepCurrent`.
    async fn load(&self) -> LoadOutcome;

    /// `load()` and, on success, adopt the remote document locally.
    async fn refresh(&self) -> LoadOutcome;

    /// The document currently served to visitors.
    async fn snapshot(&self) -> ContentDocument;

    /// Write locally, then best-effort remotely.
    async fn commit(&self, document: ContentDocument) -> Result<CommitOutcome, CommitError>;
}
