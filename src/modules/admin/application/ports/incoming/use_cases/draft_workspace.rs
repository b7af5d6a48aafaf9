use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::modules::{
    admin::application::domain::draft::{Collection, DraftError},
    content::application::{
        domain::entities::{ContentDocument, ServiceItemEdit},
        ports::incoming::use_cases::{CommitError, CommitOutcome},
    },
};

/// One mutation of an admin's draft.
#[derive(Debug, Clone)]
pub enum DraftEdit {
    SetField { path: String, value: Value },
    AddItem(Collection),
    RemoveItem { collection: Collection, id: i64 },
    AddServiceItem { service: String },
    UpdateServiceItem {
        service: String,
        index: usize,
        edit: ServiceItemEdit,
    },
    RemoveServiceItem { service: String, index: usize },
}

/// What an edit did, for the caller to report back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DraftChange {
    FieldSet,
    ItemAdded { id: i64 },
    ItemRemoved { removed: bool },
    ServiceItemAdded { index: usize },
    ServiceItemUpdated,
    ServiceItemRemoved,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftEditResult {
    pub change: DraftChange,
    pub draft: ContentDocument,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftWorkspaceError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error("No draft is open")]
    NoOpenDraft,

    #[error(transparent)]
    Commit(#[from] CommitError),
}

/// Per-admin drafts of the content document.
#[async_trait]
pub trait DraftWorkspaceUseCase: Send + Sync {
    /// Start over from the committed document, dropping any open draft.
    async fn open(&self, admin: &str) -> ContentDocument;

    /// The open draft, opening one first if needed.
    async fn current(&self, admin: &str) -> ContentDocument;

    async fn edit(&self, admin: &str, edit: DraftEdit)
        -> Result<DraftEditResult, DraftWorkspaceError>;

    /// Commit the open draft. The draft is closed only when the local write
    /// succeeded.
    async fn commit(&self, admin: &str) -> Result<CommitOutcome, DraftWorkspaceError>;

    /// Returns `true` if a draft was open.
    async fn discard(&self, admin: &str) -> bool;
}
