use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::modules::{
    admin::application::{
        domain::draft::ContentDraft,
        ports::incoming::use_cases::{
            DraftChange, DraftEdit, DraftEditResult, DraftWorkspaceError, DraftWorkspaceUseCase,
        },
    },
    content::application::{
        domain::{entities::ContentDocument, ids::IdGenerator},
        ports::incoming::use_cases::{CommitOutcome, ContentSync},
    },
};

pub struct DraftWorkspaceService {
    content: Arc<dyn ContentSync>,
    ids: Arc<IdGenerator>,
    drafts: Mutex<HashMap<String, ContentDraft>>,
}

impl DraftWorkspaceService {
    pub fn new(content: Arc<dyn ContentSync>, ids: Arc<IdGenerator>) -> Self {
        Self {
            content,
            ids,
            drafts: Mutex::new(HashMap::new()),
        }
    }

    async fn fresh_draft(&self) -> ContentDraft {
        ContentDraft::new(self.content.snapshot().await, Arc::clone(&self.ids))
    }
}

fn apply(draft: &mut ContentDraft, edit: DraftEdit) -> Result<DraftChange, DraftWorkspaceError> {
    let change = match edit {
        DraftEdit::SetField { path, value } => {
            draft.set_field(&path, value)?;
            DraftChange::FieldSet
        }
        DraftEdit::AddItem(collection) => DraftChange::ItemAdded {
            id: draft.add_item(collection),
        },
        DraftEdit::RemoveItem { collection, id } => DraftChange::ItemRemoved {
            removed: draft.remove_item(collection, id),
        },
        DraftEdit::AddServiceItem { service } => DraftChange::ServiceItemAdded {
            index: draft.add_service_item(&service)?,
        },
        DraftEdit::UpdateServiceItem {
            service,
            index,
            edit,
        } => {
            draft.update_service_item(&service, index, edit)?;
            DraftChange::ServiceItemUpdated
        }
        DraftEdit::RemoveServiceItem { service, index } => {
            draft.remove_service_item(&service, index)?;
            DraftChange::ServiceItemRemoved
        }
    };

    Ok(change)
}

#[async_trait]
impl DraftWorkspaceUseCase for DraftWorkspaceService {
    async fn open(&self, admin: &str) -> ContentDocument {
        let draft = self.fresh_draft().await;
        let document = draft.document().clone();
        self.drafts.lock().await.insert(admin.to_string(), draft);
        document
    }

    async fn current(&self, admin: &str) -> ContentDocument {
        if let Some(draft) = self.drafts.lock().await.get(admin) {
            return draft.document().clone();
        }
        self.open(admin).await
    }

    async fn edit(
        &self,
        admin: &str,
        edit: DraftEdit,
    ) -> Result<DraftEditResult, DraftWorkspaceError> {
        let mut drafts = self.drafts.lock().await;
        if !drafts.contains_key(admin) {
            let fresh = self.fresh_draft().await;
            drafts.insert(admin.to_string(), fresh);
        }
        let draft = drafts
            .get_mut(admin)
            .ok_or(DraftWorkspaceError::NoOpenDraft)?;

        let change = apply(draft, edit)?;

        Ok(DraftEditResult {
            change,
            draft: draft.document().clone(),
        })
    }

    /// The drafts stay locked until the commit settles, so an edit can never
    /// land between the snapshot and the close.
    async fn commit(&self, admin: &str) -> Result<CommitOutcome, DraftWorkspaceError> {
        let mut drafts = self.drafts.lock().await;
        let document = drafts
            .get(admin)
            .map(|d| d.document().clone())
            .ok_or(DraftWorkspaceError::NoOpenDraft)?;

        let outcome = self.content.commit(document).await.map_err(|e| {
            warn!(admin, error = %e, "Draft commit failed, keeping draft open");
            DraftWorkspaceError::from(e)
        })?;

        drafts.remove(admin);
        info!(admin, synced = outcome.is_synced(), "Draft committed");
        Ok(outcome)
    }

    async fn discard(&self, admin: &str) -> bool {
        self.drafts.lock().await.remove(admin).is_some()
    }
}
