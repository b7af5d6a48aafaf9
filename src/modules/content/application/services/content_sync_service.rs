use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::modules::content::application::{
    domain::entities::ContentDocument,
    ports::{
        incoming::use_cases::{CommitError, CommitOutcome, ContentSync, LoadOutcome},
        outgoing::RemoteContentStore,
    },
    services::LocalContentStore,
};

/// Keeps the served document in memory and mirrors it to the local and
/// remote stores.
pub struct ContentSyncService {
    local: LocalContentStore,
    remote: Arc<dyn RemoteContentStore>,
    current: RwLock<ContentDocument>,
}

impl ContentSyncService {
    /// Starts from whatever the local store holds (defaults per missing key).
    pub fn new(local: LocalContentStore, remote: Arc<dyn RemoteContentStore>) -> Self {
        let current = local.load_document();
        Self {
            local,
            remote,
            current: RwLock::new(current),
        }
    }
}

#[async_trait]
impl ContentSync for ContentSyncService {
    async fn load(&self) -> LoadOutcome {
        match self.remote.fetch_content().await {
            Ok(document) => LoadOutcome::Remote(document),
            Err(e) => {
                warn!(error = %e, "Remote content unavailable, keeping current document");
                LoadOutcome::KeepCurrent(e.to_string())
            }
        }
    }

    async fn refresh(&self) -> LoadOutcome {
        let outcome = self.load().await;

        if let LoadOutcome::Remote(document) = &outcome {
            let mut current = self.current.write().await;
            if let Err(e) = self.local.save_document(document) {
                warn!(error = %e, "Failed to mirror remote content locally");
            }
            *current = document.clone();
            info!("Content refreshed from remote store");
        }

        outcome
    }

    async fn snapshot(&self) -> ContentDocument {
        self.current.read().await.clone()
    }

    async fn commit(&self, document: ContentDocument) -> Result<CommitOutcome, CommitError> {
        {
            let mut current = self.current.write().await;
            self.local
                .save_document(&document)
                .map_err(|e| CommitError::LocalWriteFailed(e.to_string()))?;
            *current = document.clone();
        }

        match self.remote.upsert_content(&document).await {
            Ok(()) => {
                info!("Content saved and synced");
                Ok(CommitOutcome::Synced)
            }
            Err(e) => {
                warn!(error = %e, "Content saved locally, remote sync failed");
                Ok(CommitOutcome::SavedLocally {
                    reason: e.to_string(),
                })
            }
        }
    }
}
