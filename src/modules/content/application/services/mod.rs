mod content_sync_service;
mod local_content_store;

pub use content_sync_service::ContentSyncService;
pub use local_content_store::*;
