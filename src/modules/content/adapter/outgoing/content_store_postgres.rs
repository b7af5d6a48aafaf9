use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::modules::content::application::{
    domain::entities::ContentDocument,
    ports::outgoing::{RemoteContentStore, RemoteStoreError},
};

use super::sea_orm_entity::portfolio::{self, PORTFOLIO_ROW_ID};

#[derive(Debug, Clone)]
pub struct ContentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RemoteContentStore for ContentStorePostgres {
    async fn fetch_content(&self) -> Result<ContentDocument, RemoteStoreError> {
        let row = portfolio::Entity::find_by_id(PORTFOLIO_ROW_ID)
            .one(&*self.db)
            .await
            .map_err(|e| RemoteStoreError::DatabaseError(e.to_string()))?
            .ok_or(RemoteStoreError::NotFound)?;

        serde_json::from_value(row.content).map_err(|e| RemoteStoreError::Malformed(e.to_string()))
    }

    async fn upsert_content(&self, document: &ContentDocument) -> Result<(), RemoteStoreError> {
        let content =
            serde_json::to_value(document).map_err(|e| RemoteStoreError::Malformed(e.to_string()))?;

        let row = portfolio::ActiveModel {
            id: Set(PORTFOLIO_ROW_ID),
            content: Set(content),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        portfolio::Entity::insert(row)
            .on_conflict(
                OnConflict::column(portfolio::Column::Id)
                    .update_columns([portfolio::Column::Content, portfolio::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| RemoteStoreError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// Used when no `DATABASE_URL` is configured.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredContentStore;

#[async_trait]
impl RemoteContentStore for UnconfiguredContentStore {
    async fn fetch_content(&self) -> Result<ContentDocument, RemoteStoreError> {
        Err(RemoteStoreError::NotConfigured)
    }

    async fn upsert_content(&self, _document: &ContentDocument) -> Result<(), RemoteStoreError> {
        Err(RemoteStoreError::NotConfigured)
    }
}
