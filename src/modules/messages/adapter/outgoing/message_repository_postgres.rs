use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::messages::application::{
    domain::message::{ContactMessage, NewMessage},
    ports::outgoing::{MessageRepository, MessageRepositoryError},
};

use super::sea_orm_entity::messages;

impl From<messages::Model> for ContactMessage {
    fn from(model: messages::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            created_at: model.created_at.to_utc(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn insert(&self, message: &NewMessage) -> Result<ContactMessage, MessageRepositoryError> {
        let row = messages::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(message.name().to_string()),
            email: Set(message.email().to_string()),
            subject: Set(message.subject().to_string()),
            message: Set(message.message().to_string()),
            // Defaults to now() in the table definition.
            created_at: NotSet,
        };

        let inserted = row
            .insert(&*self.db)
            .await
            .map_err(|e| MessageRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.into())
    }

    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError> {
        let rows = messages::Entity::find()
            .order_by_desc(messages::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| MessageRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }
}

/// Used when no `DATABASE_URL` is configured.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredMessageRepository;

#[async_trait]
impl MessageRepository for UnconfiguredMessageRepository {
    async fn insert(&self, _message: &NewMessage) -> Result<ContactMessage, MessageRepositoryError> {
        Err(MessageRepositoryError::NotConfigured)
    }

    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError> {
        Err(MessageRepositoryError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr, Transaction};

    fn new_message() -> NewMessage {
        NewMessage::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "Logo".to_string(),
            "Need a new logo".to_string(),
        )
        .unwrap()
    }

    fn row(subject: &str, age_minutes: i64) -> messages::Model {
        messages::Model {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: subject.to_string(),
            message: "Need a new logo".to_string(),
            created_at: (Utc::now() - Duration::minutes(age_minutes)).fixed_offset(),
        }
    }

    #[tokio::test]
    async fn insert_writes_exactly_one_row() {
        // Arrange
        let stored = row("Logo", 0);
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![stored.clone()]])
                .into_connection(),
        );
        let repo = MessageRepositoryPostgres::new(Arc::clone(&db));

        // Act
        let result = repo.insert(&new_message()).await.unwrap();

        // Assert
        assert_eq!(result, ContactMessage::from(stored));
        drop(repo);
        let log: Vec<Transaction> = match Arc::try_unwrap(db) {
            Ok(conn) => conn.into_transaction_log(),
            Err(_) => panic!("connection still shared"),
        };
        assert_eq!(log.len(), 1);
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("INSERT INTO"));
        assert!(sql.contains("messages"));
    }

    #[tokio::test]
    async fn insert_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "relation \"messages\" does not exist".into(),
            ))])
            .into_connection();
        let repo = MessageRepositoryPostgres::new(Arc::new(db));

        let result = repo.insert(&new_message()).await;

        assert!(matches!(result, Err(MessageRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn list_returns_rows_in_query_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row("newer", 1), row("older", 10)]])
            .into_connection();
        let repo = MessageRepositoryPostgres::new(Arc::new(db));

        let messages = repo.list_newest_first().await.unwrap();

        let subjects: Vec<&str> = messages.iter().map(|m| m.subject.as_str()).collect();
        assert_eq!(subjects, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn list_orders_by_creation_time_descending() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<messages::Model>::new()])
                .into_connection(),
        );
        let repo = MessageRepositoryPostgres::new(Arc::clone(&db));

        repo.list_newest_first().await.unwrap();

        drop(repo);
        let log = match Arc::try_unwrap(db) {
            Ok(conn) => conn.into_transaction_log(),
            Err(_) => panic!("connection still shared"),
        };
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("ORDER BY"));
        assert!(sql.contains("DESC"));
    }

    #[tokio::test]
    async fn unconfigured_repository_reports_not_configured() {
        let repo = UnconfiguredMessageRepository;

        assert_eq!(
            repo.insert(&new_message()).await,
            Err(MessageRepositoryError::NotConfigured)
        );
        assert_eq!(
            repo.list_newest_first().await,
            Err(MessageRepositoryError::NotConfigured)
        );
    }
}
