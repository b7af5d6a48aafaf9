use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::modules::messages::application::{
    domain::message::{ContactMessage, NewMessage},
    ports::{
        incoming::use_cases::{SendMessageError, SendMessageUseCase},
        outgoing::{MessageRepository, MessageRepositoryError},
    },
};

pub struct SendMessageService {
    repository: Arc<dyn MessageRepository>,
}

impl SendMessageService {
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SendMessageUseCase for SendMessageService {
    async fn execute(&self, message: NewMessage) -> Result<ContactMessage, SendMessageError> {
        let stored = self.repository.insert(&message).await.map_err(|e| {
            error!(error = %e, "Failed to store contact message");
            match e {
                MessageRepositoryError::NotConfigured => SendMessageError::Unavailable,
                MessageRepositoryError::DatabaseError(msg) => SendMessageError::StoreFailed(msg),
            }
        })?;

        info!(message_id = %stored.id, "Contact message stored");
        Ok(stored)
    }
}
