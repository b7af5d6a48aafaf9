use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::modules::messages::application::{
    domain::message::ContactMessage,
    ports::{incoming::use_cases::ListMessagesUseCase, outgoing::MessageRepository},
};

pub struct ListMessagesService {
    repository: Arc<dyn MessageRepository>,
}

impl ListMessagesService {
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ListMessagesUseCase for ListMessagesService {
    async fn execute(&self) -> Vec<ContactMessage> {
        match self.repository.list_newest_first().await {
            Ok(messages) => messages,
            Err(e) => {
                warn!(error = %e, "Failed to load contact messages");
                Vec::new()
            }
        }
    }
}
