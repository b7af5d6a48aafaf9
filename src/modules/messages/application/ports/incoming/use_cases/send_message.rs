use async_trait::async_trait;

use crate::modules::messages::application::domain::message::{ContactMessage, NewMessage};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendMessageError {
    #[error("Messages cannot be stored right now")]
    Unavailable,

    #[error("Failed to store message: {0}")]
    StoreFailed(String),
}

#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(&self, message: NewMessage) -> Result<ContactMessage, SendMessageError>;
}
