use async_trait::async_trait;

use crate::modules::messages::application::domain::message::ContactMessage;

#[async_trait]
pub trait ListMessagesUseCase: Send + Sync {
    /// Newest first. An unreachable store yields an empty list.
    async fn execute(&self) -> Vec<ContactMessage>;
}
