mod list_messages_service;
mod send_message_service;

pub use list_messages_service::ListMessagesService;
pub use send_message_service::SendMessageService;
