mod list_messages;
mod send_message;

pub use list_messages::*;
pub use send_message::*;
