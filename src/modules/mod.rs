pub mod admin;
pub mod chat;
pub mod content;
pub mod messages;
pub mod oauth;
pub mod reviews;
pub mod site;
