pub mod admin_token_service;

pub use admin_token_service::{AdminTokenConfig, AdminTokenService};
