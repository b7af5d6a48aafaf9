use async_trait::async_trait;

use crate::modules::admin::application::ports::outgoing::IssuedToken;

//
// ──────────────────────────────────────────────────────────
// Login Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AdminLoginCommand {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminLoginCommandError {
    #[error("Username is required")]
    MissingUsername,

    #[error("Password is required")]
    MissingPassword,
}

impl AdminLoginCommand {
    pub fn new(username: String, password: String) -> Result<Self, AdminLoginCommandError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AdminLoginCommandError::MissingUsername);
        }
        if password.is_empty() {
            return Err(AdminLoginCommandError::MissingPassword);
        }

        Ok(Self {
            username: username.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminLoginError {
    #[error("Admin login is not configured")]
    Disabled,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password check failed: {0}")]
    HashError(String),

    #[error("Token generation failed: {0}")]
    TokenError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AdminLoginUseCase: Send + Sync {
    async fn execute(&self, command: AdminLoginCommand) -> Result<IssuedToken, AdminLoginError>;
}
