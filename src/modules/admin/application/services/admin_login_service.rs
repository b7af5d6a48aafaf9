use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::admin::application::ports::{
    incoming::use_cases::{AdminLoginCommand, AdminLoginError, AdminLoginUseCase},
    outgoing::{AdminTokenProvider, IssuedToken, PasswordHasher},
};
use crate::shared::config::AdminCredentials;

pub struct AdminLoginService {
    credentials: Option<AdminCredentials>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn AdminTokenProvider>,
}

impl AdminLoginService {
    pub fn new(
        credentials: Option<AdminCredentials>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn AdminTokenProvider>,
    ) -> Self {
        Self {
            credentials,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl AdminLoginUseCase for AdminLoginService {
    async fn execute(&self, command: AdminLoginCommand) -> Result<IssuedToken, AdminLoginError> {
        let credentials = self.credentials.as_ref().ok_or(AdminLoginError::Disabled)?;

        // always verify so a wrong username costs the same as a wrong password
        let password_ok = self
            .hasher
            .verify_password(command.password(), &credentials.password_hash)
            .await
            .map_err(|e| AdminLoginError::HashError(e.to_string()))?;

        if !password_ok || command.username() != credentials.username {
            warn!(username = %command.username(), "Rejected admin login");
            return Err(AdminLoginError::InvalidCredentials);
        }

        let issued = self
            .tokens
            .issue_token(&credentials.username)
            .map_err(|e| AdminLoginError::TokenError(e.to_string()))?;

        info!(username = %credentials.username, "Admin logged in");
        Ok(issued)
    }
}
