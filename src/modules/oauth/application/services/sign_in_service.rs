use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::modules::oauth::application::{
    domain::profile::UserProfile,
    ports::{
        incoming::use_cases::{SignInError, SignInUseCase},
        outgoing::IdentityProvider,
    },
};

pub struct SignInService {
    provider: Arc<dyn IdentityProvider>,
}

impl SignInService {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl SignInUseCase for SignInService {
    fn authorization_url(&self) -> String {
        self.provider.authorization_url()
    }

    async fn complete(&self, code: &str) -> Result<UserProfile, SignInError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(SignInError::MissingCode);
        }

        let access_token = self.provider.exchange_code(code).await.map_err(|e| {
            error!(error = %e, "OAuth code exchange failed");
            SignInError::ExchangeFailed(e.to_string())
        })?;

        let profile = self
            .provider
            .fetch_profile(&access_token)
            .await
            .map_err(|e| {
                error!(error = %e, "OAuth profile lookup failed");
                SignInError::ProfileFailed(e.to_string())
            })?;

        info!(email = profile.email().unwrap_or("<none>"), "Visitor signed in");
        Ok(profile)
    }
}
