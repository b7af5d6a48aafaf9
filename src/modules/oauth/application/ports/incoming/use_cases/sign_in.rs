use async_trait::async_trait;

use crate::modules::oauth::application::domain::profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("Authorization code is missing")]
    MissingCode,

    #[error("Code exchange failed: {0}")]
    ExchangeFailed(String),

    #[error("Profile lookup failed: {0}")]
    ProfileFailed(String),
}

#[async_trait]
pub trait SignInUseCase: Send + Sync {
    fn authorization_url(&self) -> String;

    /// Exchange the code and fetch the visitor's profile. No retries.
    async fn complete(&self, code: &str) -> Result<UserProfile, SignInError>;
}
