use async_trait::async_trait;

use crate::modules::oauth::application::domain::profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityProviderError {
    #[error("Request to identity provider failed: {0}")]
    Request(String),

    #[error("Identity provider rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Token response has no access token")]
    MissingAccessToken,

    #[error("Unexpected response from identity provider: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Consent screen URL the visitor is sent to.
    fn authorization_url(&self) -> String;

    /// Trade an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<String, IdentityProviderError>;

    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, IdentityProviderError>;
}
