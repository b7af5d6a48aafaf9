use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::modules::oauth::application::{
    domain::profile::UserProfile,
    ports::outgoing::{IdentityProvider, IdentityProviderError},
};
use crate::shared::config::OAuthConfig;

pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v1/userinfo";

const SCOPES: &str = "https://www.googleapis.com/auth/userinfo.profile https://www.googleapis.com/auth/userinfo.email";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Google authorization-code client. One shared `reqwest::Client`.
#[derive(Clone)]
pub struct GoogleOAuthClient {
    http: Client,
    auth_endpoint: Url,
    token_endpoint: Url,
    userinfo_endpoint: Url,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl GoogleOAuthClient {
    pub fn new(config: &OAuthConfig) -> Result<Self, IdentityProviderError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| IdentityProviderError::Request(e.to_string()))?;

        Ok(Self {
            http,
            auth_endpoint: parse_endpoint(GOOGLE_AUTH_URL)?,
            token_endpoint: parse_endpoint(GOOGLE_TOKEN_URL)?,
            userinfo_endpoint: parse_endpoint(GOOGLE_USERINFO_URL)?,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri(),
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, IdentityProviderError> {
    Url::parse(raw).map_err(|e| IdentityProviderError::InvalidResponse(e.to_string()))
}

async fn read_rejection(response: reqwest::Response) -> IdentityProviderError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    IdentityProviderError::Rejected { status, body }
}

#[async_trait]
impl IdentityProvider for GoogleOAuthClient {
    fn authorization_url(&self) -> String {
        let mut url = self.auth_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("client_id", &self.client_id)
            .append_pair("access_type", "offline")
            .append_pair("response_type", "code")
            .append_pair("prompt", "consent")
            .append_pair("scope", SCOPES);
        url.into()
    }

    async fn exchange_code(&self, code: &str) -> Result<String, IdentityProviderError> {
        let params = [
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(self.token_endpoint.clone())
            .form(&params)
            .send()
            .await
            .map_err(|e| IdentityProviderError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(read_rejection(response).await);
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| IdentityProviderError::InvalidResponse(e.to_string()))?;

        debug!("Exchanged authorization code for access token");
        token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(IdentityProviderError::MissingAccessToken)
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, IdentityProviderError> {
        let response = self
            .http
            .get(self.userinfo_endpoint.clone())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| IdentityProviderError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(read_rejection(response).await);
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|e| IdentityProviderError::InvalidResponse(e.to_string()))
    }
}
