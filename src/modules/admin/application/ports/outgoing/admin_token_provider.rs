use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ADMIN_TOKEN_TYPE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),

    #[error("Admin access is not configured")]
    AdminDisabled,

    #[error("Token subject is not the configured admin")]
    UnknownSubject,
}

/// JWT claims carried by an admin bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,        // admin username
    pub exp: i64,           // expiration timestamp
    pub iat: i64,           // issued at
    pub nbf: i64,           // not before
    pub token_type: String, // always "admin"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

pub trait AdminTokenProvider: Send + Sync {
    fn issue_token(&self, subject: &str) -> Result<IssuedToken, TokenError>;
    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError>;
}
