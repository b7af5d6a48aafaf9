use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
struct SessionCookieClaims {
    sid: String,
    iat: i64,
    exp: i64,
}

/// Signs session ids so a visitor cannot forge or guess another's cookie.
#[derive(Clone)]
pub struct SessionCookieSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for SessionCookieSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCookieSigner")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl SessionCookieSigner {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    pub fn sign(&self, session_id: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = SessionCookieClaims {
            sid: session_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// The session id, or `None` for a tampered, foreign or expired cookie.
    pub fn verify(&self, value: &str) -> Option<String> {
        let validation = Validation::new(Algorithm::HS256);
        match decode::<SessionCookieClaims>(value, &self.decoding_key, &validation) {
            Ok(data) => Some(data.claims.sid),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring invalid session cookie");
                None
            }
        }
    }
}
