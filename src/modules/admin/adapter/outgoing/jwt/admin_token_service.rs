use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use crate::modules::admin::application::ports::outgoing::{
    AdminClaims, AdminTokenProvider, IssuedToken, TokenError, ADMIN_TOKEN_TYPE,
};

#[derive(Debug, Clone)]
pub struct AdminTokenConfig {
    pub secret_key: String,
    pub expiry_seconds: i64,
    /// The only subject tokens are issued to and accepted for. `None`
    /// rejects every token.
    pub admin_username: Option<String>,
}

#[derive(Clone)]
pub struct AdminTokenService {
    expiry_seconds: i64,
    admin_username: Option<String>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for AdminTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminTokenService")
            .field("expiry_seconds", &self.expiry_seconds)
            .field("admin_username", &self.admin_username)
            .finish()
    }
}

impl AdminTokenService {
    pub fn new(config: AdminTokenConfig) -> Self {
        Self {
            expiry_seconds: config.expiry_seconds,
            admin_username: config.admin_username,
            encoding_key: EncodingKey::from_secret(config.secret_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
        }
    }

    fn check_subject(&self, subject: &str) -> Result<(), TokenError> {
        match self.admin_username.as_deref() {
            None => Err(TokenError::AdminDisabled),
            Some(admin) if admin == subject => Ok(()),
            Some(_) => Err(TokenError::UnknownSubject),
        }
    }
}

impl AdminTokenProvider for AdminTokenService {
    fn issue_token(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        self.check_subject(subject)?;

        let now = Utc::now();
        let claims = AdminClaims {
            sub: subject.to_string(),
            exp: (now + Duration::seconds(self.expiry_seconds)).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: ADMIN_TOKEN_TYPE.to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_in: self.expiry_seconds,
        })
    }

    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded = decode::<AdminClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Admin token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Admin token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::error!("Security alert: invalid admin token signature");
                    TokenError::InvalidSignature
                }
                _ => {
                    tracing::warn!(error = %e, "Malformed admin token");
                    TokenError::MalformedToken
                }
            }
        })?;

        if decoded.claims.token_type != ADMIN_TOKEN_TYPE {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                ADMIN_TOKEN_TYPE,
                decoded.claims.token_type
            );
            return Err(TokenError::InvalidTokenType(ADMIN_TOKEN_TYPE.to_string()));
        }

        if let Err(e) = self.check_subject(&decoded.claims.sub) {
            tracing::warn!(subject = %decoded.claims.sub, error = %e, "Admin token rejected");
            return Err(e);
        }

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with(secret: &str, expiry_seconds: i64) -> AdminTokenService {
        AdminTokenService::new(AdminTokenConfig {
            secret_key: secret.to_string(),
            expiry_seconds,
            admin_username: Some("owner".to_string()),
        })
    }

    fn live_claims(sub: &str) -> AdminClaims {
        let now = Utc::now().timestamp();
        AdminClaims {
            sub: sub.to_string(),
            exp: now + 600,
            iat: now,
            nbf: now,
            token_type: ADMIN_TOKEN_TYPE.to_string(),
        }
    }

    fn encode_claims(secret: &str, claims: &AdminClaims) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn issued_token_verifies_with_subject() {
        let service = service_with("FAKE_ADMIN_SECRET_DO_NOT_USE", 3600);

        let issued = service.issue_token("owner").unwrap();
        let claims = service.verify_token(&issued.token).unwrap();

        assert_eq!(issued.expires_in, 3600);
        assert_eq!(claims.sub, "owner");
        assert_eq!(claims.token_type, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = service_with("first-secret-first-secret-first", 3600);
        let verifier = service_with("other-secret-other-secret-other", 3600);

        let issued = issuer.issue_token("owner").unwrap();

        assert_eq!(
            verifier.verify_token(&issued.token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn expired_token_is_rejected() {
        let secret = "FAKE_ADMIN_SECRET_DO_NOT_USE";
        let now = Utc::now().timestamp();
        let token = encode_claims(
            secret,
            &AdminClaims {
                sub: "owner".to_string(),
                exp: now - 120,
                iat: now - 240,
                nbf: now - 240,
                token_type: ADMIN_TOKEN_TYPE.to_string(),
            },
        );

        let result = service_with(secret, 3600).verify_token(&token);

        assert_eq!(result.unwrap_err(), TokenError::TokenExpired);
    }

    #[test]
    fn token_of_other_type_is_rejected() {
        let secret = "FAKE_ADMIN_SECRET_DO_NOT_USE";
        let now = Utc::now().timestamp();
        let token = encode_claims(
            secret,
            &AdminClaims {
                sub: "owner".to_string(),
                exp: now + 600,
                iat: now,
                nbf: now,
                token_type: "session".to_string(),
            },
        );

        let result = service_with(secret, 3600).verify_token(&token);

        assert_eq!(
            result.unwrap_err(),
            TokenError::InvalidTokenType("admin".to_string())
        );
    }

    #[test]
    fn garbage_is_malformed() {
        let service = service_with("FAKE_ADMIN_SECRET_DO_NOT_USE", 3600);

        assert_eq!(
            service.verify_token("invalid.jwt.token").unwrap_err(),
            TokenError::MalformedToken
        );
    }

    #[test]
    fn token_for_another_subject_is_rejected() {
        let secret = "FAKE_ADMIN_SECRET_DO_NOT_USE";
        let token = encode_claims(secret, &live_claims("attacker"));

        let result = service_with(secret, 3600).verify_token(&token);

        assert_eq!(result.unwrap_err(), TokenError::UnknownSubject);
    }

    #[test]
    fn every_token_is_rejected_when_admin_is_not_configured() {
        let secret = "FAKE_ADMIN_SECRET_DO_NOT_USE";
        let service = AdminTokenService::new(AdminTokenConfig {
            secret_key: secret.to_string(),
            expiry_seconds: 3600,
            admin_username: None,
        });
        let token = encode_claims(secret, &live_claims("owner"));

        assert_eq!(service.verify_token(&token).unwrap_err(), TokenError::AdminDisabled);
        assert_eq!(service.issue_token("owner").unwrap_err(), TokenError::AdminDisabled);
    }

    #[test]
    fn issuing_for_another_subject_is_refused() {
        let service = service_with("FAKE_ADMIN_SECRET_DO_NOT_USE", 3600);

        assert_eq!(
            service.issue_token("someone-else").unwrap_err(),
            TokenError::UnknownSubject
        );
    }
}
