use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand_core::{OsRng, RngCore};
use std::env;
use std::path::PathBuf;

/// Runtime mode selected by `RUST_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    fn from_value(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("production") => RuntimeMode::Production,
            _ => RuntimeMode::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, RuntimeMode::Production)
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("{key} must be set when {reason}")]
    MissingValue { key: &'static str, reason: &'static str },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub mode: RuntimeMode,
    pub static_dir: PathBuf,
    pub local_store_dir: PathBuf,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub app_url: String,
    pub client_id: String,
    pub client_secret: String,
}

impl OAuthConfig {
    pub fn redirect_uri(&self) -> String {
        format!("{}/auth/google/callback", self.app_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub ttl_seconds: i64,
    pub secure_cookie: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// `None` disables the admin surface entirely.
    pub credentials: Option<AdminCredentials>,
    /// `ADMIN_TOKEN_SECRET`, or a random per-process secret outside
    /// production. Never derived from the session secret.
    pub token_secret: String,
    pub token_expiry_seconds: i64,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub database_url: Option<String>,
    pub redis_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub oauth: OAuthConfig,
    pub session: SessionConfig,
    pub admin: AdminConfig,
    pub storage: StorageConfig,
}

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION_SECRET: &str = "portfolio-secret";
const DEFAULT_SESSION_TTL: i64 = 7 * 24 * 60 * 60;
const DEFAULT_ADMIN_TOKEN_EXPIRY: i64 = 3600;
const MIN_TOKEN_SECRET_LEN: usize = 32;

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Tries `.env.{RUST_ENV}` first, then falls back to `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode = RuntimeMode::from_value(non_empty("RUST_ENV"));

        let port = match non_empty("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let session_secret =
            non_empty("SESSION_SECRET").unwrap_or_else(|| DEFAULT_SESSION_SECRET.to_string());

        let session_ttl = parse_seconds(&non_empty, "SESSION_TTL", DEFAULT_SESSION_TTL)?;
        let token_expiry = parse_seconds(
            &non_empty,
            "ADMIN_TOKEN_EXPIRY",
            DEFAULT_ADMIN_TOKEN_EXPIRY,
        )?;

        let credentials = match (non_empty("ADMIN_USERNAME"), non_empty("ADMIN_PASSWORD_HASH")) {
            (Some(username), Some(password_hash)) => Some(AdminCredentials {
                username,
                password_hash,
            }),
            _ => None,
        };

        let token_secret = resolve_token_secret(
            non_empty("ADMIN_TOKEN_SECRET"),
            mode,
            credentials.is_some(),
        )?;

        Ok(Self {
            server: ServerConfig {
                port,
                mode,
                static_dir: PathBuf::from(non_empty("STATIC_DIR").unwrap_or_else(|| "dist".into())),
                local_store_dir: PathBuf::from(
                    non_empty("LOCAL_STORE_DIR").unwrap_or_else(|| "data".into()),
                ),
            },
            oauth: OAuthConfig {
                app_url: non_empty("APP_URL")
                    .unwrap_or_else(|| format!("http://localhost:{}", port)),
                client_id: non_empty("GOOGLE_CLIENT_ID").unwrap_or_default(),
                client_secret: non_empty("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            },
            session: SessionConfig {
                secret: session_secret,
                ttl_seconds: session_ttl,
                secure_cookie: mode.is_production(),
            },
            admin: AdminConfig {
                credentials,
                token_secret,
                token_expiry_seconds: token_expiry,
            },
            storage: StorageConfig {
                database_url: non_empty("DATABASE_URL"),
                redis_url: non_empty("REDIS_URL"),
            },
        })
    }
}

fn resolve_token_secret(
    explicit: Option<String>,
    mode: RuntimeMode,
    admin_enabled: bool,
) -> Result<String, ConfigError> {
    match explicit {
        Some(secret) if secret == DEFAULT_SESSION_SECRET => Err(ConfigError::InvalidValue {
            key: "ADMIN_TOKEN_SECRET",
            reason: "must not reuse the default session secret".to_string(),
        }),
        Some(secret) if mode.is_production() && secret.len() < MIN_TOKEN_SECRET_LEN => {
            Err(ConfigError::InvalidValue {
                key: "ADMIN_TOKEN_SECRET",
                reason: format!("must be at least {MIN_TOKEN_SECRET_LEN} bytes in production"),
            })
        }
        Some(secret) => Ok(secret),
        None if mode.is_production() && admin_enabled => Err(ConfigError::MissingValue {
            key: "ADMIN_TOKEN_SECRET",
            reason: "admin login is enabled in production",
        }),
        None => Ok(random_secret()),
    }
}

/// Tokens signed with it die with the process.
fn random_secret() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

fn parse_seconds<F>(lookup: &F, key: &'static str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|e| ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
        })?;

    if value <= 0 {
        return Err(ConfigError::InvalidValue {
            key,
            reason: "must be a positive number of seconds".to_string(),
        });
    }

    Ok(value)
}
