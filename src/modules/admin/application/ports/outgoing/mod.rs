pub mod admin_token_provider;
pub mod password_hasher;

pub use admin_token_provider::{
    AdminClaims, AdminTokenProvider, IssuedToken, TokenError, ADMIN_TOKEN_TYPE,
};
pub use password_hasher::{HashError, PasswordHasher};
