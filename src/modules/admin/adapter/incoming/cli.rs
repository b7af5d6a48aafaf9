use std::io::BufRead;

use crate::modules::admin::application::ports::outgoing::{HashError, PasswordHasher};

pub const HASH_PASSWORD_COMMAND: &str = "hash-password";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum HashPasswordError {
    #[error("No password given on stdin")]
    EmptyPassword,

    #[error("Failed to read stdin: {0}")]
    Read(String),

    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Reads one line and prints the PHC string to use as `ADMIN_PASSWORD_HASH`.
///
/// Only the trailing newline is stripped; inner and leading spaces are kept.
pub async fn hash_password_from<R: BufRead>(
    mut input: R,
    hasher: &dyn PasswordHasher,
) -> Result<String, HashPasswordError> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| HashPasswordError::Read(e.to_string()))?;

    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        return Err(HashPasswordError::EmptyPassword);
    }

    Ok(hasher.hash_password(password).await?)
}
