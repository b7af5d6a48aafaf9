#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyValueError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Flat string storage keyed by short names such as `portfolio_projects`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueError>;
    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError>;
}
