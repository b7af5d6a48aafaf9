use std::collections::HashMap;
use std::sync::Mutex;

use crate::modules::content::application::ports::outgoing::{KeyValueError, KeyValueStore};

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, KeyValueError> {
        self.entries
            .lock()
            .map_err(|_| KeyValueError::Io("store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
