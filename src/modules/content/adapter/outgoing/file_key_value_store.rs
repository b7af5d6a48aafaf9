use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::modules::content::application::ports::outgoing::{KeyValueError, KeyValueStore};

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, KeyValueError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| KeyValueError::Io(e.to_string()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, KeyValueError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(KeyValueError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KeyValueError::Io(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        // write then rename so readers never observe a half-written file
        let mut file = fs::File::create(&tmp).map_err(|e| KeyValueError::Io(e.to_string()))?;
        file.write_all(value.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| KeyValueError::Io(e.to_string()))?;
        fs::rename(&tmp, &path).map_err(|e| KeyValueError::Io(e.to_string()))
    }
}
