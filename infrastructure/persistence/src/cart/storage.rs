use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use business::domain::cart::model::LineItem;
use business::domain::cart::storage::{CartStorage, CartStorageError};

/// File-backed cart persistence: the item array is serialized as one JSON
/// document at a fixed path and fully overwritten on every save. A missing
/// file is an empty cart; an unparseable one is reported as malformed so
/// the store can discard it.
pub struct JsonFileCartStorage {
    path: PathBuf,
}

impl JsonFileCartStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for JsonFileCartStorage {
    fn load(&self) -> Result<Vec<LineItem>, CartStorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                tracing::warn!("Failed to read cart file {:?}: {}", self.path, err);
                return Err(CartStorageError::Read);
            }
        };

        serde_json::from_str(&raw).map_err(|err| {
            tracing::warn!("Malformed cart file {:?}: {}", self.path, err);
            CartStorageError::Malformed
        })
    }

    fn save(&self, items: &[LineItem]) -> Result<(), CartStorageError> {
        let raw = serde_json::to_string(items).map_err(|_| CartStorageError::Write)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|_| CartStorageError::Write)?;
        }

        fs::write(&self.path, raw).map_err(|err| {
            tracing::warn!("Failed to write cart file {:?}: {}", self.path, err);
            CartStorageError::Write
        })
    }
}
