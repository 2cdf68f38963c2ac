//! Browser LocalStorage backend

use super::{PersistError, ScoreStore};

/// Scores stored as a JSON array under a LocalStorage key
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub const DEFAULT_KEY: &'static str = "parachute_high_scores";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, PersistError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| PersistError::Unavailable("LocalStorage not accessible".into()))
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl ScoreStore for LocalStorageStore {
    fn load_top_scores(&self) -> Result<Vec<u64>, PersistError> {
        let storage = Self::storage()?;
        match storage.get_item(&self.key) {
            Ok(Some(json)) => Ok(serde_json::from_str(&json)?),
            Ok(None) => Ok(Vec::new()),
            Err(_) => Err(PersistError::Unavailable(format!("cannot read {}", self.key))),
        }
    }

    fn save_top_scores(&mut self, scores: &[u64]) -> Result<(), PersistError> {
        let storage = Self::storage()?;
        let json = serde_json::to_string(scores)?;
        storage
            .set_item(&self.key, &json)
            .map_err(|_| PersistError::Unavailable(format!("cannot write {}", self.key)))
    }
}
