//! JSON file backend

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PersistError, ScoreStore};

/// Scores stored as a JSON array, e.g. `[1550, 1320]`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub const DEFAULT_PATH: &'static str = "high_scores.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl ScoreStore for JsonFileStore {
    fn load_top_scores(&self) -> Result<Vec<u64>, PersistError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            // Nothing saved yet
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&json)?)
    }

    fn save_top_scores(&mut self, scores: &[u64]) -> Result<(), PersistError> {
        let json = serde_json::to_string(scores)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("parachute_drop_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let store = JsonFileStore::new(temp_path("missing"));
        assert!(store.load_top_scores().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let mut store = JsonFileStore::new(&path);
        store.save_top_scores(&[1550, 900, 900]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[1550,900,900]");
        assert_eq!(store.load_top_scores().unwrap(), vec![1550, 900, 900]);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);

        assert!(matches!(store.load_top_scores(), Err(PersistError::Json(_))));

        let _ = fs::remove_file(path);
    }
}
