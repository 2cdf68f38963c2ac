//! High-score persistence
//!
//! Backends:
//! - `JsonFileStore`: JSON array in a file (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)
//! - `MemoryStore`: in-process, for tests and headless runs
//!
//! Failures are reported as `PersistError`; callers treat them as
//! recoverable and keep playing.

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use thiserror::Error;

/// Errors from a score store
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed score data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Where the top scores live between sessions
pub trait ScoreStore {
    /// Stored scores in any order
    fn load_top_scores(&self) -> Result<Vec<u64>, PersistError>;

    fn save_top_scores(&mut self, scores: &[u64]) -> Result<(), PersistError>;
}

/// Scores kept in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scores: Vec<u64>,
    /// Simulate an unavailable backend
    pub fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scores(scores: Vec<u64>) -> Self {
        Self {
            scores,
            fail: false,
        }
    }

    /// A store whose every operation fails
    pub fn failing() -> Self {
        Self {
            scores: Vec::new(),
            fail: true,
        }
    }

    pub fn scores(&self) -> &[u64] {
        &self.scores
    }
}

impl ScoreStore for MemoryStore {
    fn load_top_scores(&self) -> Result<Vec<u64>, PersistError> {
        if self.fail {
            return Err(PersistError::Unavailable("memory store disabled".into()));
        }
        Ok(self.scores.clone())
    }

    fn save_top_scores(&mut self, scores: &[u64]) -> Result<(), PersistError> {
        if self.fail {
            return Err(PersistError::Unavailable("memory store disabled".into()));
        }
        self.scores = scores.to_vec();
        Ok(())
    }
}
