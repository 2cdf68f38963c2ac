//! High score leaderboard
//!
//! Tracks the top 10 landed scores, highest first. Duplicates are kept.

use serde::{Deserialize, Serialize};

use crate::persistence::ScoreStore;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Rows shown on the game-over screen
pub const DISPLAYED_HIGH_SCORES: usize = 5;

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HighScores {
    /// Sorted descending
    pub entries: Vec<u64>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from stored scores in any order
    pub fn from_scores(mut scores: Vec<u64>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_HIGH_SCORES);
        Self { entries: scores }
    }

    /// Load from a store; any failure starts a fresh board
    pub fn load(store: &dyn ScoreStore) -> Self {
        match store.load_top_scores() {
            Ok(scores) => {
                let board = Self::from_scores(scores);
                log::info!("Loaded {} high scores", board.entries.len());
                board
            }
            Err(e) => {
                log::warn!("Could not load high scores: {e}");
                Self::new()
            }
        }
    }

    /// Save to a store; failures are logged and dropped
    pub fn save(&self, store: &mut dyn ScoreStore) {
        match store.save_top_scores(&self.entries) {
            Ok(()) => log::info!("High scores saved ({} entries)", self.entries.len()),
            Err(e) => log::warn!("Could not save high scores: {e}"),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|&lowest| score > lowest).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|&e| score > e);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, score: u64) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(rank - 1, score);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().copied()
    }
}
