//! Ranked high-score list.
//!
//! Submissions are appended, stably re-sorted by score (descending) and
//! truncated to the configured capacity. Stable sorting means an older
//! entry stays ahead of a newer one with the same score.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::store::{LeaderboardStore, Result};
use crate::core::LeaderboardConfig;

/// One ranked entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// The ranked list, highest score first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a store, treating unreadable or corrupt data as empty.
    pub fn load_or_empty(store: &dyn LeaderboardStore) -> Self {
        match store.load() {
            Ok(mut entries) => {
                // Stored data is trusted for content, not for order
                entries.sort_by(|a, b| b.score.cmp(&a.score));
                Self { entries }
            }
            Err(err) => {
                warn!(error = %err, "leaderboard unreadable, starting empty");
                Self::default()
            }
        }
    }

    /// Add an entry, re-rank and truncate to `config.capacity`.
    ///
    /// Returns the stored entry (with its normalized name).
    pub fn submit(&mut self, name: &str, score: u32, config: &LeaderboardConfig) -> LeaderboardEntry {
        let entry = LeaderboardEntry {
            name: normalize_name(name, config),
            score,
        };

        self.entries.push(entry.clone());
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(config.capacity);

        debug!(name = %entry.name, score, size = self.entries.len(), "leaderboard submission");
        entry
    }

    /// Persist the list.
    pub fn save(&self, store: &dyn LeaderboardStore) -> Result<()> {
        store.save(&self.entries)
    }

    /// The best `n` entries.
    #[must_use]
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// All entries, ranked.
    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the list empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load, submit and save in one go.
///
/// A corrupt stored list is replaced rather than blocking the submission.
/// Returns the top `config.display_count` entries after saving.
pub fn submit_score(
    store: &dyn LeaderboardStore,
    name: &str,
    score: u32,
    config: &LeaderboardConfig,
) -> Result<Vec<LeaderboardEntry>> {
    let mut board = Leaderboard::load_or_empty(store);
    board.submit(name, score, config);
    board.save(store)?;
    Ok(board.top(config.display_count).to_vec())
}

/// Trim, truncate to `max_name_chars` characters and fall back to the
/// placeholder when blank.
#[must_use]
pub fn normalize_name(raw: &str, config: &LeaderboardConfig) -> String {
    let name: String = raw.trim().chars().take(config.max_name_chars).collect();
    if name.is_empty() {
        config.placeholder_name.clone()
    } else {
        name
    }
}
