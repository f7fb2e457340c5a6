//! End-of-match scoring and the persisted leaderboard.
//!
//! - `outcome`: draw / loss / tiered win classification
//! - `leaderboard`: ranked list with name normalization
//! - `store`: the persistence collaborator (`load` / `save`)

pub mod leaderboard;
pub mod outcome;
pub mod store;

pub use leaderboard::{normalize_name, submit_score, Leaderboard, LeaderboardEntry};
pub use outcome::{MatchOutcome, MatchSummary, WinTier};
pub use store::{JsonFileStore, LeaderboardError, LeaderboardStore, MemoryStore};
