//! Suspend and resume a session.
//!
//! A snapshot holds everything a [`Game`](super::Game) owns except its
//! policies, which are code rather than state and are supplied again by the
//! [`GameBuilder`](super::GameBuilder) on restore.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::session::Stage;
use crate::cards::Roster;
use crate::core::{GameRngState, LeaderboardConfig, MatchConfig, Side};

/// Snapshot encoding failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encode(bincode::Error),

    #[error("snapshot decoding failed: {0}")]
    Decode(bincode::Error),
}

/// Serializable session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: MatchConfig,
    pub leaderboard: LeaderboardConfig,
    pub roster: Roster,
    pub rng: GameRngState,
    pub first: Side,
    pub stage: Stage,
    pub matches_played: u32,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode bytes produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameBuilder, Input};

    #[test]
    fn test_resume_mid_draft_continues_identically() {
        let mut game = GameBuilder::new().build(17).unwrap();
        game.dispatch(Input::ContinueFromCoin);

        let bytes = game.snapshot().to_bytes().unwrap();
        let mut resumed = GameBuilder::new()
            .restore(GameSnapshot::from_bytes(&bytes).unwrap())
            .unwrap();
        assert_eq!(resumed.stage(), game.stage());

        // Same RNG position, so the opponent answers the same way
        while let Some(&position) = game.playable_indices().first() {
            game.dispatch(Input::DeckCard(position));
            resumed.dispatch(Input::DeckCard(position));
        }
        assert_eq!(resumed.stage(), game.stage());
        assert_eq!(resumed.snapshot(), game.snapshot());
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        assert!(matches!(
            GameSnapshot::from_bytes(&[0xff, 0x01]),
            Err(SnapshotError::Decode(_))
        ));
    }
}
