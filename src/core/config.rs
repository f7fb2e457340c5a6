//! Match and leaderboard configuration.
//!
//! Defaults reproduce the standard game: an 8-card deck with 4 cards face up,
//! a 1/2/2/2/1 draft, three battle rounds and a four-sided die (0..=3).
//! Everything is serde-serializable so a driver can load overrides from a
//! file.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Rules parameters for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Cards dealt from the roster into the shared draft pool.
    pub deck_size: usize,

    /// Cards in the pool that are face up for both sides.
    pub revealed_count: usize,

    /// Picks per draft step. Steps alternate between the coin-toss winner
    /// (even steps) and the other side (odd steps).
    pub pick_counts: Vec<usize>,

    /// Battle rounds per match.
    pub rounds: u8,

    /// Faces on the battle die. A roll yields `0..die_faces`.
    pub die_faces: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            deck_size: 8,
            revealed_count: 4,
            pick_counts: vec![1, 2, 2, 2, 1],
            rounds: 3,
            die_faces: 4,
        }
    }
}

impl MatchConfig {
    /// Override the battle round count.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u8) -> Self {
        self.rounds = rounds;
        self
    }

    /// Override the die size.
    #[must_use]
    pub fn with_die_faces(mut self, faces: u8) -> Self {
        self.die_faces = faces;
        self
    }

    /// Override the deck size and draft schedule together.
    #[must_use]
    pub fn with_draft(mut self, deck_size: usize, revealed_count: usize, pick_counts: Vec<usize>) -> Self {
        self.deck_size = deck_size;
        self.revealed_count = revealed_count;
        self.pick_counts = pick_counts;
        self
    }

    /// Cards each side ends the draft with.
    ///
    /// Only meaningful for a config that passed [`validate`](Self::validate).
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.pick_counts.iter().step_by(2).sum()
    }

    /// Check the config describes a playable match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pick_counts.is_empty() || self.pick_counts.contains(&0) {
            return Err(ConfigError::EmptyPickStep);
        }

        let total: usize = self.pick_counts.iter().sum();
        if total != self.deck_size {
            return Err(ConfigError::PickTotalMismatch {
                picks: total,
                deck_size: self.deck_size,
            });
        }

        let first: usize = self.pick_counts.iter().step_by(2).sum();
        let second = total - first;
        if first != second {
            return Err(ConfigError::UnevenHands { first, second });
        }

        if self.revealed_count > self.deck_size {
            return Err(ConfigError::TooManyRevealed {
                revealed: self.revealed_count,
                deck_size: self.deck_size,
            });
        }

        if self.rounds == 0 || usize::from(self.rounds) > first {
            return Err(ConfigError::InvalidRounds {
                rounds: self.rounds,
                hand_size: first,
            });
        }

        if self.die_faces == 0 {
            return Err(ConfigError::NoDieFaces);
        }

        Ok(())
    }
}

/// Leaderboard sizing and name rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    /// Entries kept after each submission.
    pub capacity: usize,

    /// Entries shown at the end of a match.
    pub display_count: usize,

    /// Names are truncated to this many characters.
    pub max_name_chars: usize,

    /// Name used when the submitted name is blank.
    pub placeholder_name: String,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            capacity: 50,
            display_count: 5,
            max_name_chars: 20,
            placeholder_name: "Anonymous".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hand_size(), 4);
        assert_eq!(config.pick_counts.iter().sum::<usize>(), 8);
    }

    #[test]
    fn test_pick_total_mismatch() {
        let config = MatchConfig::default().with_draft(10, 4, vec![1, 2, 2, 2, 1]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::PickTotalMismatch { picks: 8, deck_size: 10 })
        );
    }

    #[test]
    fn test_uneven_hands() {
        // Four steps of two still split evenly
        let config = MatchConfig::default().with_draft(8, 4, vec![2, 2, 2, 2]);
        assert!(config.validate().is_ok());

        let config = MatchConfig::default().with_draft(6, 2, vec![3, 1, 2]);
        assert_eq!(config.validate(), Err(ConfigError::UnevenHands { first: 5, second: 1 }));
    }

    #[test]
    fn test_rounds_bounded_by_hand() {
        assert_eq!(
            MatchConfig::default().with_rounds(5).validate(),
            Err(ConfigError::InvalidRounds { rounds: 5, hand_size: 4 })
        );
        assert!(MatchConfig::default().with_rounds(4).validate().is_ok());
        assert!(MatchConfig::default().with_rounds(0).validate().is_err());
    }

    #[test]
    fn test_die_and_reveal_checks() {
        assert_eq!(MatchConfig::default().with_die_faces(0).validate(), Err(ConfigError::NoDieFaces));

        let config = MatchConfig::default().with_draft(8, 9, vec![1, 2, 2, 2, 1]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyRevealed { revealed: 9, deck_size: 8 })
        );

        let config = MatchConfig::default().with_draft(8, 4, vec![1, 0, 2, 2, 1]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyPickStep));
    }

    #[test]
    fn test_config_serde() {
        let config = MatchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);

        let lb = LeaderboardConfig::default();
        assert_eq!(lb.capacity, 50);
        assert_eq!(lb.display_count, 5);
        assert_eq!(lb.max_name_chars, 20);
    }
}
