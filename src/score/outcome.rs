//! Match outcome classification.
//!
//! Only the player's result matters here: the leaderboard records human
//! wins, and the tier of a win depends on the final margin.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

/// Tier of a winning margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinTier {
    /// Margin of 1 or 2.
    Steady,
    /// Margin of 3 to 5.
    Cunning,
    /// Margin above 5.
    Masterful,
}

impl WinTier {
    /// Tier for a positive margin.
    #[must_use]
    pub fn from_margin(margin: u32) -> Self {
        match margin {
            m if m > 5 => WinTier::Masterful,
            3..=5 => WinTier::Cunning,
            _ => WinTier::Steady,
        }
    }

    /// Title shown under the victory message.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            WinTier::Masterful => "Commands armies like a god",
            WinTier::Cunning => "Foresight beyond mortal reckoning",
            WinTier::Steady => "Victory planned within the tent",
        }
    }
}

/// Result of a finished match from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Equal scores.
    Draw,
    /// Player scored less.
    Loss,
    /// Player scored more.
    Win(WinTier),
}

impl MatchOutcome {
    /// Classify final scores.
    ///
    /// ```
    /// use generals_duel::score::{MatchOutcome, WinTier};
    ///
    /// assert_eq!(MatchOutcome::classify(9, 2), MatchOutcome::Win(WinTier::Masterful));
    /// assert_eq!(MatchOutcome::classify(4, 4), MatchOutcome::Draw);
    /// ```
    #[must_use]
    pub fn classify(player: u32, opponent: u32) -> Self {
        match player.cmp(&opponent) {
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
            std::cmp::Ordering::Greater => MatchOutcome::Win(WinTier::from_margin(player - opponent)),
        }
    }

    /// Is the leaderboard shown (and open for submission)?
    #[must_use]
    pub fn shows_leaderboard(self) -> bool {
        matches!(self, MatchOutcome::Win(_))
    }

    /// End-of-match message.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            MatchOutcome::Draw => "Evenly matched.".to_string(),
            MatchOutcome::Loss => "Victory and defeat are the common lot of war.".to_string(),
            MatchOutcome::Win(tier) => format!("Congratulations, my lord, victory is yours! {}", tier.title()),
        }
    }
}

/// Final scores plus their classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub scores: SideMap<u32>,
    pub outcome: MatchOutcome,
}

impl MatchSummary {
    /// Summarize final scores.
    #[must_use]
    pub fn new(scores: SideMap<u32>) -> Self {
        let outcome = MatchOutcome::classify(scores[Side::Player], scores[Side::Opponent]);
        Self { scores, outcome }
    }

    /// "Final score: Player X : Opponent Y".
    #[must_use]
    pub fn score_line(&self) -> String {
        format!(
            "Final score: Player {} : Opponent {}",
            self.scores[Side::Player],
            self.scores[Side::Opponent]
        )
    }
}
