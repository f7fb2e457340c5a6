//! Match state carried across battle rounds.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Side, SideMap};

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// `Side` had the strictly greater total.
    Won(Side),
    /// Equal totals.
    Draw,
}

impl RoundOutcome {
    /// The winning side, if any.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::Won(side) => Some(side),
            RoundOutcome::Draw => None,
        }
    }
}

/// Scores, roles and used cards.
///
/// `round` counts from 1. `played` holds hand indices, never deck
/// positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Side choosing the attribute this round.
    pub attacker: Side,

    /// Current round, starting at 1.
    pub round: u8,

    /// Accumulated round margins.
    pub scores: SideMap<u32>,

    /// Hand indices already committed.
    pub played: SideMap<SmallVec<[usize; 4]>>,

    /// Result of the most recent round, `None` before round 1 resolves.
    pub last_outcome: Option<RoundOutcome>,
}

impl MatchState {
    /// Fresh state for a battle opened by `attacker`.
    #[must_use]
    pub fn new(attacker: Side) -> Self {
        Self {
            attacker,
            round: 1,
            scores: SideMap::with_value(0),
            played: SideMap::with_default(),
            last_outcome: None,
        }
    }

    /// Has `side` already committed hand index `index`?
    #[must_use]
    pub fn is_played(&self, side: Side, index: usize) -> bool {
        self.played[side].contains(&index)
    }

    /// Hand indices `side` may still commit, for a hand of `hand_len` cards.
    #[must_use]
    pub fn unplayed(&self, side: Side, hand_len: usize) -> Vec<usize> {
        (0..hand_len).filter(|&i| !self.is_played(side, i)).collect()
    }

    /// Record a resolved round: score the winner, mark both cards used and
    /// hand the attack to the loser.
    pub(crate) fn record_round(&mut self, played: SideMap<usize>, outcome: RoundOutcome, points: u32) {
        for side in Side::ALL {
            self.played[side].push(played[side]);
        }

        if let RoundOutcome::Won(winner) = outcome {
            self.scores[winner] += points;
            self.attacker = winner.other();
        }
        self.last_outcome = Some(outcome);
    }

    /// Score difference from the player's point of view.
    #[must_use]
    pub fn player_margin(&self) -> i64 {
        i64::from(self.scores[Side::Player]) - i64::from(self.scores[Side::Opponent])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(player: usize, opponent: usize) -> SideMap<usize> {
        SideMap::new(|s| if s.is_player() { player } else { opponent })
    }

    #[test]
    fn test_new_state() {
        let state = MatchState::new(Side::Opponent);
        assert_eq!(state.attacker, Side::Opponent);
        assert_eq!(state.round, 1);
        assert_eq!(state.scores[Side::Player], 0);
        assert_eq!(state.last_outcome, None);
        assert_eq!(state.unplayed(Side::Player, 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_decisive_round_flips_attacker() {
        let mut state = MatchState::new(Side::Player);
        state.record_round(both(0, 2), RoundOutcome::Won(Side::Player), 2);

        assert_eq!(state.scores[Side::Player], 2);
        assert_eq!(state.scores[Side::Opponent], 0);
        assert_eq!(state.attacker, Side::Opponent);
        assert!(state.is_played(Side::Player, 0));
        assert!(state.is_played(Side::Opponent, 2));
        assert_eq!(state.unplayed(Side::Opponent, 4), vec![0, 1, 3]);
        assert_eq!(state.player_margin(), 2);
    }

    #[test]
    fn test_draw_keeps_attacker_and_scores() {
        let mut state = MatchState::new(Side::Opponent);
        state.record_round(both(1, 1), RoundOutcome::Draw, 0);

        assert_eq!(state.attacker, Side::Opponent);
        assert_eq!(state.scores, SideMap::with_value(0));
        assert_eq!(state.last_outcome, Some(RoundOutcome::Draw));
        assert!(state.is_played(Side::Player, 1));
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(RoundOutcome::Won(Side::Opponent).winner(), Some(Side::Opponent));
        assert_eq!(RoundOutcome::Draw.winner(), None);
    }
}
