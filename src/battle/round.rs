//! Round resolution.
//!
//! Each side adds its die to its value of the contested attribute. The
//! strictly greater total wins the difference in points; equal totals
//! score nothing.

use serde::{Deserialize, Serialize};

use super::state::RoundOutcome;
use crate::cards::Attribute;
use crate::core::{Side, SideMap};

/// Compare two totals.
///
/// Returns the outcome and the points it awards (the margin, or 0 on a draw).
///
/// ```
/// use generals_duel::battle::{resolve_totals, RoundOutcome};
/// use generals_duel::core::Side;
///
/// assert_eq!(resolve_totals(12, 10), (RoundOutcome::Won(Side::Player), 2));
/// assert_eq!(resolve_totals(9, 9), (RoundOutcome::Draw, 0));
/// ```
#[must_use]
pub fn resolve_totals(player_total: u32, opponent_total: u32) -> (RoundOutcome, u32) {
    match player_total.cmp(&opponent_total) {
        std::cmp::Ordering::Greater => (RoundOutcome::Won(Side::Player), player_total - opponent_total),
        std::cmp::Ordering::Less => (RoundOutcome::Won(Side::Opponent), opponent_total - player_total),
        std::cmp::Ordering::Equal => (RoundOutcome::Draw, 0),
    }
}

/// Everything that happened in one resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round number, from 1.
    pub round: u8,
    /// Side that chose the attribute.
    pub attacker: Side,
    /// Contested attribute.
    pub attribute: Attribute,
    /// Hand index each side committed.
    pub hand_index: SideMap<usize>,
    /// Attribute value of each committed card.
    pub base: SideMap<u8>,
    /// Die result for each side.
    pub die: SideMap<u8>,
    /// `base + die` for each side.
    pub total: SideMap<u32>,
    /// Round result.
    pub outcome: RoundOutcome,
    /// Points awarded to the winner.
    pub points: u32,
}

impl RoundReport {
    /// Build the report from committed values and dice.
    #[must_use]
    pub fn resolve(
        round: u8,
        attacker: Side,
        attribute: Attribute,
        hand_index: SideMap<usize>,
        base: SideMap<u8>,
        die: SideMap<u8>,
    ) -> Self {
        let total = SideMap::new(|side| u32::from(base[side]) + u32::from(die[side]));
        let (outcome, points) = resolve_totals(total[Side::Player], total[Side::Opponent]);

        Self {
            round,
            attacker,
            attribute,
            hand_index,
            base,
            die,
            total,
            outcome,
            points,
        }
    }
}

impl std::fmt::Display for RoundReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round {}: {} {} + die {} = {} vs {} + die {} = {}",
            self.round,
            self.attribute,
            self.base[Side::Player],
            self.die[Side::Player],
            self.total[Side::Player],
            self.base[Side::Opponent],
            self.die[Side::Opponent],
            self.total[Side::Opponent],
        )?;
        match self.outcome {
            RoundOutcome::Won(Side::Player) => write!(f, " - you win {} points", self.points),
            RoundOutcome::Won(Side::Opponent) => write!(f, " - opponent wins {} points", self.points),
            RoundOutcome::Draw => write!(f, " - draw, no points"),
        }
    }
}
