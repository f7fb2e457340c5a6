//! Opponent battle policy: which card to commit, which attribute to contest.

use tracing::debug;

use crate::cards::{Attribute, DraftCard, Hand};
use crate::core::GameRng;

/// Policy for the opponent's battle decisions.
pub trait BattlePolicy: Send + Sync {
    /// Choose a hand index to commit this round.
    ///
    /// `unplayed` lists the indices still available, in hand order. Returns
    /// `None` only when `unplayed` is empty.
    fn choose_card(&self, hand: &Hand, unplayed: &[usize], rng: &mut GameRng) -> Option<usize>;

    /// Choose the attribute to contest when the opponent attacks with `card`.
    fn choose_attribute(&self, card: &DraftCard) -> Attribute;
}

/// The standard opponent.
///
/// Commits the unplayed card with the highest single attribute (first found
/// on ties) and attacks with that card's best attribute (canonical order on
/// ties).
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardBattlePolicy;

impl BattlePolicy for StandardBattlePolicy {
    fn choose_card(&self, hand: &Hand, unplayed: &[usize], rng: &mut GameRng) -> Option<usize> {
        let mut best: Option<(usize, u8)> = None;
        for &index in unplayed {
            let Some(card) = hand.get(index) else {
                continue;
            };
            let value = card.character.best_value();
            if best.map_or(true, |(_, top)| value > top) {
                best = Some((index, value));
            }
        }

        let choice = best
            .map(|(index, _)| index)
            .or_else(|| rng.choose(unplayed).copied());
        debug!(?unplayed, ?choice, "opponent battle card");
        choice
    }

    fn choose_attribute(&self, card: &DraftCard) -> Attribute {
        let (attribute, value) = card.character.stats.best();
        debug!(%attribute, value, "opponent attribute");
        attribute
    }
}
