//! Draft cards and hands - per-match card state.
//!
//! A [`DraftCard`] is a character dealt into this match's deck. Its identity
//! is its deck `position`, never its name, so the same template could appear
//! in two matches (or twice in a custom roster) without confusion.
//!
//! A [`Hand`] holds the cards one side drafted, in pick order. The owner
//! always sees full stats regardless of `revealed`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::Attribute;
use super::character::Character;
use crate::core::Side;

/// A character dealt into the draft pool.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftCard {
    /// Position in the match deck.
    pub position: usize,

    /// The dealt character.
    pub character: Character,

    /// Face up for both sides during the draft.
    pub revealed: bool,

    /// Removed from the pool.
    pub taken: bool,

    /// Side that drafted this card. `None` while still in the pool.
    pub owner: Option<Side>,
}

impl DraftCard {
    /// Deal a character into the pool at `position`.
    #[must_use]
    pub fn new(position: usize, character: Character, revealed: bool) -> Self {
        Self {
            position,
            character,
            revealed,
            taken: false,
            owner: None,
        }
    }

    /// The character as seen by someone who does not own the card.
    ///
    /// Covered cards show nothing until drafted.
    #[must_use]
    pub fn public_view(&self) -> Option<&Character> {
        self.revealed.then_some(&self.character)
    }

    /// Value of one attribute.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> u8 {
        self.character.get(attribute)
    }

    /// Mark the card as drafted by `side`.
    pub(crate) fn take(&mut self, side: Side) {
        self.taken = true;
        self.owner = Some(side);
    }
}

/// The cards one side drafted, in pick order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[DraftCard; 4]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from already-drafted cards.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = DraftCard>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Add a drafted card.
    pub fn push(&mut self, card: DraftCard) {
        self.cards.push(card);
    }

    /// Card at a hand index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DraftCard> {
        self.cards.get(index)
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the hand empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in hand order.
    pub fn iter(&self) -> impl Iterator<Item = &DraftCard> {
        self.cards.iter()
    }

    /// Deck positions of every held card.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards.iter().map(|c| c.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(position: usize, revealed: bool) -> DraftCard {
        DraftCard::new(position, Character::new("Wei Qing", 8, 9, 7, 9), revealed)
    }

    #[test]
    fn test_new_card_is_in_pool() {
        let c = card(2, true);
        assert_eq!(c.position, 2);
        assert!(!c.taken);
        assert_eq!(c.owner, None);
        assert_eq!(c.get(Attribute::Command), 9);
    }

    #[test]
    fn test_public_view_hides_covered() {
        assert!(card(0, true).public_view().is_some());
        assert!(card(0, false).public_view().is_none());
    }

    #[test]
    fn test_take_sets_owner() {
        let mut c = card(5, false);
        c.take(Side::Opponent);
        assert!(c.taken);
        assert_eq!(c.owner, Some(Side::Opponent));
    }

    #[test]
    fn test_hand_order() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());

        hand.push(card(4, true));
        hand.push(card(1, false));

        assert_eq!(hand.len(), 2);
        assert_eq!(hand.positions().collect::<Vec<_>>(), vec![4, 1]);
        assert_eq!(hand.get(1).map(|c| c.position), Some(1));
        assert!(hand.get(2).is_none());
    }

    #[test]
    fn test_hand_serialization() {
        let hand = Hand::from_cards(vec![card(0, true), card(3, false)]);
        let json = serde_json::to_string(&hand).unwrap();
        let back: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, back);
    }
}
