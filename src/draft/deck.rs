//! Match deck construction.
//!
//! The deck is dealt in two independent shuffles: one picks which
//! characters appear (and in what order), the other picks which deck
//! positions are face up. A strong character is therefore exactly as
//! likely to be covered as revealed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{DraftCard, Roster};
use crate::core::{ConfigError, GameRng, MatchConfig, Rejection, Side};

/// The shared draft pool for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<DraftCard>,
}

impl Deck {
    /// Deal `config.deck_size` characters from the roster and reveal
    /// `config.revealed_count` of them.
    pub fn deal(roster: &Roster, config: &MatchConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        if roster.len() < config.deck_size {
            return Err(ConfigError::RosterTooSmall {
                roster: roster.len(),
                deck_size: config.deck_size,
            });
        }
        if config.revealed_count > config.deck_size {
            return Err(ConfigError::TooManyRevealed {
                revealed: config.revealed_count,
                deck_size: config.deck_size,
            });
        }

        let mut indices: Vec<usize> = (0..roster.len()).collect();
        rng.shuffle(&mut indices);
        indices.truncate(config.deck_size);

        let mut positions: Vec<usize> = (0..config.deck_size).collect();
        rng.shuffle(&mut positions);
        let mut revealed = vec![false; config.deck_size];
        for &position in positions.iter().take(config.revealed_count) {
            revealed[position] = true;
        }

        let cards = indices
            .iter()
            .zip(revealed)
            .enumerate()
            .filter_map(|(position, (&index, revealed))| {
                roster
                    .get(index)
                    .map(|character| DraftCard::new(position, character.clone(), revealed))
            })
            .collect();

        let deck = Self { cards };
        debug!(roster = ?indices, revealed = deck.revealed_count(), "dealt match deck");
        Ok(deck)
    }

    /// Card at a deck position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&DraftCard> {
        self.cards.get(position)
    }

    /// Number of cards dealt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &DraftCard> {
        self.cards.iter()
    }

    /// Cards still in the pool, in deck order.
    pub fn untaken(&self) -> impl Iterator<Item = &DraftCard> {
        self.cards.iter().filter(|c| !c.taken)
    }

    /// Number of face-up cards.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cards.iter().filter(|c| c.revealed).count()
    }

    /// Has every card been drafted?
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cards.iter().all(|c| c.taken)
    }

    /// Remove a card from the pool on behalf of `side`.
    ///
    /// Leaves the deck unchanged on rejection.
    pub(crate) fn take(&mut self, position: usize, side: Side) -> Result<DraftCard, Rejection> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(position)
            .ok_or(Rejection::OutOfRange { index: position, len })?;
        if card.taken {
            return Err(Rejection::AlreadyTaken(position));
        }
        card.take(side);
        Ok(card.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Character;
    use std::collections::HashSet;

    #[test]
    fn test_deal_shape() {
        let roster = Roster::standard();
        let config = MatchConfig::default();

        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let deck = Deck::deal(&roster, &config, &mut rng).unwrap();

            assert_eq!(deck.len(), 8);
            assert_eq!(deck.revealed_count(), 4);
            assert!(deck.iter().all(|c| !c.taken && c.owner.is_none()));

            // Drawn without replacement
            let names: HashSet<_> = deck.iter().map(|c| c.character.name.clone()).collect();
            assert_eq!(names.len(), 8);

            // Positions match deck order
            for (i, card) in deck.iter().enumerate() {
                assert_eq!(card.position, i);
            }
        }
    }

    #[test]
    fn test_deal_is_deterministic() {
        let roster = Roster::standard();
        let config = MatchConfig::default();

        let a = Deck::deal(&roster, &config, &mut GameRng::new(99)).unwrap();
        let b = Deck::deal(&roster, &config, &mut GameRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_character_can_be_dealt() {
        let roster = Roster::standard();
        let config = MatchConfig::default();
        let mut seen = HashSet::new();

        for seed in 0..200 {
            let deck = Deck::deal(&roster, &config, &mut GameRng::new(seed)).unwrap();
            seen.extend(deck.iter().map(|c| c.character.name.clone()));
        }

        assert_eq!(seen.len(), roster.len());
    }

    #[test]
    fn test_roster_too_small() {
        let roster = Roster::new(vec![Character::new("Solo", 5, 5, 5, 5)]).unwrap();
        let result = Deck::deal(&roster, &MatchConfig::default(), &mut GameRng::new(1));
        assert_eq!(
            result,
            Err(ConfigError::RosterTooSmall { roster: 1, deck_size: 8 })
        );
    }

    #[test]
    fn test_take_guards() {
        let mut deck = Deck::deal(&Roster::standard(), &MatchConfig::default(), &mut GameRng::new(5)).unwrap();

        let card = deck.take(3, Side::Player).unwrap();
        assert_eq!(card.position, 3);
        assert_eq!(card.owner, Some(Side::Player));

        assert_eq!(deck.take(3, Side::Opponent), Err(Rejection::AlreadyTaken(3)));
        assert_eq!(deck.take(8, Side::Player), Err(Rejection::OutOfRange { index: 8, len: 8 }));
        assert_eq!(deck.get(3).and_then(|c| c.owner), Some(Side::Player));
        assert_eq!(deck.untaken().count(), 7);
    }
}
