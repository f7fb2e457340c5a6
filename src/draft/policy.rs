//! Opponent draft policy.
//!
//! Policies are trait-based so alternative opponents can be plugged into a
//! match. A policy only ever sees the pool through [`PoolCard`], which hides
//! the stats of covered cards.

use tracing::debug;

use crate::cards::{Character, DraftCard};
use crate::core::GameRng;

// =============================================================================
// Pool View
// =============================================================================

/// An untaken deck card as seen from across the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolCard<'a> {
    /// Deck position.
    pub position: usize,

    /// The character if the card is face up, `None` if covered.
    pub revealed: Option<&'a Character>,
}

impl<'a> PoolCard<'a> {
    /// Public view of a deck card.
    #[must_use]
    pub fn of(card: &'a DraftCard) -> Self {
        Self {
            position: card.position,
            revealed: card.public_view(),
        }
    }

    /// Is this card covered?
    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.revealed.is_none()
    }
}

// =============================================================================
// Draft Policy
// =============================================================================

/// Policy for choosing the opponent's draft picks.
pub trait DraftPolicy: Send + Sync {
    /// Choose up to `need` distinct deck positions from `pool`.
    ///
    /// `pool` lists untaken cards in deck order. Implementations must return
    /// `min(need, pool.len())` positions, all present in `pool`.
    fn choose_picks(&self, pool: &[PoolCard<'_>], need: usize, rng: &mut GameRng) -> Vec<usize>;
}

/// The standard opponent.
///
/// - Mixed pool: uniform over every remaining card, covered or not. The
///   opponent deliberately does not exploit the face-up cards here.
/// - Only face-up cards left: highest attribute total first, pool order on
///   ties.
/// - Only covered cards left: uniform.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardDraftPolicy;

impl DraftPolicy for StandardDraftPolicy {
    fn choose_picks(&self, pool: &[PoolCard<'_>], need: usize, rng: &mut GameRng) -> Vec<usize> {
        let any_revealed = pool.iter().any(|c| !c.is_covered());
        let any_covered = pool.iter().any(PoolCard::is_covered);

        let picks = if any_revealed && !any_covered {
            strongest_revealed(pool, need)
        } else {
            uniform_picks(pool, need, rng)
        };

        debug!(need, pool = pool.len(), ?picks, any_revealed, any_covered, "opponent draft picks");
        picks
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Draw `need` positions uniformly without replacement.
pub fn uniform_picks(pool: &[PoolCard<'_>], need: usize, rng: &mut GameRng) -> Vec<usize> {
    let mut remaining: Vec<usize> = pool.iter().map(|c| c.position).collect();
    let mut picks = Vec::with_capacity(need.min(remaining.len()));

    while picks.len() < need && !remaining.is_empty() {
        let idx = rng.gen_range_usize(0..remaining.len());
        picks.push(remaining.remove(idx));
    }

    picks
}

/// The `need` face-up cards with the highest attribute totals.
///
/// The sort is stable, so equal totals keep pool order. Covered cards are
/// never returned.
#[must_use]
pub fn strongest_revealed(pool: &[PoolCard<'_>], need: usize) -> Vec<usize> {
    let mut ranked: Vec<(usize, u32)> = pool
        .iter()
        .filter_map(|c| c.revealed.map(|ch| (c.position, ch.total())))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(need).map(|(position, _)| position).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_of(cards: &[DraftCard]) -> Vec<PoolCard<'_>> {
        cards.iter().map(PoolCard::of).collect()
    }

    fn card(position: usize, total_base: u8, revealed: bool) -> DraftCard {
        DraftCard::new(
            position,
            Character::new(format!("c{position}"), total_base, total_base, total_base, total_base),
            revealed,
        )
    }

    #[test]
    fn test_pool_card_hides_covered_stats() {
        let cards = [card(0, 5, true), card(1, 9, false)];
        let pool = pool_of(&cards);

        assert!(pool[0].revealed.is_some());
        assert!(pool[1].is_covered());
        assert_eq!(pool[1].position, 1);
    }

    #[test]
    fn test_only_revealed_picks_strongest() {
        let cards = [card(0, 5, true), card(1, 9, true), card(2, 7, true)];
        let pool = pool_of(&cards);

        let picks = StandardDraftPolicy.choose_picks(&pool, 2, &mut GameRng::new(1));
        assert_eq!(picks, vec![1, 2]);
    }

    #[test]
    fn test_strongest_ties_keep_pool_order() {
        let cards = [card(3, 6, true), card(5, 8, true), card(6, 6, true)];
        let pool = pool_of(&cards);

        assert_eq!(strongest_revealed(&pool, 3), vec![5, 3, 6]);
        assert_eq!(strongest_revealed(&pool, 2), vec![5, 3]);
    }

    #[test]
    fn test_only_covered_is_random_but_complete() {
        let cards = [card(0, 5, false), card(1, 9, false), card(2, 7, false)];
        let pool = pool_of(&cards);

        let mut picks = StandardDraftPolicy.choose_picks(&pool, 2, &mut GameRng::new(4));
        assert_eq!(picks.len(), 2);
        picks.sort();
        picks.dedup();
        assert_eq!(picks.len(), 2);
        assert!(picks.iter().all(|p| *p < 3));
    }

    #[test]
    fn test_mixed_pool_can_pick_covered() {
        // A weak face-up card and a covered card: across seeds the covered
        // card must sometimes win even though the revealed card is visible.
        let cards = [card(0, 3, true), card(1, 10, false)];
        let pool = pool_of(&cards);

        let mut covered_picked = 0;
        for seed in 0..100 {
            let picks = StandardDraftPolicy.choose_picks(&pool, 1, &mut GameRng::new(seed));
            assert_eq!(picks.len(), 1);
            if picks[0] == 1 {
                covered_picked += 1;
            }
        }
        assert!(covered_picked > 20 && covered_picked < 80);
    }

    #[test]
    fn test_need_exceeds_pool() {
        let cards = [card(0, 5, true)];
        let pool = pool_of(&cards);

        assert_eq!(StandardDraftPolicy.choose_picks(&pool, 2, &mut GameRng::new(1)), vec![0]);

        let empty: Vec<PoolCard<'_>> = Vec::new();
        assert!(StandardDraftPolicy.choose_picks(&empty, 2, &mut GameRng::new(1)).is_empty());
    }
}
