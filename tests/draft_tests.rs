//! Draft properties: dealing, pick schedule, partition of the pool, and the
//! opponent's draft policy.

use std::collections::HashSet;

use proptest::prelude::*;

use generals_duel::cards::{Character, DraftCard, Roster};
use generals_duel::core::{GameRng, MatchConfig, Side};
use generals_duel::draft::{Deck, Draft, DraftPolicy, PoolCard, StandardDraftPolicy};

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Player), Just(Side::Opponent)]
}

/// Run a whole draft with the player clicking random pickable positions.
fn run_draft(seed: u64, first: Side) -> Draft {
    let config = MatchConfig::default();
    let mut rng = GameRng::new(seed);
    let deck = Deck::deal(&Roster::standard(), &config, &mut rng).unwrap();
    let mut draft = Draft::begin(deck, first, &config.pick_counts, &StandardDraftPolicy, &mut rng);

    while !draft.is_complete() {
        let pickable = draft.pickable_positions();
        let position = *rng.choose(&pickable).unwrap();
        draft.pick(position, &StandardDraftPolicy, &mut rng).unwrap();
    }
    draft
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every deal has eight distinct characters, four of them face up.
    #[test]
    fn prop_deal_shape(seed in any::<u64>()) {
        let deck = Deck::deal(&Roster::standard(), &MatchConfig::default(), &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(deck.len(), 8);
        prop_assert_eq!(deck.revealed_count(), 4);

        let names: HashSet<&str> = deck.iter().map(|c| c.character.name.as_str()).collect();
        prop_assert_eq!(names.len(), 8);

        for (index, card) in deck.iter().enumerate() {
            prop_assert_eq!(card.position, index);
            prop_assert!(!card.taken);
        }
    }

    /// A finished draft splits the pool 4/4 with nothing left over.
    #[test]
    fn prop_draft_partitions_pool(seed in any::<u64>(), first in side_strategy()) {
        let draft = run_draft(seed, first);

        prop_assert!(draft.deck().is_exhausted());
        prop_assert_eq!(draft.hand(Side::Player).len(), 4);
        prop_assert_eq!(draft.hand(Side::Opponent).len(), 4);

        let mut positions: Vec<usize> = draft
            .hand(Side::Player)
            .positions()
            .chain(draft.hand(Side::Opponent).positions())
            .collect();
        positions.sort_unstable();
        prop_assert_eq!(positions, (0..8).collect::<Vec<_>>());

        for side in Side::ALL {
            for card in draft.hand(side).iter() {
                prop_assert_eq!(card.owner, Some(side));
            }
        }
    }

    /// Picks follow 1-2-2-2-1, alternating from the coin-toss winner.
    #[test]
    fn prop_pick_schedule(seed in any::<u64>(), first in side_strategy()) {
        let draft = run_draft(seed, first);
        let log = draft.log();
        prop_assert_eq!(log.len(), 8);

        let expected: Vec<(usize, Side)> = [1usize, 2, 2, 2, 1]
            .iter()
            .enumerate()
            .flat_map(|(step, &count)| {
                let side = if step % 2 == 0 { first } else { first.other() };
                std::iter::repeat((step, side)).take(count)
            })
            .collect();
        let actual: Vec<(usize, Side)> = log.iter().map(|r| (r.step, r.side)).collect();
        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn test_deal_picks_characters_uniformly() {
    let roster = Roster::standard();
    let config = MatchConfig::default();
    let names: Vec<String> = roster.iter().map(|c| c.name.clone()).collect();

    let deals = 10_000;
    let mut dealt = vec![0usize; names.len()];
    let mut revealed = vec![0usize; names.len()];
    let mut rng = GameRng::new(404);
    for _ in 0..deals {
        let deck = Deck::deal(&roster, &config, &mut rng).unwrap();
        for card in deck.iter() {
            let index = names.iter().position(|n| *n == card.character.name).unwrap();
            dealt[index] += 1;
            if card.revealed {
                revealed[index] += 1;
            }
        }
    }

    // Eight of ten dealt: expected 8000 each, standard deviation 40
    for (name, &count) in names.iter().zip(&dealt) {
        assert!((7700..=8300).contains(&count), "{name} dealt {count} times");
    }

    // Face up half the time regardless of which character it is
    for ((name, &shown), &count) in names.iter().zip(&revealed).zip(&dealt) {
        let ratio = shown as f64 / count as f64;
        assert!((0.45..=0.55).contains(&ratio), "{name} revealed ratio {ratio}");
    }
}

#[test]
fn test_covered_only_pool_is_uniform() {
    let cards: Vec<DraftCard> = (0..6).map(|i| card(i, 3 + i as u8, false)).collect();
    let pool: Vec<PoolCard<'_>> = cards.iter().map(PoolCard::of).collect();

    let trials = 6000;
    let mut counts = [0usize; 6];
    let mut rng = GameRng::new(77);
    for _ in 0..trials {
        let picks = StandardDraftPolicy.choose_picks(&pool, 1, &mut rng);
        assert_eq!(picks.len(), 1);
        counts[picks[0]] += 1;
    }

    for (position, &count) in counts.iter().enumerate() {
        assert!((800..=1200).contains(&count), "position {position} drawn {count} times");
    }
}

fn card(position: usize, base: u8, revealed: bool) -> DraftCard {
    DraftCard::new(position, Character::new(format!("g{position}"), base, base, base, base), revealed)
}

#[test]
fn test_mixed_pool_is_uniform() {
    // Face-up cards are much stronger, yet the opponent must not prefer them
    let cards: Vec<DraftCard> = (0..8).map(|i| card(i, if i < 4 { 10 } else { 3 }, i < 4)).collect();
    let pool: Vec<PoolCard<'_>> = cards.iter().map(PoolCard::of).collect();

    let trials = 8000;
    let mut counts = [0usize; 8];
    let mut rng = GameRng::new(2024);
    for _ in 0..trials {
        let picks = StandardDraftPolicy.choose_picks(&pool, 1, &mut rng);
        assert_eq!(picks.len(), 1);
        counts[picks[0]] += 1;
    }

    // Expected 1000 each; the bound is several standard deviations wide
    for (position, &count) in counts.iter().enumerate() {
        assert!((800..=1200).contains(&count), "position {position} drawn {count} times");
    }
}

#[test]
fn test_mixed_pool_two_picks_are_distinct() {
    let cards: Vec<DraftCard> = (0..5).map(|i| card(i, 5, i % 2 == 0)).collect();
    let pool: Vec<PoolCard<'_>> = cards.iter().map(PoolCard::of).collect();

    let mut rng = GameRng::new(8);
    for _ in 0..500 {
        let picks = StandardDraftPolicy.choose_picks(&pool, 2, &mut rng);
        assert_eq!(picks.len(), 2);
        assert_ne!(picks[0], picks[1]);
    }
}

#[test]
fn test_revealed_only_pool_is_deterministic() {
    let cards = vec![
        DraftCard::new(1, Character::new("a", 5, 5, 5, 5), true),
        DraftCard::new(4, Character::new("b", 9, 9, 9, 9), true),
        DraftCard::new(6, Character::new("c", 5, 5, 5, 5), true),
    ];
    let pool: Vec<PoolCard<'_>> = cards.iter().map(PoolCard::of).collect();

    for seed in 0..20 {
        let picks = StandardDraftPolicy.choose_picks(&pool, 2, &mut GameRng::new(seed));
        // Highest total first, then pool order between the equal pair
        assert_eq!(picks, vec![4, 1]);
    }
}
