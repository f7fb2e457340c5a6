//! Benchmarks for complete matches, coin toss to final summary.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use generals_duel::battle::BattlePhase;
use generals_duel::draft::{Deck, Draft, StandardDraftPolicy};
use generals_duel::{Attribute, Game, GameBuilder, GameRng, Input, MatchConfig, Roster, Side, Stage};

/// Play one match, always clicking the first offered index.
fn play(game: &mut Game) {
    loop {
        let input = match game.stage() {
            Stage::CoinToss { .. } => Input::ContinueFromCoin,
            Stage::Draft(draft) if draft.is_complete() => Input::ContinueToBattle,
            Stage::Draft(_) => Input::DeckCard(game.playable_indices()[0]),
            Stage::Battle(battle) => match battle.phase() {
                BattlePhase::AwaitingCardSelection => Input::HandCard(game.playable_indices()[0]),
                BattlePhase::AwaitingAttributeChoice => Input::Attribute(Attribute::Martial),
                BattlePhase::RevealedAwaitingRoll => Input::Roll,
                BattlePhase::RoundResolved | BattlePhase::MatchComplete => Input::NextRound,
            },
            Stage::Finished(_) => return,
        };
        game.dispatch(input);
    }
}

fn bench_single_match(c: &mut Criterion) {
    c.bench_function("single_match", |b| {
        b.iter(|| {
            let mut game = GameBuilder::new().build(black_box(42)).unwrap();
            play(&mut game);
            black_box(game.scores())
        });
    });
}

fn bench_session(c: &mut Criterion) {
    // Ten matches back to back through PlayAgain
    c.bench_function("10_matches_session", |b| {
        b.iter(|| {
            let mut game = GameBuilder::new().build(black_box(7)).unwrap();
            for _ in 0..10 {
                play(&mut game);
                game.dispatch(Input::PlayAgain);
            }
            black_box(game.matches_played())
        });
    });
}

fn bench_draft_only(c: &mut Criterion) {
    let roster = Roster::standard();
    let config = MatchConfig::default();

    c.bench_function("draft_only", |b| {
        b.iter(|| {
            let mut rng = GameRng::new(black_box(3));
            let deck = Deck::deal(&roster, &config, &mut rng).unwrap();
            let mut draft = Draft::begin(deck, Side::Player, &config.pick_counts, &StandardDraftPolicy, &mut rng);
            while let Some(&position) = draft.pickable_positions().first() {
                let _ = draft.pick(position, &StandardDraftPolicy, &mut rng);
            }
            black_box(draft.into_hands())
        });
    });
}

criterion_group!(benches, bench_single_match, bench_session, bench_draft_only);
criterion_main!(benches);
