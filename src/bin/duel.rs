//! Terminal driver: play a match line by line.
//!
//! Environment:
//! - `DUEL_SEED`: fixed RNG seed (random when unset)
//! - `DUEL_LEADERBOARD`: leaderboard file (default `leaderboard.json`)
//! - `RUST_LOG`: log filter, logs go to stderr

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use generals_duel::battle::BattlePhase;
use generals_duel::draft::{pick_order, DraftStatus};
use generals_duel::score::WinTier;
use generals_duel::{
    Attribute, Dispatch, DraftCard, Game, GameBuilder, Input, JsonFileStore, LeaderboardEntry,
    LeaderboardStore, MatchConfig, Side, Stage,
};

/// Driver settings.
#[derive(Clone, Debug)]
struct DriverConfig {
    seed: Option<u64>,
    leaderboard_path: PathBuf,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: None,
            leaderboard_path: PathBuf::from("leaderboard.json"),
        }
    }
}

impl DriverConfig {
    fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("DUEL_SEED") {
            config.seed = Some(seed);
        }
        if let Some(path) = read_env::<PathBuf>("DUEL_LEADERBOARD") {
            config.leaderboard_path = path;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

enum Command {
    Input(Input),
    Submit(String),
    Rules,
    Unknown,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DriverConfig::from_env();
    let store = JsonFileStore::new(&config.leaderboard_path);

    let builder = GameBuilder::new();
    let mut game = match config.seed {
        Some(seed) => builder.build(seed)?,
        None => builder.build_from_entropy()?,
    };

    println!("Type 'rules' for how to play.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render(&game, &store);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            break;
        }

        match read_command(&game, line) {
            Command::Input(input) => {
                if let Dispatch::Ignored(reason) = game.dispatch(input) {
                    println!("  ({reason})");
                }
            }
            Command::Submit(name) => match game.submit_score(&name, &store) {
                Ok(top) => print_leaderboard(&top),
                Err(err) => println!("  ({err})"),
            },
            Command::Rules => print_rules(game.config()),
            Command::Unknown => println!("  (unrecognized command)"),
        }
    }

    Ok(())
}

/// Map a typed line to an event for the current stage.
fn read_command(game: &Game, line: &str) -> Command {
    if line.eq_ignore_ascii_case("rules") || line.eq_ignore_ascii_case("help") || line == "?" {
        return Command::Rules;
    }

    match game.stage() {
        Stage::CoinToss { .. } => Command::Input(Input::ContinueFromCoin),
        Stage::Draft(draft) if draft.is_complete() => Command::Input(Input::ContinueToBattle),
        Stage::Draft(_) => line
            .parse()
            .map_or(Command::Unknown, |position| Command::Input(Input::DeckCard(position))),
        Stage::Battle(battle) => match battle.phase() {
            BattlePhase::AwaitingCardSelection => line
                .parse()
                .map_or(Command::Unknown, |index| Command::Input(Input::HandCard(index))),
            BattlePhase::AwaitingAttributeChoice => line
                .parse::<Attribute>()
                .map_or(Command::Unknown, |attribute| Command::Input(Input::Attribute(attribute))),
            BattlePhase::RevealedAwaitingRoll => Command::Input(Input::Roll),
            BattlePhase::RoundResolved | BattlePhase::MatchComplete => Command::Input(Input::NextRound),
        },
        Stage::Finished(_) => {
            if line.eq_ignore_ascii_case("again") || line.eq_ignore_ascii_case("a") {
                Command::Input(Input::PlayAgain)
            } else if game.can_submit() {
                Command::Submit(line.to_string())
            } else {
                Command::Unknown
            }
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

fn render(game: &Game, store: &dyn LeaderboardStore) {
    println!();
    match game.stage() {
        Stage::CoinToss { first } => {
            match first {
                Side::Player => println!("The coin favours you: you draft first and attack first."),
                Side::Opponent => println!("The coin favours the opponent: they draft first and attack first."),
            }
            println!("[Enter] to deal the draft pool.");
        }
        Stage::Draft(draft) => {
            println!("Draft pool:");
            for card in draft.deck().iter() {
                println!("  [{}] {}", card.position, pool_line(card));
            }
            print_hand("Your picks", game, &[]);

            match draft.status() {
                DraftStatus::Picking { remaining, .. } => {
                    println!("Pick {remaining} more: enter a pool position.");
                }
                DraftStatus::Complete => println!("Draft complete. [Enter] to start the battle."),
            }
        }
        Stage::Battle(battle) => {
            let state = battle.state();
            println!(
                "Round {}/{}  You {} : {} Opponent  ({} attacks)",
                state.round,
                battle.rounds(),
                state.scores[Side::Player],
                state.scores[Side::Opponent],
                role(state.attacker)
            );
            print_hand("Your hand", game, &state.played[Side::Player]);

            if let (Some(mine), Some(theirs)) =
                (battle.committed_card(Side::Player), battle.committed_card(Side::Opponent))
            {
                println!("  You commit {}", mine.character);
                println!("  Opponent commits {}", theirs.character);
            }

            match battle.phase() {
                BattlePhase::AwaitingCardSelection => println!("Choose a card: enter a hand index."),
                BattlePhase::AwaitingAttributeChoice => {
                    println!("You attack. Choose: strategy, command, martial, influence.");
                }
                BattlePhase::RevealedAwaitingRoll => {
                    if let Some(attribute) = battle.selection().and_then(|s| s.attribute) {
                        println!("Contest on {attribute}. [Enter] to roll.");
                    }
                }
                BattlePhase::RoundResolved | BattlePhase::MatchComplete => {
                    if let Some(report) = battle.history().last() {
                        println!("  {report}");
                    }
                    println!("[Enter] for the next round.");
                }
            }
        }
        Stage::Finished(finished) => {
            for report in finished.battle.history() {
                println!("  {report}");
            }
            println!("{}", finished.summary.score_line());
            println!("{}", finished.summary.outcome.message());

            let top = game.leaderboard_preview(store);
            if !top.is_empty() {
                print_leaderboard(&top);
            }
            if game.can_submit() {
                println!("Enter your name to record the score, or 'again' to play again.");
            } else {
                println!("'again' to play again, 'quit' to leave.");
            }
        }
    }
}

fn print_rules(config: &MatchConfig) {
    for line in rules_text(config) {
        println!("{line}");
    }
}

/// Draft order, battle rules and scoring tiers for `config`.
fn rules_text(config: &MatchConfig) -> Vec<String> {
    let order: Vec<String> = pick_order(Side::Player, &config.pick_counts)
        .iter()
        .map(|step| format!("{}{}", if step.side == Side::Player { "A" } else { "B" }, step.count))
        .collect();

    vec![
        "Rules:".to_string(),
        format!(
            "  Draft: {} generals are dealt, {} of them face up.",
            config.deck_size, config.revealed_count
        ),
        format!("    The coin winner (A) drafts first; picks go {}.", order.join(" ")),
        format!("  Battle: {} rounds. Both sides commit an unused general.", config.rounds),
        format!(
            "    The attacker names an attribute; each side adds a die roll (0-{}).",
            config.die_faces.saturating_sub(1)
        ),
        "    The higher total scores the margin and the loser attacks next; a tie changes nothing."
            .to_string(),
        format!(
            "  Scoring: a win by 1-2 is {:?}, 3-5 is {:?}, more than 5 is {:?}.",
            WinTier::Steady,
            WinTier::Cunning,
            WinTier::Masterful
        ),
        "    Only wins can be recorded on the leaderboard.".to_string(),
    ]
}

fn pool_line(card: &DraftCard) -> String {
    match (card.owner, card.public_view()) {
        (Some(Side::Player), _) => format!("(yours) {}", card.character),
        (Some(Side::Opponent), Some(character)) => format!("(opponent) {character}"),
        (Some(Side::Opponent), None) => "(opponent) covered".to_string(),
        (None, Some(character)) => character.to_string(),
        (None, None) => "covered".to_string(),
    }
}

fn print_hand(title: &str, game: &Game, played: &[usize]) {
    let Some(hand) = game.hand(Side::Player) else { return };
    if hand.is_empty() {
        return;
    }

    println!("{title}:");
    for (index, card) in hand.iter().enumerate() {
        let mark = if played.contains(&index) { " (played)" } else { "" };
        println!("  [{index}] {}{mark}", card.character);
    }
}

fn print_leaderboard(entries: &[LeaderboardEntry]) {
    println!("Leaderboard:");
    for (rank, entry) in entries.iter().enumerate() {
        println!("  {}. {} - {}", rank + 1, entry.name, entry.score);
    }
}

fn role(side: Side) -> &'static str {
    match side {
        Side::Player => "you",
        Side::Opponent => "opponent",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_follow_config() {
        let text = rules_text(&MatchConfig::default()).join("\n");

        assert!(text.contains("8 generals are dealt, 4 of them face up"));
        assert!(text.contains("picks go A1 B2 A2 B2 A1"));
        assert!(text.contains("3 rounds"));
        assert!(text.contains("die roll (0-3)"));
        assert!(text.contains("Masterful"));
    }

    #[test]
    fn test_rules_command_works_in_any_stage() {
        let mut game = GameBuilder::new().build(5).unwrap();

        assert!(matches!(read_command(&game, "rules"), Command::Rules));
        game.dispatch(Input::ContinueFromCoin);
        assert!(matches!(read_command(&game, "HELP"), Command::Rules));
        assert!(matches!(read_command(&game, "?"), Command::Rules));
    }
}
