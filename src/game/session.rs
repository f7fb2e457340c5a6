//! The match session.
//!
//! Ties the coin toss, draft, battle and end screen into one state machine
//! driven by [`Input`] events. Every stage owns its coordinator, so the
//! session never has to keep half-valid state around between stages.
//!
//! ```text
//! CoinToss --ContinueFromCoin--> Draft --ContinueToBattle--> Battle
//!     ^                                                        |
//!     +------------------PlayAgain---- Finished <--last roll---+
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

use super::input::{Dispatch, Input};
use super::snapshot::GameSnapshot;
use crate::battle::{Battle, BattlePolicy, MatchState, StandardBattlePolicy};
use crate::cards::{Hand, Roster};
use crate::core::{ConfigError, GameRng, LeaderboardConfig, MatchConfig, Rejection, Side, SideMap};
use crate::draft::{Deck, Draft, DraftPolicy, StandardDraftPolicy};
use crate::score::{self, Leaderboard, LeaderboardEntry, LeaderboardError, LeaderboardStore, MatchSummary};

/// End-of-match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finished {
    /// The completed battle, kept for its round history and hands.
    pub battle: Battle,
    /// Final scores and outcome.
    pub summary: MatchSummary,
    /// Has a leaderboard entry been recorded for this match?
    pub submitted: bool,
}

/// Top-level stage of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Coin has been tossed; `first` drafts first and attacks first.
    CoinToss { first: Side },
    /// Drafting (possibly complete, waiting for `ContinueToBattle`).
    Draft(Draft),
    /// Battle rounds.
    Battle(Battle),
    /// Match over.
    Finished(Finished),
}

impl Stage {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Stage::CoinToss { .. } => "coin toss",
            Stage::Draft(_) => "draft",
            Stage::Battle(_) => "battle",
            Stage::Finished(_) => "finished",
        }
    }
}

/// Failure to record a leaderboard entry.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission refused: {0}")]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Store(#[from] LeaderboardError),
}

/// Builder for a [`Game`].
pub struct GameBuilder {
    config: MatchConfig,
    leaderboard: LeaderboardConfig,
    roster: Roster,
    draft_policy: Box<dyn DraftPolicy>,
    battle_policy: Box<dyn BattlePolicy>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            leaderboard: LeaderboardConfig::default(),
            roster: Roster::standard(),
            draft_policy: Box::new(StandardDraftPolicy),
            battle_policy: Box::new(StandardBattlePolicy),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn leaderboard(mut self, config: LeaderboardConfig) -> Self {
        self.leaderboard = config;
        self
    }

    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    pub fn draft_policy(mut self, policy: impl DraftPolicy + 'static) -> Self {
        self.draft_policy = Box::new(policy);
        self
    }

    pub fn battle_policy(mut self, policy: impl BattlePolicy + 'static) -> Self {
        self.battle_policy = Box::new(policy);
        self
    }

    /// Validate the setup and toss the coin for the first match.
    pub fn build(self, seed: u64) -> Result<Game, ConfigError> {
        self.start(GameRng::new(seed))
    }

    /// Like [`build`](Self::build) with an OS-random seed.
    pub fn build_from_entropy(self) -> Result<Game, ConfigError> {
        self.start(GameRng::from_entropy())
    }

    /// Resume a suspended match. Policies come from this builder; rules,
    /// roster and RNG state come from the snapshot.
    pub fn restore(self, snapshot: GameSnapshot) -> Result<Game, ConfigError> {
        let roster = Roster::new(snapshot.roster.iter().cloned().collect())?;
        check_setup(&snapshot.config, &roster)?;

        debug!(stage = snapshot.stage.name(), matches = snapshot.matches_played, "game restored");
        Ok(Game {
            config: snapshot.config,
            leaderboard: snapshot.leaderboard,
            roster,
            rng: GameRng::from_state(&snapshot.rng),
            draft_policy: self.draft_policy,
            battle_policy: self.battle_policy,
            first: snapshot.first,
            stage: snapshot.stage,
            matches_played: snapshot.matches_played,
        })
    }

    fn start(self, rng: GameRng) -> Result<Game, ConfigError> {
        check_setup(&self.config, &self.roster)?;

        let mut game = Game {
            config: self.config,
            leaderboard: self.leaderboard,
            roster: self.roster,
            rng,
            draft_policy: self.draft_policy,
            battle_policy: self.battle_policy,
            first: Side::Player,
            stage: Stage::CoinToss { first: Side::Player },
            matches_played: 0,
        };
        game.toss_coin();
        Ok(game)
    }
}

fn check_setup(config: &MatchConfig, roster: &Roster) -> Result<(), ConfigError> {
    config.validate()?;
    if roster.len() < config.deck_size {
        return Err(ConfigError::RosterTooSmall {
            roster: roster.len(),
            deck_size: config.deck_size,
        });
    }
    Ok(())
}

/// One player's session: a sequence of matches against the computer.
pub struct Game {
    config: MatchConfig,
    leaderboard: LeaderboardConfig,
    roster: Roster,
    rng: GameRng,
    draft_policy: Box<dyn DraftPolicy>,
    battle_policy: Box<dyn BattlePolicy>,
    first: Side,
    stage: Stage,
    matches_played: u32,
}

impl Game {
    /// Feed one input event. Inputs that make no sense right now are
    /// ignored and leave the game unchanged.
    pub fn dispatch(&mut self, input: Input) -> Dispatch {
        let result = self.apply(input);
        if let Err(reason) = result {
            debug!(input = input.name(), stage = self.stage.name(), %reason, "input ignored");
        }
        Dispatch::from(result)
    }

    /// Like [`dispatch`](Self::dispatch), but hands the rejection back as
    /// an error.
    pub fn apply(&mut self, input: Input) -> Result<(), Rejection> {
        match input {
            Input::ContinueFromCoin => self.start_draft(),
            Input::DeckCard(position) => match &mut self.stage {
                Stage::Draft(draft) => draft
                    .pick(position, self.draft_policy.as_ref(), &mut self.rng)
                    .map(|_| ()),
                _ => Err(Rejection::WrongPhase(input.name())),
            },
            Input::ContinueToBattle => self.start_battle(),
            Input::HandCard(index) => match &mut self.stage {
                Stage::Battle(battle) => battle
                    .select_card(index, self.battle_policy.as_ref(), &mut self.rng)
                    .map(|_| ()),
                other => Err(not_in_battle(other, input)),
            },
            Input::Attribute(attribute) => match &mut self.stage {
                Stage::Battle(battle) => battle.choose_attribute(attribute),
                other => Err(not_in_battle(other, input)),
            },
            Input::Roll => {
                match &mut self.stage {
                    Stage::Battle(battle) => battle.roll(&mut self.rng)?,
                    other => return Err(not_in_battle(other, input)),
                };
                self.finish_if_complete();
                Ok(())
            }
            Input::NextRound => match &mut self.stage {
                Stage::Battle(battle) => battle.next_round(),
                other => Err(not_in_battle(other, input)),
            },
            Input::PlayAgain => {
                if !matches!(self.stage, Stage::Finished(_)) {
                    return Err(Rejection::WrongPhase(input.name()));
                }
                self.toss_coin();
                Ok(())
            }
        }
    }

    /// Record the player's winning score.
    ///
    /// Allowed once per won match. Returns the leaderboard's top entries
    /// after the submission.
    pub fn submit_score(
        &mut self,
        name: &str,
        store: &dyn LeaderboardStore,
    ) -> Result<Vec<LeaderboardEntry>, SubmitError> {
        let Stage::Finished(finished) = &mut self.stage else {
            return Err(Rejection::WrongPhase("submit score").into());
        };
        if !finished.summary.outcome.shows_leaderboard() {
            return Err(Rejection::NotAWin.into());
        }
        if finished.submitted {
            return Err(Rejection::AlreadySubmitted.into());
        }

        let player_score = finished.summary.scores[Side::Player];
        let top = score::submit_score(store, name, player_score, &self.leaderboard)?;
        finished.submitted = true;

        info!(score = player_score, "score submitted");
        Ok(top)
    }

    /// Leaderboard entries to show on the end screen.
    ///
    /// Empty unless the player won.
    pub fn leaderboard_preview(&self, store: &dyn LeaderboardStore) -> Vec<LeaderboardEntry> {
        match &self.stage {
            Stage::Finished(finished) if finished.summary.outcome.shows_leaderboard() => {
                Leaderboard::load_or_empty(store).top(self.leaderboard.display_count).to_vec()
            }
            _ => Vec::new(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current stage.
    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Coin-toss winner of the current match.
    #[must_use]
    pub fn first(&self) -> Side {
        self.first
    }

    /// The draft pool, while drafting.
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        match &self.stage {
            Stage::Draft(draft) => Some(draft.deck()),
            _ => None,
        }
    }

    /// One side's cards, once the draft has started.
    #[must_use]
    pub fn hand(&self, side: Side) -> Option<&Hand> {
        match &self.stage {
            Stage::CoinToss { .. } => None,
            Stage::Draft(draft) => Some(draft.hand(side)),
            Stage::Battle(battle) => Some(battle.hand(side)),
            Stage::Finished(finished) => Some(finished.battle.hand(side)),
        }
    }

    /// Battle state, once the battle has started.
    #[must_use]
    pub fn match_state(&self) -> Option<&MatchState> {
        self.battle().map(Battle::state)
    }

    /// The battle coordinator, during and after the battle.
    #[must_use]
    pub fn battle(&self) -> Option<&Battle> {
        match &self.stage {
            Stage::Battle(battle) => Some(battle),
            Stage::Finished(finished) => Some(&finished.battle),
            _ => None,
        }
    }

    /// Indices the player may click right now: deck positions while
    /// drafting, hand indices while selecting a battle card.
    #[must_use]
    pub fn playable_indices(&self) -> Vec<usize> {
        match &self.stage {
            Stage::Draft(draft) => draft.pickable_positions(),
            Stage::Battle(battle) => battle.playable_indices(),
            _ => Vec::new(),
        }
    }

    /// Current scores (zero before the battle).
    #[must_use]
    pub fn scores(&self) -> SideMap<u32> {
        self.match_state()
            .map_or_else(|| SideMap::with_value(0), |state| state.scores)
    }

    /// Final summary, once the match is over.
    #[must_use]
    pub fn summary(&self) -> Option<&MatchSummary> {
        match &self.stage {
            Stage::Finished(finished) => Some(&finished.summary),
            _ => None,
        }
    }

    /// Can the player still submit a score for this match?
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(
            &self.stage,
            Stage::Finished(f) if f.summary.outcome.shows_leaderboard() && !f.submitted
        )
    }

    /// Rules in force.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Matches started in this session, including the current one.
    #[must_use]
    pub fn matches_played(&self) -> u32 {
        self.matches_played
    }

    /// Capture the session for later [`GameBuilder::restore`].
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            leaderboard: self.leaderboard.clone(),
            roster: self.roster.clone(),
            rng: self.rng.state(),
            first: self.first,
            stage: self.stage.clone(),
            matches_played: self.matches_played,
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    fn toss_coin(&mut self) {
        self.first = if self.rng.coin_flip() { Side::Player } else { Side::Opponent };
        self.stage = Stage::CoinToss { first: self.first };
        self.matches_played += 1;

        info!(first = %self.first, match_number = self.matches_played, "match started");
    }

    fn start_draft(&mut self) -> Result<(), Rejection> {
        if !matches!(self.stage, Stage::CoinToss { .. }) {
            return Err(Rejection::WrongPhase(Input::ContinueFromCoin.name()));
        }

        let deck = match Deck::deal(&self.roster, &self.config, &mut self.rng) {
            Ok(deck) => deck,
            Err(err) => {
                // Setup is validated when the game is built
                error!(%err, "cannot deal the draft pool");
                return Err(Rejection::WrongPhase(Input::ContinueFromCoin.name()));
            }
        };

        let draft = Draft::begin(
            deck,
            self.first,
            &self.config.pick_counts,
            self.draft_policy.as_ref(),
            &mut self.rng,
        );
        self.stage = Stage::Draft(draft);
        Ok(())
    }

    fn start_battle(&mut self) -> Result<(), Rejection> {
        let placeholder = Stage::CoinToss { first: self.first };
        match std::mem::replace(&mut self.stage, placeholder) {
            Stage::Draft(draft) if draft.is_complete() => {
                let battle = Battle::new(draft.into_hands(), self.first, &self.config);
                self.stage = Stage::Battle(battle);
                Ok(())
            }
            other => {
                self.stage = other;
                Err(Rejection::WrongPhase(Input::ContinueToBattle.name()))
            }
        }
    }

    fn finish_if_complete(&mut self) {
        let placeholder = Stage::CoinToss { first: self.first };
        match std::mem::replace(&mut self.stage, placeholder) {
            Stage::Battle(battle) if battle.is_complete() => {
                let summary = MatchSummary::new(battle.state().scores);
                info!(
                    outcome = ?summary.outcome,
                    player = summary.scores[Side::Player],
                    opponent = summary.scores[Side::Opponent],
                    "match finished"
                );
                self.stage = Stage::Finished(Finished {
                    battle,
                    summary,
                    submitted: false,
                });
            }
            other => self.stage = other,
        }
    }
}

fn not_in_battle(stage: &Stage, input: Input) -> Rejection {
    match stage {
        Stage::Finished(_) => Rejection::MatchComplete,
        _ => Rejection::WrongPhase(input.name()),
    }
}
