//! # generals-duel
//!
//! Rules engine for a two-player card duel: a human player against a
//! computer-controlled opponent, both commanding historical generals.
//!
//! A match runs in three stages:
//!
//! 1. **Coin toss**: the winner drafts first and attacks first.
//! 2. **Draft**: eight cards are dealt from the roster, four face up and
//!    four face down; the sides alternate picks 1-2-2-2-1 until each holds
//!    four cards.
//! 3. **Battle**: three rounds. Each side commits an unused card, the
//!    attacker names an attribute, both add a die roll, and the higher total
//!    scores the margin. The round's loser attacks next.
//!
//! A won match may be submitted to a persisted leaderboard.
//!
//! ## Design Principles
//!
//! - **Explicit state machines**: every stage is an owned coordinator with
//!   transition methods. Out-of-phase or duplicate inputs are rejected and
//!   never mutate state.
//! - **Injected randomness**: all shuffles, picks and dice come from a
//!   seedable [`GameRng`], so a seed reproduces a match exactly.
//! - **Pluggable opponent**: draft and battle decisions sit behind the
//!   [`DraftPolicy`](draft::DraftPolicy) and
//!   [`BattlePolicy`](battle::BattlePolicy) traits.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, errors
//! - `cards`: attributes, characters, roster, draft cards and hands
//! - `draft`: deck dealing, pick schedule, opponent draft policy, coordinator
//! - `battle`: round resolution, match state, opponent battle policy, coordinator
//! - `score`: outcome classification and the leaderboard
//! - `game`: the session tying everything together, plus snapshots

pub mod battle;
pub mod cards;
pub mod core;
pub mod draft;
pub mod game;
pub mod score;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DieRoller, GameRng, GameRngState, LeaderboardConfig, MatchConfig, Rejection, Side,
    SideMap,
};

pub use crate::cards::{Attribute, Character, DraftCard, Hand, Roster, StatLine};

pub use crate::draft::{Deck, Draft, DraftPolicy, DraftStatus, StandardDraftPolicy};

pub use crate::battle::{
    Battle, BattlePhase, BattlePolicy, MatchState, RoundOutcome, RoundReport, StandardBattlePolicy,
};

pub use crate::score::{
    JsonFileStore, Leaderboard, LeaderboardEntry, LeaderboardError, LeaderboardStore, MatchOutcome,
    MatchSummary, MemoryStore, WinTier,
};

pub use crate::game::{Dispatch, Game, GameBuilder, GameSnapshot, Input, SnapshotError, Stage, SubmitError};
