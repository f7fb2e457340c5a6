//! Error types shared across the engine.
//!
//! [`Rejection`] is the reason an input event was refused. Rejections are
//! guards, not failures: a rejected call leaves every piece of state exactly
//! as it was, and the session layer turns them into silent no-ops.
//!
//! [`ConfigError`] reports a configuration or roster that cannot produce a
//! playable match.

use crate::cards::Attribute;

/// Why an input event was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("index {index} is out of range (size {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("deck card {0} has already been taken")]
    AlreadyTaken(usize),

    #[error("hand card {0} has already been played")]
    AlreadyPlayed(usize),

    #[error("{0} is not expected in the current phase")]
    WrongPhase(&'static str),

    #[error("it is not the player's turn to pick")]
    NotPlayersTurn,

    #[error("the draft is already complete")]
    DraftComplete,

    #[error("the match is already complete")]
    MatchComplete,

    #[error("attribute {0} cannot be chosen by the defender")]
    NotAttacker(Attribute),

    #[error("the opponent has no card left to commit")]
    OpponentExhausted,

    #[error("only a winning match may be submitted")]
    NotAWin,

    #[error("this match has already been submitted")]
    AlreadySubmitted,
}

/// Invalid match configuration or roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("every draft step must pick at least one card")]
    EmptyPickStep,

    #[error("draft picks total {picks} but the deck holds {deck_size}")]
    PickTotalMismatch { picks: usize, deck_size: usize },

    #[error("draft schedule gives {first} cards to the first side and {second} to the second")]
    UnevenHands { first: usize, second: usize },

    #[error("{revealed} revealed cards do not fit a deck of {deck_size}")]
    TooManyRevealed { revealed: usize, deck_size: usize },

    #[error("{rounds} rounds cannot be played from a hand of {hand_size}")]
    InvalidRounds { rounds: u8, hand_size: usize },

    #[error("the battle die needs at least one face")]
    NoDieFaces,

    #[error("roster of {roster} characters cannot fill a deck of {deck_size}")]
    RosterTooSmall { roster: usize, deck_size: usize },

    #[error("character {name:?} has {attribute} {value}, outside {min}..={max}")]
    StatOutOfRange {
        name: String,
        attribute: Attribute,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("character at roster position {0} has an empty name")]
    UnnamedCharacter(usize),
}
