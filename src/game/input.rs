//! Events a render collaborator feeds into a [`Game`](super::Game).

use serde::{Deserialize, Serialize};

use crate::cards::Attribute;
use crate::core::Rejection;

/// A discrete user trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// Acknowledge the coin toss and deal the draft.
    ContinueFromCoin,
    /// Click a card in the draft pool (deck position).
    DeckCard(usize),
    /// Leave the finished draft and start the battle.
    ContinueToBattle,
    /// Click a card in the player's battle hand (hand index).
    HandCard(usize),
    /// Click an attribute button.
    Attribute(Attribute),
    /// Roll the dice.
    Roll,
    /// Start the next battle round.
    NextRound,
    /// Start a new match from the end screen.
    PlayAgain,
}

impl Input {
    /// Short name used in logs and rejections.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Input::ContinueFromCoin => "continue from coin",
            Input::DeckCard(_) => "deck card",
            Input::ContinueToBattle => "continue to battle",
            Input::HandCard(_) => "hand card",
            Input::Attribute(_) => "attribute",
            Input::Roll => "roll",
            Input::NextRound => "next round",
            Input::PlayAgain => "play again",
        }
    }
}

/// What became of a dispatched input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The input moved the game forward.
    Applied,
    /// The input was a no-op; state is unchanged.
    Ignored(Rejection),
}

impl Dispatch {
    /// Did the input change anything?
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Dispatch::Applied)
    }
}

impl From<Result<(), Rejection>> for Dispatch {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Dispatch::Applied,
            Err(reason) => Dispatch::Ignored(reason),
        }
    }
}
