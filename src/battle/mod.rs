//! The battle phase: three rounds of card-versus-card.
//!
//! - `state`: scores, attacker role and used cards
//! - `round`: dice-plus-attribute resolution and round reports
//! - `policy`: the opponent's card and attribute choices
//! - `coordinator`: the phase state machine

pub mod coordinator;
pub mod policy;
pub mod round;
pub mod state;

pub use coordinator::{Battle, BattlePhase, Selection};
pub use policy::{BattlePolicy, StandardBattlePolicy};
pub use round::{resolve_totals, RoundReport};
pub use state::{MatchState, RoundOutcome};
