//! Core engine types: sides, RNG, configuration, errors.
//!
//! Everything here is game-phase agnostic. The draft, battle and score
//! modules build on these types.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use config::{LeaderboardConfig, MatchConfig};
pub use error::{ConfigError, Rejection};
pub use rng::{DieRoller, GameRng, GameRngState};
pub use side::{Side, SideMap};
