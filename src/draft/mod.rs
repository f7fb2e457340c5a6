//! The draft phase: deck dealing, turn order, opponent picks.
//!
//! - `deck`: deals the shared pool with a partial reveal
//! - `schedule`: the alternating 1/2/2/2/1 pick order
//! - `policy`: how the opponent chooses cards it can only partly see
//! - `coordinator`: the state machine tying them together

pub mod coordinator;
pub mod deck;
pub mod policy;
pub mod schedule;

pub use coordinator::{Draft, DraftStatus, PickRecord};
pub use deck::Deck;
pub use policy::{DraftPolicy, PoolCard, StandardDraftPolicy};
pub use schedule::{pick_order, PickStep};
