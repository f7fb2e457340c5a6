//! Match session: stage machine, input events and snapshots.

pub mod input;
pub mod session;
pub mod snapshot;

pub use input::{Dispatch, Input};
pub use session::{Finished, Game, GameBuilder, Stage, SubmitError};
pub use snapshot::{GameSnapshot, SnapshotError};
