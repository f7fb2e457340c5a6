//! Card system: attributes, character templates, roster, draft cards.
//!
//! ## Key Types
//!
//! - `Attribute`: one of the four contested stats, in canonical order
//! - `Character`: immutable template (name + stat line)
//! - `Roster`: validated pool of characters a deck is dealt from
//! - `DraftCard`: a character dealt into a match, with reveal/taken state
//! - `Hand`: the cards one side drafted

pub mod attributes;
pub mod character;
pub mod instance;
pub mod roster;

pub use attributes::{Attribute, StatLine, UnknownAttribute};
pub use character::{Character, MAX_STAT, MIN_STAT};
pub use instance::{DraftCard, Hand};
pub use roster::Roster;
