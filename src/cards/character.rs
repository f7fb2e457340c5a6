//! Character templates - static card data.
//!
//! A `Character` is the immutable template a draft card is dealt from:
//! a name and four attribute scores. Per-match data (revealed, taken,
//! deck position) lives on [`DraftCard`](super::DraftCard).

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, StatLine};

/// Lowest legal attribute score.
pub const MIN_STAT: u8 = 3;

/// Highest legal attribute score.
pub const MAX_STAT: u8 = 10;

/// Immutable character template.
///
/// ```
/// use generals_duel::cards::{Attribute, Character};
///
/// let lu_bu = Character::new("Lu Bu", 3, 6, 10, 7);
/// assert_eq!(lu_bu.get(Attribute::Martial), 10);
/// assert_eq!(lu_bu.total(), 26);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,

    /// Attribute scores.
    pub stats: StatLine,
}

impl Character {
    /// Create a character from its name and scores in canonical order.
    #[must_use]
    pub fn new(name: impl Into<String>, strategy: u8, command: u8, martial: u8, influence: u8) -> Self {
        Self {
            name: name.into(),
            stats: StatLine::new(strategy, command, martial, influence),
        }
    }

    /// Value of one attribute.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> u8 {
        self.stats.get(attribute)
    }

    /// Sum of all four attributes.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.stats.total()
    }

    /// Highest single attribute value.
    #[must_use]
    pub fn best_value(&self) -> u8 {
        self.stats.best().1
    }

    /// First attribute outside `MIN_STAT..=MAX_STAT`, if any.
    #[must_use]
    pub fn out_of_range_stat(&self) -> Option<(Attribute, u8)> {
        self.stats
            .iter()
            .find(|&(_, v)| !(MIN_STAT..=MAX_STAT).contains(&v))
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = &self.stats;
        write!(
            f,
            "{} (STR {} / CMD {} / MAR {} / INF {})",
            self.name, s.strategy, s.command, s.martial, s.influence
        )
    }
}
