//! The pool of characters a match deck is dealt from.
//!
//! [`Roster::standard`] is the ten-general roster the game ships with.
//! Custom rosters go through [`Roster::new`], which checks every name and
//! stat before the engine ever sees them.

use serde::{Deserialize, Serialize};

use super::character::{Character, MAX_STAT, MIN_STAT};
use crate::core::ConfigError;

/// Ordered, validated list of characters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Validate and wrap a list of characters.
    pub fn new(characters: Vec<Character>) -> Result<Self, ConfigError> {
        for (position, character) in characters.iter().enumerate() {
            if character.name.trim().is_empty() {
                return Err(ConfigError::UnnamedCharacter(position));
            }
            if let Some((attribute, value)) = character.out_of_range_stat() {
                return Err(ConfigError::StatOutOfRange {
                    name: character.name.clone(),
                    attribute,
                    value,
                    min: MIN_STAT,
                    max: MAX_STAT,
                });
            }
        }
        Ok(Self { characters })
    }

    /// The standard ten-general roster.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            characters: vec![
                Character::new("Xiang Yu", 6, 9, 10, 10),
                Character::new("Han Xin", 10, 10, 5, 9),
                Character::new("Wei Qing", 8, 9, 7, 9),
                Character::new("Huo Qubing", 7, 9, 9, 9),
                Character::new("Guan Yu", 6, 7, 10, 10),
                Character::new("Li Jing", 9, 10, 7, 8),
                Character::new("Yue Fei", 8, 9, 10, 10),
                Character::new("Bai Qi", 9, 10, 7, 9),
                Character::new("Lu Bu", 3, 6, 10, 7),
                Character::new("Zhao Yun", 7, 8, 10, 8),
            ],
        }
    }

    /// Character at a roster index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Is the roster empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterate over characters in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::standard()
    }
}
