//! The four contested attributes and a character's stat line.
//!
//! Attributes are always visited in canonical order: strategy, command,
//! martial, influence. Every "first found" tie-break in the engine relies
//! on that order.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A contested attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Strategy,
    Command,
    Martial,
    Influence,
}

impl Attribute {
    /// All attributes in canonical order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Strategy,
        Attribute::Command,
        Attribute::Martial,
        Attribute::Influence,
    ];

    /// Lowercase key used in serialized data and terminal input.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Attribute::Strategy => "strategy",
            Attribute::Command => "command",
            Attribute::Martial => "martial",
            Attribute::Influence => "influence",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string names no attribute.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown attribute {0:?}")]
pub struct UnknownAttribute(pub String);

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if lowered.is_empty() {
            return Err(UnknownAttribute(s.to_string()));
        }

        // Unique prefixes are accepted ("mar" for martial)
        Attribute::ALL
            .into_iter()
            .find(|a| a.key().starts_with(&lowered))
            .ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}

/// Four attribute scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatLine {
    pub strategy: u8,
    pub command: u8,
    pub martial: u8,
    pub influence: u8,
}

impl StatLine {
    /// Create a stat line in canonical order.
    #[must_use]
    pub const fn new(strategy: u8, command: u8, martial: u8, influence: u8) -> Self {
        Self {
            strategy,
            command,
            martial,
            influence,
        }
    }

    /// Value of one attribute.
    #[must_use]
    pub const fn get(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Strategy => self.strategy,
            Attribute::Command => self.command,
            Attribute::Martial => self.martial,
            Attribute::Influence => self.influence,
        }
    }

    /// Sum of all four attributes.
    #[must_use]
    pub fn total(&self) -> u32 {
        Attribute::ALL.iter().map(|&a| u32::from(self.get(a))).sum()
    }

    /// Highest attribute, earliest in canonical order on ties.
    #[must_use]
    pub fn best(&self) -> (Attribute, u8) {
        let mut best = (Attribute::Strategy, self.strategy);
        for attribute in Attribute::ALL {
            let value = self.get(attribute);
            if value > best.1 {
                best = (attribute, value);
            }
        }
        best
    }

    /// Iterate over (attribute, value) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u8)> + '_ {
        Attribute::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}
