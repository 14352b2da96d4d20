//! Pokedex record types.
//!
//! A record describes one Pokemon: display name, elemental type tag,
//! free-text description, and base stats. Records are immutable once the
//! Pokedex is built.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The four base stats of a Pokemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BaseStats {
    /// Hit points.
    pub hp: u32,

    /// Physical attack.
    pub attack: u32,

    /// Physical defense.
    pub defense: u32,

    /// Speed.
    pub speed: u32,
}

/// A single Pokedex entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    /// Display name (e.g., "Pikachu"). Distinct from the lowercase
    /// identifier used as the mapping key.
    pub name: String,

    /// Elemental type tag, serialized under the `type` key.
    #[serde(rename = "type")]
    pub type_tag: String,

    /// Free-text Pokedex description.
    pub description: String,

    /// Base stat block.
    pub stats: BaseStats,
}

impl PokemonRecord {
    /// Create a new record.
    pub fn new(
        name: impl Into<String>,
        type_tag: impl Into<String>,
        description: impl Into<String>,
        stats: BaseStats,
    ) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            description: description.into(),
            stats,
        }
    }
}
