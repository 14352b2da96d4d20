//! The in-memory Pokedex mapping.
//!
//! Keys are stored in lowercase canonical form and lookups are
//! case-insensitive. Iteration follows key order, so resource listings are
//! stable across repeated calls.

use std::collections::BTreeMap;

use super::record::{BaseStats, PokemonRecord};

/// An immutable mapping from lowercase identifier to Pokemon record.
///
/// The Pokedex is constructed once at startup (see [`Pokedex::builtin`])
/// and shared by reference with all handlers. The constructor and
/// [`Pokedex::insert`] exist so tests can substitute their own mapping.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    entries: BTreeMap<String, PokemonRecord>,
}

impl Pokedex {
    /// Create an empty Pokedex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the built-in Pokedex shipped with the server.
    pub fn builtin() -> Self {
        let mut dex = Self::new();
        dex.insert(
            "pikachu",
            PokemonRecord::new(
                "Pikachu",
                "Electric",
                "A Mouse Pokémon. It can generate electric attacks from the \
                 electric pouches located in both of its cheeks.",
                BaseStats {
                    hp: 35,
                    attack: 55,
                    defense: 40,
                    speed: 90,
                },
            ),
        );
        dex
    }

    /// Insert a record under the lowercase canonical form of `id`.
    pub fn insert(&mut self, id: impl Into<String>, record: PokemonRecord) {
        self.entries.insert(id.into().to_lowercase(), record);
    }

    /// Look up a record by identifier. Lookup is case-insensitive.
    pub fn get(&self, id: &str) -> Option<&PokemonRecord> {
        self.entries.get(&id.to_lowercase())
    }

    /// Whether an identifier is present. Case-insensitive, like [`Pokedex::get`].
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over `(identifier, record)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PokemonRecord)> {
        self.entries.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the Pokedex has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> PokemonRecord {
        PokemonRecord::new(
            name,
            "Normal",
            "Test entry.",
            BaseStats {
                hp: 1,
                attack: 1,
                defense: 1,
                speed: 1,
            },
        )
    }

    #[test]
    fn test_builtin_contains_pikachu() {
        let dex = Pokedex::builtin();
        assert_eq!(dex.len(), 1);

        let pikachu = dex.get("pikachu").unwrap();
        assert_eq!(pikachu.name, "Pikachu");
        assert_eq!(pikachu.type_tag, "Electric");
        assert_eq!(pikachu.stats.hp, 35);
        assert_eq!(pikachu.stats.attack, 55);
        assert_eq!(pikachu.stats.defense, 40);
        assert_eq!(pikachu.stats.speed, 90);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dex = Pokedex::builtin();
        assert!(dex.contains("PIKACHU"));
        assert!(dex.contains("PiKaChU"));
        assert_eq!(dex.get("PIKACHU").unwrap().name, "Pikachu");
    }

    #[test]
    fn test_insert_canonicalizes_key() {
        let mut dex = Pokedex::new();
        dex.insert("Eevee", record("Eevee"));

        let ids: Vec<_> = dex.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["eevee"]);
        assert!(dex.contains("eevee"));
    }

    #[test]
    fn test_iteration_is_ordered_and_stable() {
        let mut dex = Pokedex::new();
        dex.insert("zubat", record("Zubat"));
        dex.insert("abra", record("Abra"));
        dex.insert("mew", record("Mew"));

        let first: Vec<_> = dex.iter().map(|(id, _)| id.to_string()).collect();
        let second: Vec<_> = dex.iter().map(|(id, _)| id.to_string()).collect();
        assert_eq!(first, vec!["abra", "mew", "zubat"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_identifier() {
        let dex = Pokedex::builtin();
        assert!(dex.get("missingno").is_none());
        assert!(!dex.contains("missingno"));
    }
}
