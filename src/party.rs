use serde::Serialize;

use crate::pokemon::Pokemon;
use schema::{Move, PokemonType};

/// The fixed, ordered party served by the API.
///
/// Position in the party is the sole addressing mechanism; the Pokedex
/// `id` carried by each member is display data and never used for
/// lookup. The party is built once at startup and read-only afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Party(Vec<Pokemon>);

impl Party {
    /// Builds a party from its members. A party is never empty.
    pub fn new(members: Vec<Pokemon>) -> Self {
        assert!(!members.is_empty(), "a party needs at least one Pokemon");
        Self(members)
    }

    /// The hardcoded three-member demo party.
    pub fn demo() -> Self {
        Self::new(vec![
            Pokemon::new(
                3,
                "フシギバナ",
                vec![Move::new("つるのむち", PokemonType::Grass)],
            ),
            Pokemon::new(
                6,
                "リザードン",
                vec![Move::new("かえんほうしゃ", PokemonType::Fire)],
            ),
            Pokemon::new(
                9,
                "カメックス",
                vec![Move::new("みずでっぽう", PokemonType::Water)],
            ),
        ])
    }

    /// Looks up a member by position.
    ///
    /// Positions past the end of the party clamp to the last member
    /// instead of failing; this lenient lookup is part of the API's
    /// contract.
    pub fn get_clamped(&self, index: usize) -> &Pokemon {
        &self.0[index.min(self.0.len() - 1)]
    }

    pub fn members(&self) -> &[Pokemon] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
