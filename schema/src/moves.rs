use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pokemon_types::PokemonType;

/// A single move: a display name and its elemental type.
///
/// Serializes as `{"Name": ..., "Type": ...}`, the wire shape the party
/// API exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub move_type: PokemonType,
}

impl Move {
    pub fn new(name: impl Into<String>, move_type: PokemonType) -> Self {
        Self {
            name: name.into(),
            move_type,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.move_type)
    }
}
