use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Elemental move categories known to the service.
///
/// The wire format and all user-facing output use the Japanese type
/// labels, so the serde names carry them rather than the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum PokemonType {
    #[serde(rename = "くさ")]
    Grass,
    #[serde(rename = "ほのお")]
    Fire,
    #[serde(rename = "みず")]
    Water,
    #[serde(rename = "でんき")]
    Electric,
    #[serde(rename = "ノーマル")]
    Normal,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl PokemonType {
    /// The Japanese label used on the wire and in display output.
    pub fn label(self) -> &'static str {
        match self {
            PokemonType::Grass => "くさ",
            PokemonType::Fire => "ほのお",
            PokemonType::Water => "みず",
            PokemonType::Electric => "でんき",
            PokemonType::Normal => "ノーマル",
        }
    }

    /// The Dynamax move name for this type.
    ///
    /// The table is closed: only Grass, Fire, and Water have a known max
    /// move. Every other type returns `None` and callers treat that as an
    /// error, never as a silent pass-through.
    pub fn max_move_name(self) -> Option<&'static str> {
        match self {
            PokemonType::Grass => Some("ダイソウゲン"),
            PokemonType::Fire => Some("ダイバーン"),
            PokemonType::Water => Some("ダイストリーム"),
            PokemonType::Electric | PokemonType::Normal => None,
        }
    }
}
