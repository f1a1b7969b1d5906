use serde::Serialize;

use crate::errors::MoveResult;
use crate::moves::dynamax;
use schema::Move;

/// A single party member.
///
/// The serialized form exposes only the Pokedex `ID` and `Name`; the move
/// list is internal and reachable through the `/move` sub-resource
/// instead of being inlined on the entity.
#[derive(Debug, Clone, Serialize)]
pub struct Pokemon {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(skip)]
    moves: Vec<Move>,
}

impl Pokemon {
    pub fn new(id: u32, name: impl Into<String>, moves: Vec<Move>) -> Self {
        Self {
            id,
            name: name.into(),
            moves,
        }
    }

    /// The Pokemon's move list, either as-is or in Dynamax form.
    ///
    /// With `dynamax` set, every move is replaced by its max form, in
    /// order. A single unknown type fails the whole view; no partially
    /// transformed list is ever returned.
    pub fn moves(&self, dynamax_form: bool) -> MoveResult<Vec<Move>> {
        if !dynamax_form {
            return Ok(self.moves.clone());
        }
        self.moves.iter().map(dynamax).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MoveError;
    use pretty_assertions::assert_eq;
    use schema::PokemonType;

    fn venusaur() -> Pokemon {
        Pokemon::new(
            3,
            "フシギバナ",
            vec![
                Move::new("つるのむち", PokemonType::Grass),
                Move::new("ハイドロポンプ", PokemonType::Water),
            ],
        )
    }

    #[test]
    fn plain_view_is_the_move_list_verbatim() {
        let pokemon = venusaur();
        let moves = pokemon.moves(false).unwrap();
        assert_eq!(moves, pokemon.moves);
    }

    #[test]
    fn dynamax_view_transforms_every_move_in_order() {
        let moves = venusaur().moves(true).unwrap();
        assert_eq!(
            moves,
            vec![
                Move::new("ダイソウゲン", PokemonType::Grass),
                Move::new("ダイストリーム", PokemonType::Water),
            ]
        );
    }

    #[test]
    fn dynamax_view_is_recomputed_not_stored() {
        let pokemon = venusaur();
        assert_eq!(pokemon.moves(true).unwrap(), pokemon.moves(true).unwrap());
        // The underlying list is untouched by the transformed view.
        assert_eq!(pokemon.moves(false).unwrap()[0].name, "つるのむち");
    }

    #[test]
    fn one_unknown_type_fails_the_whole_view() {
        let pokemon = Pokemon::new(
            25,
            "ピカチュウ",
            vec![
                Move::new("みずでっぽう", PokemonType::Water),
                Move::new("１０まんボルト", PokemonType::Electric),
            ],
        );
        assert_eq!(
            pokemon.moves(true),
            Err(MoveError::UnknownType(PokemonType::Electric))
        );
    }

    #[test]
    fn serialized_entity_has_no_move_field() {
        let serialized = serde_json::to_value(venusaur()).unwrap();
        assert_eq!(
            serialized,
            serde_json::json!({"ID": 3, "Name": "フシギバナ"})
        );
    }
}
