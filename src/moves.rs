//! The Dynamax transformation over moves.

pub use schema::{Move, PokemonType};

use crate::errors::{MoveError, MoveResult};

/// Replaces a move with its Dynamax form.
///
/// The move's name is swapped for the max move of its type; the type
/// itself is kept unchanged. Types outside the known Grass/Fire/Water
/// table fail with [`MoveError::UnknownType`].
pub fn dynamax(move_: &Move) -> MoveResult<Move> {
    match move_.move_type.max_move_name() {
        Some(max_name) => Ok(Move::new(max_name, move_.move_type)),
        None => Err(MoveError::UnknownType(move_.move_type)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL_TYPES: [PokemonType; 5] = [
        PokemonType::Grass,
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Electric,
        PokemonType::Normal,
    ];

    #[test]
    fn known_types_map_to_their_max_move() {
        let cases = [
            (Move::new("つるのむち", PokemonType::Grass), "ダイソウゲン"),
            (Move::new("かえんほうしゃ", PokemonType::Fire), "ダイバーン"),
            (Move::new("みずでっぽう", PokemonType::Water), "ダイストリーム"),
        ];

        for (move_, expected_name) in cases {
            let max_move = dynamax(&move_).unwrap();
            assert_eq!(max_move.name, expected_name);
        }
    }

    #[test]
    fn type_is_preserved_across_the_transform() {
        for move_type in ALL_TYPES {
            let move_ = Move::new("テスト", move_type);
            if let Ok(max_move) = dynamax(&move_) {
                assert_eq!(max_move.move_type, move_type);
            }
        }
    }

    #[test]
    fn unknown_types_are_a_typed_error() {
        let thunderbolt = Move::new("１０まんボルト", PokemonType::Electric);
        assert_eq!(
            dynamax(&thunderbolt),
            Err(MoveError::UnknownType(PokemonType::Electric))
        );
    }

    #[test]
    fn transform_is_deterministic() {
        let vine_whip = Move::new("つるのむち", PokemonType::Grass);
        assert_eq!(dynamax(&vine_whip), dynamax(&vine_whip));
    }
}
