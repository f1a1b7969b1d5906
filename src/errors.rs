use schema::PokemonType;
use std::fmt;

/// Errors produced while deriving a Pokemon's move view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The move's type has no Dynamax form in the known table
    UnknownType(PokemonType),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::UnknownType(move_type) => write!(f, "unknown type: {}", move_type),
        }
    }
}

impl std::error::Error for MoveError {}

/// Type alias for Results using MoveError
pub type MoveResult<T> = Result<T, MoveError>;
