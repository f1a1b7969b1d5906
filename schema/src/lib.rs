// Pokemon Party Schema - Shared type definitions
// This crate contains the core enums and data shapes that are shared between
// the party service library and its binaries.

// Re-export the main types
pub use moves::*;
pub use pokemon_types::*;

pub mod moves;
pub mod pokemon_types;
