// In: src/lib.rs

//! Pokemon Party Service
//!
//! A small read-only JSON API over a fixed three-member Pokemon party,
//! with a Dynamax transformation over their moves. The domain model is
//! plain data plus pure functions; the HTTP facade is a thin axum layer
//! on top of it.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod errors;
pub mod http;
pub mod moves;
pub mod party;
pub mod pokemon;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `poke-party` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the core data definitions.
pub use schema::{Move, PokemonType};

// --- From this crate's modules (`src/`) ---

// Core domain types and operations.
pub use moves::dynamax;
pub use party::Party;
pub use pokemon::Pokemon;

// Crate-specific error and result types.
pub use errors::{MoveError, MoveResult};
