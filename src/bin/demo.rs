//! Standalone demo of the party domain logic.
//!
//! Walks the same model the HTTP service exposes, without any network:
//! prints the lead Pokemon's name, its first move, and that move's
//! Dynamax form. Exits non-zero if the Dynamax transform fails.

use std::process::ExitCode;

use poke_party::Party;

fn main() -> ExitCode {
    let party = Party::demo();

    let venusaur = party.get_clamped(0);
    println!("ポケモン: {}", venusaur.name);

    let moves = match venusaur.moves(false) {
        Ok(moves) => moves,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    println!("通常わざ: {}", moves[0].name);

    let dynamax_moves = match venusaur.moves(true) {
        Ok(moves) => moves,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    println!("ダイマックスわざ: {}", dynamax_moves[0].name);

    ExitCode::SUCCESS
}
