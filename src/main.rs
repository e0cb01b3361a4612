#[macro_use]
extern crate impl_ops;

mod agents;
mod boards;
mod chess_errors;
mod eval;
mod game;
mod game_state;
mod movegen;
mod moves;
mod pieces;
mod positions;
mod search;
mod transposition_table;
mod utils;

use agents::{HumanAgent, MinimaxAgent};
use game::{Game, GameOutcome};

// ---------------------------------------------
// Main
// ---------------------------------------------

const ENGINE_DEPTH: u16 = 4;

fn main() {
    println!("You play white. Enter squares like e2.\n");

    let mut game = Game::new(HumanAgent::new(), MinimaxAgent::new(ENGINE_DEPTH));
    match game.play() {
        GameOutcome::Decisive(winner) => println!("{} wins!", winner),
        GameOutcome::Stalled(side) => println!("{} has no moves left. Game over.", side),
    }
}
