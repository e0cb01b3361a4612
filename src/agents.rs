/// Differing kinds of agents that can play the game
use crate::eval::MaterialEvaluator;
use crate::game::Agent;
use crate::game_state::GameState;
use crate::positions::Position;
use crate::search::AlphaBetaSearch;
use crate::transposition_table::CachingEvaluator;
use std::io::{stdout, Write};
use text_io::try_read;

pub struct HumanAgent {}

impl HumanAgent {
    pub fn new() -> Self {
        HumanAgent {}
    }

    fn read_square(prompt: &str) -> Position {
        loop {
            print!("{}", prompt);
            stdout().flush().expect("Could not flush stdout");
            let entered: Result<Position, _> = try_read!();
            match entered {
                Ok(pos) => return pos,
                Err(_) => println!("Enter a square like e2."),
            }
        }
    }
}

impl Agent for HumanAgent {
    fn play_move(&self, state: &mut GameState) {
        println!("Your turn: ");
        loop {
            let from = Self::read_square("From: ");
            let to = Self::read_square("To: ");
            match state.player_move(from, to) {
                Ok(()) => return,
                Err(e) => println!("{}", e),
            }
        }
    }
}

pub struct RandomAgent {}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {}
    }
}

impl Agent for RandomAgent {
    fn play_move(&self, state: &mut GameState) {
        state
            .play_random_turn()
            .expect("Agent asked to move with no moves left");
    }
}

/// The engine side: picks moves by alpha-beta search over the material
/// evaluator, with leaf scores memoized across turns.
pub struct MinimaxAgent {
    depth: u16,
    engine: CachingEvaluator<MaterialEvaluator>,
}

impl MinimaxAgent {
    /// Depth must be positive; at depth 0 the search would never propose
    /// a move.
    pub fn new(depth: u16) -> Self {
        assert!(depth > 0, "Search depth must be positive");
        MinimaxAgent {
            depth,
            engine: CachingEvaluator::new(MaterialEvaluator),
        }
    }
}

impl Agent for MinimaxAgent {
    fn play_move(&self, state: &mut GameState) {
        let outcome = self
            .engine
            .pick_move(state.board(), self.depth, state.get_current_player());
        let mv = outcome
            .best
            .expect("Agent asked to move with no moves left");
        println!("Engine plays {}", mv);
        state.make_move(&mv);
    }
}
