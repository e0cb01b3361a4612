use crate::game_state::GameState;
use crate::pieces::Color;

/// An agent is an object that can play chess by choosing moves appropriate
/// to a current game state.
pub trait Agent {
    fn play_move(&self, state: &mut GameState);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameOutcome {
    /// A king was captured; the given color won.
    Decisive(Color),
    /// The given color had no move available. This game makes no check
    /// analysis, so stalemate and checkmate are not told apart.
    Stalled(Color),
}

pub struct Game<A1: Agent, A2: Agent> {
    white: A1,
    black: A2,
    state: GameState,
}

impl<A1: Agent, A2: Agent> Game<A1, A2> {
    pub fn new(white: A1, black: A2) -> Game<A1, A2> {
        Game::from_state(white, black, GameState::standard_setup())
    }

    pub fn from_state(white: A1, black: A2, state: GameState) -> Game<A1, A2> {
        Game {
            white,
            black,
            state,
        }
    }

    /// Alternates the two agents until a king falls or the side to move
    /// has no move left.
    pub fn play(&mut self) -> GameOutcome {
        loop {
            println!("{}\n", self.state);
            if let Some(winner) = self.state.winner() {
                return GameOutcome::Decisive(winner);
            }
            if self.state.gen_moves().is_empty() {
                return GameOutcome::Stalled(self.state.get_current_player());
            }
            match self.state.get_current_player() {
                Color::White => self.white.play_move(&mut self.state),
                Color::Black => self.black.play_move(&mut self.state),
            }
        }
    }
}
