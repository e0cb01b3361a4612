use crate::boards::MailboxBoard;
use crate::chess_errors::*;
use crate::movegen;
use crate::moves::Move;
use crate::pieces::Color;
use crate::positions::Position;
use std::fmt::{self, Debug, Display};

// -------------------------------------
// GameState
// ------------------------------------

/// The authoritative state of one game: board, side to move, turn count.
/// The search only ever sees copies of the board; this struct is the one
/// place where real moves are applied and the game result is read off.
#[derive(Clone, PartialEq)]
pub struct GameState {
    board: MailboxBoard,
    turn_count: u16,
    current_player: Color,
}

// Public Interface
impl GameState {
    /// Returns a game with the figures placed on standard chess starting positions
    pub fn standard_setup() -> GameState {
        GameState {
            board: MailboxBoard::standard_setup(),
            turn_count: 0,
            current_player: Color::White,
        }
    }

    /// Starts a game from an arbitrary position.
    pub fn with_board(board: MailboxBoard, current_player: Color) -> GameState {
        GameState {
            board,
            turn_count: 0,
            current_player,
        }
    }

    pub fn board(&self) -> &MailboxBoard {
        &self.board
    }

    pub fn get_current_player(&self) -> Color {
        self.current_player
    }

    pub fn turn_count(&self) -> u16 {
        self.turn_count
    }

    /// All moves available to the player whose turn it is. Piece movement
    /// rules only; a move may well leave the own king hanging.
    pub fn gen_moves(&self) -> Vec<Move> {
        movegen::moves_for_side(&self.board, self.current_player)
    }

    /// Validates and applies a move given as a start and end square, the
    /// way a human enters it. Errors if no generated move matches.
    pub fn player_move(&mut self, start: Position, end: Position) -> ChessResult<()> {
        let m = self
            .find_player_move(start, end)
            .ok_or_else(|| ChessError::from(format!("Illegal move {} -> {}", start, end)))?;
        self.make_move(&m);
        Ok(())
    }

    /// Applies an already-validated move and passes the turn.
    pub fn make_move(&mut self, m: &Move) {
        self.board.apply_move(m);
        self.advance_turn();
    }

    pub fn play_random_turn(&mut self) -> ChessResult<Move> {
        use rand::seq::SliceRandom;
        let rng = &mut rand::thread_rng();
        let moves = self.gen_moves();
        let mv = moves
            .choose(rng)
            .ok_or_else(|| ChessError::from("No playable moves left"))?;
        self.make_move(mv);
        Ok(mv.clone())
    }

    /// A color wins the instant the opposing king is gone from the board.
    pub fn winner(&self) -> Option<Color> {
        if !self.board.has_king(Color::White) {
            Some(Color::Black)
        } else if !self.board.has_king(Color::Black) {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Attempts to find the entered player move among all moves that can be
    /// made from the current position. Returns None if there is no match.
    fn find_player_move(&self, start: Position, end: Position) -> Option<Move> {
        self.gen_moves()
            .into_iter()
            .find(|m| m.start == start && m.end == end)
    }

    fn advance_turn(&mut self) {
        self.turn_count += 1;
        self.current_player = self.current_player.opposite();
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Turn: {}  Player: {}\n{}",
            self.turn_count, self.current_player, self.board
        )
    }
}

impl Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Turn: {}  Player: {}\n{:?}",
            self.turn_count, self.current_player, self.board
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;
    use crate::moves::MoveType;
    use crate::pieces::{Piece, PieceKind};

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_player_move_advances_turn() {
        let mut g = GameState::standard_setup();
        g.player_move(pos("e2"), pos("e4")).unwrap();
        assert_eq!(g.get_current_player(), Color::Black);
        assert_eq!(g.turn_count(), 1);
        assert!(g.board().piece_at(pos("e2")).is_none());
        assert!(g.board().piece_at(pos("e4")).is_some());
    }

    #[test]
    fn test_illegal_player_move_rejected() {
        let mut g = GameState::standard_setup();
        let before = g.clone();
        // A rook cannot jump over its own pawn
        assert!(g.player_move(pos("a1"), pos("a5")).is_err());
        assert!(g == before);
    }

    #[test]
    fn test_winner_detection() {
        let queen = Piece::new(PieceKind::Queen, Color::Black, 11);
        let board = board![
            (pos("e5"), queen),
            (pos("e1"), Piece::new(PieceKind::King, Color::White, 12)),
            (pos("a8"), Piece::new(PieceKind::King, Color::Black, 12)),
        ];
        let mut g = GameState::with_board(board, Color::Black);
        assert_eq!(g.winner(), None);
        g.player_move(pos("e5"), pos("e1")).unwrap();
        assert_eq!(g.winner(), Some(Color::Black));
    }

    #[test]
    fn test_random_turns_preserve_identities() {
        let mut g = GameState::standard_setup();
        for _ in 0..20 {
            if g.winner().is_some() || g.gen_moves().is_empty() {
                break;
            }
            g.play_random_turn().unwrap();
            let mut seen = std::collections::HashSet::new();
            for (_, p) in g.board().occupied() {
                assert!(seen.insert(p), "identity {:?} appears twice", p);
            }
        }
    }

    #[test]
    fn test_make_move_records_capture() {
        let rook = Piece::new(PieceKind::Rook, Color::White, 8);
        let victim = Piece::new(PieceKind::Pawn, Color::Black, 2);
        let board = board![
            (pos("a1"), rook),
            (pos("a6"), victim),
            (pos("e1"), Piece::new(PieceKind::King, Color::White, 12)),
            (pos("e8"), Piece::new(PieceKind::King, Color::Black, 12)),
        ];
        let mut g = GameState::with_board(board, Color::White);
        let mv = Move::new(pos("a1"), pos("a6"), rook, MoveType::Capture(victim));
        g.make_move(&mv);
        assert_eq!(g.board().locate(victim), None);
        assert_eq!(g.board().locate(rook), Some(pos("a6")));
    }
}
