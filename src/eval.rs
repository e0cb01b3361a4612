use crate::boards::MailboxBoard;
use crate::pieces::{Color, PieceKind};
use crate::search::AlphaBetaSearch;

// ---------------------------------------------
// Evaluation
// ---------------------------------------------

pub const PAWN_WEIGHT: i32 = 10;
pub const KNIGHT_WEIGHT: i32 = 30;
pub const BISHOP_WEIGHT: i32 = 30;
pub const ROOK_WEIGHT: i32 = 50;
pub const QUEEN_WEIGHT: i32 = 90;

/// Material weight of a piece kind. Kings carry no material weight;
/// a missing king is scored by the search's terminal handling instead.
pub fn material_weight(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_WEIGHT,
        PieceKind::Knight => KNIGHT_WEIGHT,
        PieceKind::Bishop => BISHOP_WEIGHT,
        PieceKind::Rook => ROOK_WEIGHT,
        PieceKind::Queen => QUEEN_WEIGHT,
        PieceKind::King => 0,
    }
}

/// Material balance of the position. Sign convention: positive favors
/// black, negative favors white. Assumes both kings are on the board.
pub fn evaluate(board: &MailboxBoard) -> i32 {
    let mut score = 0;
    for (_, piece) in board.occupied() {
        match piece.color {
            Color::Black => score += material_weight(piece.kind),
            Color::White => score -= material_weight(piece.kind),
        }
    }
    score
}

/// The evaluator driving the engine: pure material count.
pub struct MaterialEvaluator;

impl AlphaBetaSearch for MaterialEvaluator {
    fn score(&self, board: &MailboxBoard) -> i32 {
        evaluate(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;
    use crate::boards::MailboxBoard;
    use crate::pieces::Piece;
    use crate::positions::Position;

    #[test]
    fn test_empty_board_is_balanced() {
        assert_eq!(evaluate(&MailboxBoard::empty()), 0);
    }

    #[test]
    fn test_initial_position_is_balanced() {
        assert_eq!(evaluate(&MailboxBoard::standard_setup()), 0);
    }

    #[test]
    fn test_white_pawn_vs_black_rook() {
        let b = board![
            (
                Position::from_row_col(6, 0),
                Piece::new(PieceKind::Pawn, Color::White, 0)
            ),
            (
                Position::from_row_col(0, 0),
                Piece::new(PieceKind::Rook, Color::Black, 8)
            ),
        ];
        assert_eq!(evaluate(&b), -PAWN_WEIGHT + ROOK_WEIGHT);
        assert_eq!(evaluate(&b), 40);
    }

    #[test]
    fn test_kings_carry_no_weight() {
        let b = board![
            (
                Position::from_row_col(7, 4),
                Piece::new(PieceKind::King, Color::White, 12)
            ),
            (
                Position::from_row_col(0, 4),
                Piece::new(PieceKind::King, Color::Black, 12)
            ),
        ];
        assert_eq!(evaluate(&b), 0);
    }
}
