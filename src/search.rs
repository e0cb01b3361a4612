use crate::boards::MailboxBoard;
use crate::movegen;
use crate::moves::Move;
use crate::pieces::{Color, Piece};
use std::cmp::{max, min};

// ---------------------------------------------
// Search
// ---------------------------------------------

/// Score returned when the white king has been captured. Positive, since
/// the evaluator's sign convention has black as the maximizing side.
pub const BLACK_WIN: i32 = 10_000_000;
/// Symmetric score for a captured black king.
pub const WHITE_WIN: i32 = -BLACK_WIN;

/// Once a branch already guarantees a value beyond this bound, an imminent
/// king capture has been found and the remaining siblings are skipped.
/// This is a heuristic shortcut on top of the alpha/beta cutoff, not part
/// of it. Only the terminal win scores can exceed the bound, so with the
/// first-found tie-break the shortcut never changes the search outcome,
/// only the number of nodes visited. Tunable.
pub const DECISIVE_CUTOFF: i32 = BLACK_WIN - 1_000;

/// What a search call reports back: the best move found (with the moving
/// piece inside it) and the value of the position. `best` is None at leaf
/// and terminal nodes and when the side to move has no moves at all; the
/// caller decides what a move-less position means.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub best: Option<Move>,
    pub value: i32,
}

impl SearchOutcome {
    fn leaf(value: i32) -> SearchOutcome {
        SearchOutcome { best: None, value }
    }

    pub fn best_piece(&self) -> Option<Piece> {
        self.best.as_ref().map(|m| m.piece)
    }
}

/// Minimax with alpha-beta pruning over a leaf heuristic. Implementors
/// only provide `score`; the search itself comes as provided methods.
///
/// The engine never touches the board it is handed: every branch works on
/// its own copy, which is discarded when the branch returns.
pub trait AlphaBetaSearch {
    /// Leaf heuristic. Positive favors black, negative favors white.
    fn score(&self, board: &MailboxBoard) -> i32;

    /// Entry point for callers: picks a move for `side` by searching
    /// `depth` plies with a full alpha/beta window. Black maximizes.
    fn pick_move(&self, board: &MailboxBoard, depth: u16, side: Color) -> SearchOutcome {
        let maximizing = side == Color::Black;
        self.minimax(board, depth, i32::MIN, i32::MAX, maximizing, side)
    }

    /// One search node: terminal checks first (a missing king decides the
    /// game no matter the remaining depth), then the depth-0 leaf, then
    /// branching over every (piece, destination) pair of the side to move.
    ///
    /// Ties keep the first-found move: only a strictly better value
    /// replaces the current best, and moves are enumerated in board scan
    /// order, so results are reproducible.
    fn minimax(
        &self,
        board: &MailboxBoard,
        depth: u16,
        alpha: i32,
        beta: i32,
        maximizing: bool,
        side: Color,
    ) -> SearchOutcome {
        if !board.has_king(Color::White) {
            return SearchOutcome::leaf(BLACK_WIN);
        }
        if !board.has_king(Color::Black) {
            return SearchOutcome::leaf(WHITE_WIN);
        }
        if depth == 0 {
            return SearchOutcome::leaf(self.score(board));
        }

        let moves = movegen::moves_for_side(board, side);
        // No moves is not an error; report the bare evaluation and let the
        // caller interpret the stall.
        if moves.is_empty() {
            return SearchOutcome::leaf(self.score(board));
        }

        let mut alpha_ = alpha;
        let mut beta_ = beta;
        let mut best = None;

        if maximizing {
            let mut value = i32::MIN;
            for mv in moves {
                let mut board_copy = board.clone();
                board_copy.apply_move(&mv);
                let reply = self.minimax(
                    &board_copy,
                    depth - 1,
                    alpha_,
                    beta_,
                    false,
                    side.opposite(),
                );
                if reply.value > value {
                    value = reply.value;
                    best = Some(mv);
                }
                alpha_ = max(alpha_, value);
                if alpha_ >= beta_ {
                    break;
                }
                if value > DECISIVE_CUTOFF {
                    break;
                }
            }
            SearchOutcome { best, value }
        } else {
            let mut value = i32::MAX;
            for mv in moves {
                let mut board_copy = board.clone();
                board_copy.apply_move(&mv);
                let reply = self.minimax(
                    &board_copy,
                    depth - 1,
                    alpha_,
                    beta_,
                    true,
                    side.opposite(),
                );
                if reply.value < value {
                    value = reply.value;
                    best = Some(mv);
                }
                beta_ = min(beta_, value);
                if alpha_ >= beta_ {
                    break;
                }
                if value < -DECISIVE_CUTOFF {
                    break;
                }
            }
            SearchOutcome { best, value }
        }
    }
}
