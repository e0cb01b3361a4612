use crate::boards::MailboxBoard;
use crate::moves::{Move, MoveType};
use crate::pieces::{Color, Piece, PieceKind};
use crate::positions::Position;

// ---------------------------------------------
// Move Generation
// ---------------------------------------------
//
// Candidate destinations per piece movement rule only. No check legality:
// a move that leaves the mover's own king capturable is still generated,
// and the search recognizes the king capture one ply later. This mirrors
// how the game has always been scored here and is relied upon by the
// terminal handling in the search.

const KING_OFFSETS: [(i16, i16); 8] = [
    (1, 1),
    (0, 1),
    (0, -1),
    (1, -1),
    (-1, -1),
    (-1, 1),
    (1, 0),
    (-1, 0),
];

const KNIGHT_OFFSETS: [(i16, i16); 8] = [
    (2, -1),
    (2, 1),
    (1, -2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
];

const BISHOP_DIRECTIONS: [(i16, i16); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRECTIONS: [(i16, i16); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const QUEEN_DIRECTIONS: [(i16, i16); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Candidate destination squares for a piece standing at origin.
/// Dispatch is exhaustive over the piece kind, so a new kind cannot be
/// added without the compiler pointing here.
pub fn destinations(piece: Piece, origin: Position, board: &MailboxBoard) -> Vec<Position> {
    match piece.kind {
        PieceKind::King => step_moves(origin, piece.color, board, &KING_OFFSETS),
        PieceKind::Knight => step_moves(origin, piece.color, board, &KNIGHT_OFFSETS),
        PieceKind::Bishop => ray_moves(origin, piece.color, board, &BISHOP_DIRECTIONS),
        PieceKind::Rook => ray_moves(origin, piece.color, board, &ROOK_DIRECTIONS),
        PieceKind::Queen => ray_moves(origin, piece.color, board, &QUEEN_DIRECTIONS),
        PieceKind::Pawn => pawn_moves(piece, origin, board),
    }
}

/// Single-step movers (king, knight): each offset is a candidate unless it
/// leaves the board or lands on a same-colored piece.
fn step_moves(
    origin: Position,
    color: Color,
    board: &MailboxBoard,
    offsets: &[(i16, i16)],
) -> Vec<Position> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| origin.offset(d_row, d_col))
        .filter(|&pos| match board.piece_at(pos) {
            Some(occupant) => occupant.color != color,
            None => true,
        })
        .collect()
}

/// Sliding movers (bishop, rook, queen): walk each direction outward.
/// A ray runs through empty squares, stops on and includes the first
/// enemy piece, and stops short of a same-colored piece.
fn ray_moves(
    origin: Position,
    color: Color,
    board: &MailboxBoard,
    directions: &[(i16, i16)],
) -> Vec<Position> {
    let mut res = Vec::new();
    for &(d_row, d_col) in directions {
        for step in 1..8 {
            let pos = match origin.offset(d_row * step, d_col * step) {
                Some(p) => p,
                None => break,
            };
            match board.piece_at(pos) {
                None => res.push(pos),
                Some(occupant) => {
                    if occupant.color != color {
                        res.push(pos);
                    }
                    break;
                }
            }
        }
    }
    res
}

/// Pawns: one step forward onto an empty square, diagonal steps only as
/// captures, and a two-step push while this exact piece has never moved.
/// The two-step push checks only its own destination square for emptiness;
/// the intermediate square is not examined.
fn pawn_moves(piece: Piece, origin: Position, board: &MailboxBoard) -> Vec<Position> {
    let forward = piece.color.forward();
    let mut res = Vec::new();

    if let Some(pos) = origin.offset(forward, 0) {
        if board.piece_at(pos).is_none() {
            res.push(pos);
        }
    }
    for &d_col in &[-1, 1] {
        if let Some(pos) = origin.offset(forward, d_col) {
            if let Some(occupant) = board.piece_at(pos) {
                if occupant.color != piece.color {
                    res.push(pos);
                }
            }
        }
    }
    if !board.has_moved(piece) {
        if let Some(pos) = origin.offset(2 * forward, 0) {
            if board.piece_at(pos).is_none() {
                res.push(pos);
            }
        }
    }
    res
}

/// All moves available to one side, as classified Moves. Pieces are
/// enumerated in board scan order and destinations in generation order,
/// which is the enumeration order the search tie-break is defined over.
pub fn moves_for_side(board: &MailboxBoard, color: Color) -> Vec<Move> {
    let mut res = Vec::new();
    for (origin, piece) in board.occupied() {
        if piece.color != color {
            continue;
        }
        for end in destinations(piece, origin, board) {
            let kind = match board.piece_at(end) {
                Some(captured) => MoveType::Capture(captured),
                None => {
                    if piece.kind == PieceKind::Pawn && (end.get() as i16 - origin.get() as i16).abs() == 16 {
                        MoveType::PawnTwostep
                    } else {
                        MoveType::Standard
                    }
                }
            };
            res.push(Move::new(origin, end, piece, kind));
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;
    use crate::boards::MailboxBoard;
    use std::collections::HashSet;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn dest_set(piece: Piece, origin: Position, board: &MailboxBoard) -> HashSet<Position> {
        destinations(piece, origin, board).into_iter().collect()
    }

    #[test]
    fn test_lone_knight_center() {
        let knight = Piece::new(PieceKind::Knight, Color::White, 9);
        // Row 4, col 3 = d4
        let origin = Position::from_row_col(4, 3);
        let b = board![(origin, knight)];

        let expected: HashSet<Position> = [
            (6, 2),
            (6, 4),
            (5, 1),
            (5, 5),
            (2, 2),
            (2, 4),
            (3, 1),
            (3, 5),
        ]
        .iter()
        .map(|&(r, c)| Position::from_row_col(r, c))
        .collect();
        assert_eq!(dest_set(knight, origin, &b), expected);
    }

    #[test]
    fn test_knight_excludes_own_color_and_edge() {
        let knight = Piece::new(PieceKind::Knight, Color::White, 9);
        let blocker = Piece::new(PieceKind::Pawn, Color::White, 0);
        let victim = Piece::new(PieceKind::Pawn, Color::Black, 0);
        let origin = pos("a1");
        let b = board![(origin, knight), (pos("b3"), blocker), (pos("c2"), victim)];

        let expected: HashSet<Position> = [pos("c2")].iter().cloned().collect();
        assert_eq!(dest_set(knight, origin, &b), expected);
    }

    #[test]
    fn test_king_chebyshev_ring() {
        let king = Piece::new(PieceKind::King, Color::Black, 12);
        let origin = pos("e4");
        let b = board![(origin, king)];
        let moves = dest_set(king, origin, &b);
        assert_eq!(moves.len(), 8);
        for m in moves {
            let (r1, c1) = origin.to_row_col();
            let (r2, c2) = m.to_row_col();
            let chebyshev = ((r1 as i16 - r2 as i16).abs()).max((c1 as i16 - c2 as i16).abs());
            assert_eq!(chebyshev, 1);
        }
    }

    #[test]
    fn test_rook_ray_blocking() {
        let rook = Piece::new(PieceKind::Rook, Color::White, 8);
        let friend = Piece::new(PieceKind::Pawn, Color::White, 0);
        let enemy = Piece::new(PieceKind::Pawn, Color::Black, 0);
        let origin = pos("d4");
        let b = board![(origin, rook), (pos("d6"), friend), (pos("f4"), enemy)];

        let moves = dest_set(rook, origin, &b);
        // Up: d5 only (d6 is our own pawn, excluded)
        assert!(moves.contains(&pos("d5")));
        assert!(!moves.contains(&pos("d6")));
        // Right: e4 and the enemy on f4, nothing beyond
        assert!(moves.contains(&pos("e4")));
        assert!(moves.contains(&pos("f4")));
        assert!(!moves.contains(&pos("g4")));
        // Down and left run to the board edge
        assert!(moves.contains(&pos("d1")));
        assert!(moves.contains(&pos("a4")));
    }

    #[test]
    fn test_bishop_and_queen_directions() {
        let bishop = Piece::new(PieceKind::Bishop, Color::White, 10);
        let queen = Piece::new(PieceKind::Queen, Color::White, 11);
        let origin = pos("d4");

        let b = board![(origin, bishop)];
        let bishop_moves = dest_set(bishop, origin, &b);
        assert_eq!(bishop_moves.len(), 13);
        assert!(bishop_moves.contains(&pos("a7")));
        assert!(!bishop_moves.contains(&pos("d5")));

        let q = board![(origin, queen)];
        let queen_moves = dest_set(queen, origin, &q);
        // 13 diagonal + 14 orthogonal squares from d4 on an empty board
        assert_eq!(queen_moves.len(), 27);
    }

    #[test]
    fn test_pawn_single_and_double_step() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, 4);
        let origin = pos("e2");
        let b = board![(origin, pawn)];

        let moves = dest_set(pawn, origin, &b);
        let expected: HashSet<Position> = [pos("e3"), pos("e4")].iter().cloned().collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_pawn_double_step_gone_after_moving() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black, 4);
        let mut b = board![(pos("e7"), pawn)];
        b.apply_move(&Move::new(pos("e7"), pos("e6"), pawn, MoveType::Standard));

        let moves = dest_set(pawn, pos("e6"), &b);
        let expected: HashSet<Position> = [pos("e5")].iter().cloned().collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_pawn_captures_only_diagonally() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, 4);
        let blocker = Piece::new(PieceKind::Pawn, Color::Black, 3);
        let victim = Piece::new(PieceKind::Knight, Color::Black, 9);
        let friend = Piece::new(PieceKind::Bishop, Color::White, 10);
        let origin = pos("e4");
        let b = board![
            (origin, pawn),
            (pos("e5"), blocker),
            (pos("d5"), victim),
            (pos("f5"), friend),
        ];

        let moves = dest_set(pawn, origin, &b);
        // Forward blocked, left diagonal is a capture, right diagonal is our own piece
        let expected: HashSet<Position> = [pos("d5")].iter().cloned().collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_moves_for_side_initial_position() {
        let b = MailboxBoard::standard_setup();
        let white_moves = moves_for_side(&b, Color::White);
        let black_moves = moves_for_side(&b, Color::Black);
        // 16 pawn moves + 4 knight moves per side
        assert_eq!(white_moves.len(), 20);
        assert_eq!(black_moves.len(), 20);
        for m in &white_moves {
            assert_eq!(m.piece.color, Color::White);
            assert!(!matches!(m.kind, MoveType::Capture(_)));
        }
        let twosteps = white_moves
            .iter()
            .filter(|m| m.kind == MoveType::PawnTwostep)
            .count();
        assert_eq!(twosteps, 8);
    }

    #[test]
    fn test_moves_for_side_is_deterministic() {
        let b = MailboxBoard::standard_setup();
        assert_eq!(
            moves_for_side(&b, Color::White),
            moves_for_side(&b, Color::White)
        );
    }
}
