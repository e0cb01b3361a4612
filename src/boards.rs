use crate::chess_errors::*;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::Position;
use array_init::array_init;
use std::fmt::{self, Display};
use std::ops;

// ---------------------------------------------
// Board
// ---------------------------------------------

pub const BOARD_SIZE: u8 = 8;

// Displays the first 64 items from an iterator in a chessboard style:
//
//   a  b  c  d  e  f  g
// 8 i1 i2 i3 ...        8
// 7 ....
//
// Where i1,...i64 are the items of the iterator.
// It is required that the iterator has at least 64 items, else we will return with an error.
fn display_chessboard_style<I, C>(it: &mut I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    I: Iterator<Item = C>,
    C: Display,
{
    write!(f, " ")?;
    for c in 'a'..'i' {
        write!(f, " {}", c)?;
    }
    for row in 0..BOARD_SIZE {
        write!(f, "\n{} ", 8 - row)?;
        for _col in 0..BOARD_SIZE {
            let i = it.next().expect("Iterator ended too early");
            write!(f, "{} ", i)?;
        }
        write!(f, "{} ", 8 - row)?;
    }
    write!(f, "\n ")?;
    for c in 'a'..'i' {
        write!(f, " {}", c)?;
    }
    Ok(())
}

/// An 8x8 mailbox board: one cell per square, each holding at most one piece.
/// Also owns the per-game record of which piece identities have moved, which
/// the pawn double-step rule depends on. Cloning a board yields a fully
/// independent position, which is how the search simulates moves.
#[derive(Clone, PartialEq)]
pub struct MailboxBoard {
    cells: [Option<Piece>; (BOARD_SIZE * BOARD_SIZE) as usize],
    // Bit per identity_index. Fits both sides' 16 pieces.
    moved: u32,
}

impl MailboxBoard {
    pub fn empty() -> MailboxBoard {
        MailboxBoard {
            cells: array_init(|_| None),
            moved: 0,
        }
    }

    /// Returns a board with the figures placed on standard chess starting
    /// positions. Instance ids are assigned deterministically: pawns get
    /// their column (0..8), back-rank pieces get 8..16 from the a-file.
    pub fn standard_setup() -> MailboxBoard {
        use PieceKind::*;
        const BACK_RANK: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = MailboxBoard::empty();
        for col in 0..BOARD_SIZE {
            let kind = BACK_RANK[col as usize];
            let black_corner = Position::from_row_col(0, 0);
            let white_corner = Position::from_row_col(7, 0);
            board
                .add(black_corner + col, Piece::new(kind, Color::Black, 8 + col))
                .expect("Standard setup failed; board in invalid state.");
            board
                .add(white_corner + col, Piece::new(kind, Color::White, 8 + col))
                .expect("Standard setup failed; board in invalid state.");
            board
                .add(
                    Position::from_row_col(1, col),
                    Piece::new(Pawn, Color::Black, col),
                )
                .expect("Standard setup failed; board in invalid state.");
            board
                .add(
                    Position::from_row_col(6, col),
                    Piece::new(Pawn, Color::White, col),
                )
                .expect("Standard setup failed; board in invalid state.");
        }
        board
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.cells[pos]
    }

    /// Places a piece on an empty square. Errors if the square is occupied,
    /// since silently stacking pieces would corrupt the position.
    pub fn add(&mut self, pos: Position, piece: Piece) -> ChessResult<()> {
        let current = &mut self.cells[pos];
        if let Some(p) = current {
            Err(format!("Piece at {} is not empty but {}", pos, p).into())
        } else {
            *current = Some(piece);
            Ok(())
        }
    }

    /// All occupied squares with their pieces, in scan order (a8, b8, ..., h1).
    /// The move generator and search enumerate in exactly this order, which
    /// pins down the first-found tie-break.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|p| (Position::from(i), p)))
    }

    /// Finds the square a given piece identity currently stands on.
    pub fn locate(&self, piece: Piece) -> Option<Position> {
        self.occupied()
            .find(|&(_, p)| p == piece)
            .map(|(pos, _)| pos)
    }

    /// Applies a move: the piece leaves its start square and lands on the end
    /// square, silently removing whatever stood there (that is how captures
    /// happen). Records that this identity has moved.
    pub fn apply_move(&mut self, m: &Move) {
        debug_assert!(
            self.cells[m.start] == Some(m.piece),
            "\nMove illegal on board. {}: {} is not at {}\n{}",
            m,
            m.piece,
            m.start,
            self
        );
        self.cells[m.start] = None;
        self.cells[m.end] = Some(m.piece);
        self.moved |= 1 << m.piece.identity_index();
    }

    /// Whether this piece identity has moved at any point in the game.
    pub fn has_moved(&self, piece: Piece) -> bool {
        self.moved & (1 << piece.identity_index()) != 0
    }

    pub fn has_king(&self, color: Color) -> bool {
        self.occupied()
            .any(|(_, p)| p.kind == PieceKind::King && p.color == color)
    }
}

impl ops::Index<Position> for MailboxBoard {
    type Output = Option<Piece>;

    fn index(&self, index: Position) -> &Option<Piece> {
        &self.cells[index]
    }
}

impl Display for MailboxBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut it = self.cells.iter().map(|cell| match cell {
            Some(p) => p.to_string(),
            None => ".".to_string(),
        });
        display_chessboard_style(&mut it, f)
    }
}

impl fmt::Debug for MailboxBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "moved: {:#034b}\n{}", self.moved, self)
    }
}
