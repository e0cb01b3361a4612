use std::fmt::{self, Display};

// ---------------------------------------------
// Pieces
// ---------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn push for this color. White pawns walk towards
    /// row 0, black pawns towards row 7.
    pub const fn forward(self) -> i16 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A concrete piece on the board. Two pieces of the same kind and color are
/// still distinct (eight white pawns!), so each carries an instance id that
/// is unique within its color. The board relocates pieces by this full
/// identity when simulating moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub id: u8,
}

/// Upper bound on instance ids per color (a side starts with 16 pieces).
pub const PIECES_PER_COLOR: u8 = 16;

impl Piece {
    pub fn new(kind: PieceKind, color: Color, id: u8) -> Piece {
        debug_assert!(id < PIECES_PER_COLOR, "Instance id out of range: {}", id);
        Piece { kind, color, id }
    }

    /// Index into per-identity tables (moved-piece tracking): 0..32,
    /// unique per (color, id) pair.
    pub fn identity_index(self) -> usize {
        let color_offset = match self.color {
            Color::White => 0,
            Color::Black => PIECES_PER_COLOR as usize,
        };
        color_offset + self.id as usize
    }

    /// Index into per-type tables (Zobrist hashing): 0..12,
    /// one slot per (kind, color) combination.
    pub fn type_index(self) -> usize {
        let kind = match self.kind {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        };
        match self.color {
            Color::White => kind,
            Color::Black => kind + 6,
        }
    }

    /// Letter used in algebraic move notation. Pawns have none.
    pub fn algebraic(self) -> &'static str {
        match self.kind {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Color::*;
        use PieceKind::*;
        let symbol = match (self.kind, self.color) {
            (King, White) => '\u{2654}',
            (Queen, White) => '\u{2655}',
            (Rook, White) => '\u{2656}',
            (Bishop, White) => '\u{2657}',
            (Knight, White) => '\u{2658}',
            (Pawn, White) => '\u{2659}',
            (King, Black) => '\u{265a}',
            (Queen, Black) => '\u{265b}',
            (Rook, Black) => '\u{265c}',
            (Bishop, Black) => '\u{265d}',
            (Knight, Black) => '\u{265e}',
            (Pawn, Black) => '\u{265f}',
        };
        write!(f, "{}", symbol)
    }
}
