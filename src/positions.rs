use crate::chess_errors::*;
use std::fmt::{self, Display};
use std::ops;
use std::str::FromStr;

// Chessboard positions on a 8x8 board.
//
// Numbered as follows:
//
//     a  b  c  d  e  f  g  h
//   ---------------------------
// 8 | 0  1  2  3  4  5  6  7  | 8
// 7 | 8  9  10 11 12 13 14 15 | 7
// 6 | 16 17 18 19 20 21 22 23 | 6
// 5 | 24 25 26 27 28 29 30 31 | 5
// 4 | 32 33 34 35 36 37 38 39 | 4
// 3 | 40 41 42 43 44 45 46 47 | 3
// 2 | 48 49 50 51 52 53 54 55 | 2
// 1 | 56 57 58 59 60 61 62 63 | 1
//   ---------------------------
//    a  b  c  d  e  f  g  h
//
// Row 0 is thus the black back rank, row 7 the white back rank.
//
// ---------------------------------------------
// Positions
// ---------------------------------------------

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl From<u8> for Position {
    fn from(u: u8) -> Self {
        debug_assert!(u < 64, "Invalid position: {}", u);
        Position(u)
    }
}

impl From<usize> for Position {
    fn from(u: usize) -> Self {
        (u as u8).into()
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Error is rather big, so we use a closure to avoid copies
        let err_closure = || -> ChessError { format!("Invalid Chess position {}", s).into() };
        let mut chars = s.chars();

        let col = chars.next().ok_or_else(err_closure)?;
        let row = chars
            .next()
            .map(|r| r.to_digit(10))
            .flatten()
            .ok_or_else(err_closure)?;

        // We need to catch invalid rows early, else we panic on unsigned integer underflow
        //    Too many characters || row is invalid
        if chars.next().is_some() || row > 8 || row == 0 {
            return Err(err_closure());
        }

        if !('a'..='h').contains(&col) {
            return Err(err_closure());
        }

        // number part v               v letter part
        let pos: u8 = ((8 - row) * 8) as u8 + col as u8 - b'a';
        Ok(Position::from(pos))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_row_col();
        write!(
            f,
            "{}{}",
            ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'][col as usize],
            8 - row,
        )
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

pub struct PositionIterator(u8);

impl Iterator for PositionIterator {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > 63 {
            None
        } else {
            self.0 = self.0 + 1u8;
            Some((self.0 - 1).into())
        }
    }
}

impl Position {
    /// Returns row and col from position.
    /// Example: Position 63 (h1 on the chess board) is mapped to (7,7)
    pub const fn to_row_col(self) -> (u8, u8) {
        (self.0 / 8, self.0 % 8)
    }

    /// Transforms a row and a col to a Position on the board.
    /// Row and col must correspond to a legal board position.
    pub fn from_row_col(row: u8, col: u8) -> Position {
        debug_assert!(Position::in_board(row as i16, col as i16));
        (row * 8 + col).into()
    }

    /// Checks if row and col belong to a legal board position.
    pub const fn in_board(row: i16, col: i16) -> bool {
        row >= 0 && col >= 0 && row < 8 && col < 8
    }

    /// Position reached by stepping d_row rows down and d_col cols right,
    /// or None if that would leave the board. Workhorse of the move generator.
    pub fn offset(self, d_row: i16, d_col: i16) -> Option<Position> {
        let (row, col) = self.to_row_col();
        let (new_row, new_col) = (row as i16 + d_row, col as i16 + d_col);
        if Position::in_board(new_row, new_col) {
            Some(Position::from_row_col(new_row as u8, new_col as u8))
        } else {
            None
        }
    }

    /// Allows access to underlying u8. Should only be used when necessary.
    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Allows to iterate over all positions on the board
    pub fn all_positions() -> PositionIterator {
        PositionIterator(0)
    }
}

impl<T> ops::Index<Position> for [T; 64] {
    type Output = T;

    fn index(&self, index: Position) -> &T {
        &self[index.0 as usize]
    }
}

impl<T> ops::IndexMut<Position> for [T; 64] {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        &mut self[index.0 as usize]
    }
}

impl_op_ex_commutative!(+ |a: &Position, b: &u8| -> Position { Position::from(a.0 + b) });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_roundtrip() {
        for pos in Position::all_positions() {
            let (row, col) = pos.to_row_col();
            assert_eq!(Position::from_row_col(row, col), pos);
        }
    }

    #[test]
    fn test_parse_display_roundtrip() {
        assert_eq!("e2".parse::<Position>().unwrap(), Position::from(52u8));
        assert_eq!("a8".parse::<Position>().unwrap(), Position::from(0u8));
        assert_eq!("h1".parse::<Position>().unwrap(), Position::from(63u8));
        for pos in Position::all_positions() {
            assert_eq!(pos.to_string().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Position>().is_err());
        assert!("e".parse::<Position>().is_err());
        assert!("e9".parse::<Position>().is_err());
        assert!("e0".parse::<Position>().is_err());
        assert!("i4".parse::<Position>().is_err());
        assert!("e22".parse::<Position>().is_err());
    }

    #[test]
    fn test_offset() {
        let e4: Position = "e4".parse().unwrap();
        assert_eq!(e4.offset(-1, 0), Some("e5".parse().unwrap()));
        assert_eq!(e4.offset(1, 1), Some("f3".parse().unwrap()));
        let a1: Position = "a1".parse().unwrap();
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
    }

    #[test]
    fn test_position_add() {
        let a8 = Position::from(0u8);
        assert_eq!(a8 + 7u8, Position::from(7u8));
    }
}
