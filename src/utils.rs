use rand::Rng;

// For testing purposes: easily creates a board with pieces placed on the
// given squares. Not very efficient.
#[macro_export]
macro_rules! board {
    ( $( ($pos:expr, $piece:expr) ),* $(,)? ) => {
        {
            #[allow(unused_mut)]
            let mut base = $crate::boards::MailboxBoard::empty();
            $(
                base.add($pos, $piece)
                    .expect("board! placed two pieces on one square");
            )*
            base
        }
    };
}

pub fn random_u64(r: &mut impl Rng) -> u64 {
    r.gen_range(u64::MIN..u64::MAX)
}

#[cfg(test)]
mod tests {
    use crate::board;
    use crate::pieces::{Color, Piece, PieceKind};
    use crate::positions::Position;

    #[test]
    fn test_board_macro_places_pieces() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, 0);
        let empty = board![];
        assert_eq!(empty.occupied().count(), 0);

        let single = board![(Position::from_row_col(6, 4), pawn)];
        assert_eq!(single.piece_at(Position::from_row_col(6, 4)), Some(pawn));
        assert_eq!(single.occupied().count(), 1);
    }
}
