//! Move execution: permanent moves and scoped speculative make/unmake.

use std::ops::Deref;

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

impl Board {
    /// Move `piece` from `from` to `to` and return whatever stood on `to`.
    ///
    /// No legality check: the caller has already consulted the rules.
    pub fn make_move(&mut self, piece: Piece, from: Square, to: Square) -> Option<Piece> {
        let captured = self.get(to);
        self.set(from, None);
        self.set(to, Some(piece));
        captured
    }
}

/// A move applied to a board for as long as the guard lives.
///
/// Both touched cells are restored when the guard drops, so every exit path
/// of the caller leaves the board as it found it. The guard derefs to the
/// speculative position for read-only queries.
pub struct Speculation<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    origin: Option<Piece>,
    captured: Option<Piece>,
}

impl<'a> Speculation<'a> {
    /// Apply `piece` from `from` to `to`, displacing the destination occupant.
    pub fn new(board: &'a mut Board, piece: Piece, from: Square, to: Square) -> Speculation<'a> {
        let origin = board.get(from);
        let captured = board.make_move(piece, from, to);
        Speculation {
            board,
            from,
            to,
            origin,
            captured,
        }
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        // Destination first: from == to must end with the origin piece back.
        self.board.set(self.to, self.captured);
        self.board.set(self.from, self.origin);
    }
}

#[cfg(test)]
mod tests {
    use super::Speculation;
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn make_move_returns_captured() {
        let mut board = Board::starting_position();
        let captured = board.make_move(Piece::WHITE_QUEEN, Square::D1, Square::D7);
        assert_eq!(captured, Some(Piece::BLACK_PAWN));
        assert_eq!(board.get(Square::D1), None);
        assert_eq!(board.get(Square::D7), Some(Piece::WHITE_QUEEN));
    }

    #[test]
    fn speculation_shows_the_move_then_restores() {
        let mut board = Board::starting_position();
        let before = board;
        {
            let trial = Speculation::new(&mut board, Piece::WHITE_QUEEN, Square::D1, Square::D7);
            assert_eq!(trial.get(Square::D7), Some(Piece::WHITE_QUEEN));
            assert_eq!(trial.get(Square::D1), None);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn speculation_restores_on_early_return() {
        fn probe(board: &mut Board) -> bool {
            let trial = Speculation::new(board, Piece::WHITE_PAWN, Square::E2, Square::E4);
            if trial.get(Square::E4).is_some() {
                return true;
            }
            false
        }

        let mut board = Board::starting_position();
        let before = board;
        assert!(probe(&mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn null_speculation_is_harmless() {
        let mut board = Board::starting_position();
        let before = board;
        drop(Speculation::new(&mut board, Piece::WHITE_KING, Square::E1, Square::E1));
        assert_eq!(board, before);
    }
}
