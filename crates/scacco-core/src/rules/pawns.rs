//! Pawn pushes and captures.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Straight pushes go forward only; a diagonal step is legal only onto an
/// enemy piece, in either row direction.
pub(super) fn pawn_move_is_legal(color: Color, from: Square, to: Square, board: &Board) -> bool {
    if from.col() == to.col() {
        if board.is_occupied(to) {
            return false;
        }

        let forward = color.forward();
        let d_row = to.row() as i8 - from.row() as i8;
        if d_row == forward {
            return true;
        }

        // Double step from the starting row over an empty square
        d_row == 2 * forward
            && from.row() == color.pawn_row()
            && from
                .offset(forward, 0)
                .is_some_and(|mid| !board.is_occupied(mid))
    } else {
        from.row_distance(to) == 1
            && from.col_distance(to) == 1
            && board.color_on(to) == Some(color.flip())
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_move_is_legal;
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn single_and_double_push_from_start() {
        let board = Board::starting_position();
        assert!(pawn_move_is_legal(Color::White, Square::E2, Square::E3, &board));
        assert!(pawn_move_is_legal(Color::White, Square::E2, Square::E4, &board));
        assert!(!pawn_move_is_legal(Color::White, Square::E2, Square::E5, &board));
        assert!(pawn_move_is_legal(Color::Black, Square::D7, Square::D6, &board));
        assert!(pawn_move_is_legal(Color::Black, Square::D7, Square::D5, &board));
    }

    #[test]
    fn never_backward() {
        let board = Board::empty();
        assert!(!pawn_move_is_legal(Color::White, Square::E4, Square::E3, &board));
        assert!(!pawn_move_is_legal(Color::Black, Square::E5, Square::E6, &board));
    }

    #[test]
    fn double_push_only_from_start_row() {
        let board = Board::empty();
        assert!(!pawn_move_is_legal(Color::White, Square::E3, Square::E5, &board));
        assert!(!pawn_move_is_legal(Color::Black, Square::E6, Square::E4, &board));
    }

    #[test]
    fn blocked_push() {
        let mut board = Board::starting_position();
        board.set(Square::E3, Some(Piece::BLACK_KNIGHT));
        assert!(!pawn_move_is_legal(Color::White, Square::E2, Square::E3, &board));
        assert!(!pawn_move_is_legal(Color::White, Square::E2, Square::E4, &board));

        let mut board = Board::starting_position();
        board.set(Square::E4, Some(Piece::BLACK_KNIGHT));
        assert!(pawn_move_is_legal(Color::White, Square::E2, Square::E3, &board));
        assert!(!pawn_move_is_legal(Color::White, Square::E2, Square::E4, &board));
    }

    #[test]
    fn diagonal_needs_an_enemy() {
        let mut board = Board::empty();
        assert!(!pawn_move_is_legal(Color::White, Square::E4, Square::D5, &board));

        board.set(Square::D5, Some(Piece::BLACK_PAWN));
        assert!(pawn_move_is_legal(Color::White, Square::E4, Square::D5, &board));

        board.set(Square::D5, Some(Piece::WHITE_PAWN));
        assert!(!pawn_move_is_legal(Color::White, Square::E4, Square::D5, &board));
    }

    #[test]
    fn captures_are_not_direction_restricted() {
        let mut board = Board::empty();
        board.set(Square::D3, Some(Piece::BLACK_ROOK));
        assert!(pawn_move_is_legal(Color::White, Square::E4, Square::D3, &board));
    }

    #[test]
    fn no_en_passant_or_long_diagonal() {
        let mut board = Board::empty();
        board.set(Square::D5, Some(Piece::BLACK_PAWN));
        assert!(!pawn_move_is_legal(Color::White, Square::E5, Square::D6, &board));
        board.set(Square::C6, Some(Piece::BLACK_PAWN));
        assert!(!pawn_move_is_legal(Color::White, Square::E4, Square::C6, &board));
    }
}
