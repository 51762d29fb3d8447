//! Move legality, check detection and self-check filtering.
//!
//! Every function here is stateless: the board is passed in on each call and
//! nothing is retained between calls. Functions taking `&mut Board` mutate it
//! speculatively and restore it before returning.

mod check;
mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::board::Board;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;
use crate::square_set::SquareSet;

pub use self::check::{is_in_check, leaves_king_in_check};
pub use self::sliders::path_is_clear;

use self::king::king_move_is_legal;
use self::knights::knight_move_is_legal;
use self::pawns::pawn_move_is_legal;
use self::sliders::{bishop_move_is_legal, queen_move_is_legal, rook_move_is_legal};

/// Return `true` if `piece`, standing on `from`, may move to `to`.
///
/// The caller vouches that `piece` is what stands on `from`; the board is
/// only consulted for the destination and the squares in between. Whether the
/// move exposes the mover's own king is not considered here, see
/// [`valid_moves`].
pub fn is_legal_move(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }

    // No self-capture
    if board.color_on(to) == Some(piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_move_is_legal(piece.color, from, to, board),
        PieceKind::Knight => knight_move_is_legal(from, to),
        PieceKind::Bishop => bishop_move_is_legal(from, to, board),
        PieceKind::Rook => rook_move_is_legal(from, to, board),
        PieceKind::Queen => queen_move_is_legal(from, to, board),
        PieceKind::King => king_move_is_legal(from, to),
    }
}

/// [`is_legal_move`] for a square's occupant; an empty slot never moves.
pub fn is_legal_occupant(occupant: Option<Piece>, from: Square, to: Square, board: &Board) -> bool {
    occupant.is_some_and(|piece| is_legal_move(piece, from, to, board))
}

/// Return every destination of `piece` on `from` that is legal and does not
/// leave its own king in check, in row-major order.
///
/// The board is borrowed mutably for speculative make/unmake and is identical
/// to its input when this returns.
pub fn valid_moves(piece: Piece, from: Square, board: &mut Board) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    for to in Square::all() {
        if is_legal_move(piece, from, to, board) && !leaves_king_in_check(piece, from, to, board) {
            moves.insert(to);
        }
    }
    trace!(%from, ?piece, count = moves.count(), "valid moves");
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn starting_position_has_twenty_moves() {
        let mut board = Board::starting_position();
        let total: u32 = board
            .side(Color::White)
            .map(|sq| {
                let piece = board.get(sq).unwrap();
                valid_moves(piece, sq, &mut board).count()
            })
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn null_move_is_never_legal() {
        let board = Board::empty();
        for kind in PieceKind::ALL {
            let piece = Piece::new(Color::White, kind);
            assert!(!is_legal_move(piece, Square::E4, Square::E4, &board), "{piece:?}");
        }
    }

    #[test]
    fn self_capture_rejected() {
        let board = Board::starting_position();
        assert!(!is_legal_move(Piece::WHITE_QUEEN, Square::D1, Square::D2, &board));
        assert!(!is_legal_move(Piece::WHITE_KNIGHT, Square::B1, Square::D2, &board));
    }

    #[test]
    fn empty_occupant_never_moves() {
        let board = Board::starting_position();
        assert!(!is_legal_occupant(board.get(Square::E4), Square::E4, Square::E5, &board));
        assert!(is_legal_occupant(board.get(Square::E2), Square::E2, Square::E4, &board));
    }

    #[test]
    fn knight_jumps_from_start() {
        let mut board = Board::starting_position();
        let moves = valid_moves(Piece::WHITE_KNIGHT, Square::B1, &mut board);
        assert_eq!(moves, Square::A3.set() | Square::C3.set());
    }

    #[test]
    fn pinned_piece_keeps_only_moves_along_the_pin() {
        // White king e1, white rook e4, black rook e8: the white rook may only
        // slide along the e-file.
        let mut board: Board = "4r2k/8/8/8/4R3/8/8/4K3".parse().unwrap();
        let moves = valid_moves(Piece::WHITE_ROOK, Square::E4, &mut board);
        let expected: SquareSet = [
            Square::E8,
            Square::E7,
            Square::E6,
            Square::E5,
            Square::E3,
            Square::E2,
        ]
        .into_iter()
        .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn in_check_only_answers_are_kept() {
        // White king e1 checked by the rook on e8: the bishop on c2 can only
        // interpose on e4.
        let mut board: Board = "4r2k/8/8/8/8/8/2B5/4K3".parse().unwrap();
        let moves = valid_moves(Piece::WHITE_BISHOP, Square::C2, &mut board);
        assert_eq!(moves, Square::E4.set());
    }
}
