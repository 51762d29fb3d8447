//! Check detection, and the make/unmake probe shared by move filtering and
//! move commits.

use crate::board::Board;
use crate::color::Color;
use crate::make_move::Speculation;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

use super::is_legal_move;

/// Return `true` if any enemy piece could legally move onto `color`'s king.
///
/// A board without a king for `color` is reported as not in check.
pub fn is_in_check(color: Color, board: &Board) -> bool {
    let Some(king_sq) = board.find(color, PieceKind::King) else {
        return false;
    };

    board
        .pieces()
        .filter(|(_, piece)| piece.color != color)
        .any(|(sq, piece)| is_legal_move(piece, sq, king_sq, board))
}

/// Return `true` if playing `piece` from `from` to `to` would leave the
/// mover's own king attacked.
///
/// The move is made on `board` for the duration of the probe and undone
/// before returning, whatever the answer.
pub fn leaves_king_in_check(piece: Piece, from: Square, to: Square, board: &mut Board) -> bool {
    let trial = Speculation::new(board, piece, from, to);
    is_in_check(piece.color, &trial)
}
