//! Sliding pieces (bishop, rook, queen) and the path check they share.

use crate::board::Board;
use crate::square::Square;

/// Return `true` if every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares on a common rank, file or diagonal, which is
/// all callers ever pass. Unaligned squares have no path and return `false`.
pub fn path_is_clear(from: Square, to: Square, board: &Board) -> bool {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;
    if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
        return false;
    }

    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let mut current = from;
    loop {
        current = match current.offset(step_row, step_col) {
            Some(sq) => sq,
            None => return false,
        };
        if current == to {
            return true;
        }
        if board.is_occupied(current) {
            return false;
        }
    }
}

#[inline]
fn is_orthogonal(from: Square, to: Square) -> bool {
    (from.row() == to.row()) != (from.col() == to.col())
}

#[inline]
fn is_diagonal(from: Square, to: Square) -> bool {
    let d_row = from.row_distance(to);
    d_row != 0 && d_row == from.col_distance(to)
}

pub(super) fn rook_move_is_legal(from: Square, to: Square, board: &Board) -> bool {
    is_orthogonal(from, to) && path_is_clear(from, to, board)
}

pub(super) fn bishop_move_is_legal(from: Square, to: Square, board: &Board) -> bool {
    is_diagonal(from, to) && path_is_clear(from, to, board)
}

pub(super) fn queen_move_is_legal(from: Square, to: Square, board: &Board) -> bool {
    (is_orthogonal(from, to) || is_diagonal(from, to)) && path_is_clear(from, to, board)
}
