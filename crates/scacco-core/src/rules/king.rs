//! King steps.

use crate::square::Square;

/// One square in any direction. Check safety is layered on by the caller.
pub(super) fn king_move_is_legal(from: Square, to: Square) -> bool {
    from.row_distance(to).max(from.col_distance(to)) == 1
}
