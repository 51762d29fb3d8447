//! Knight jumps.

use crate::square::Square;

/// An L-shape; knights jump, so nothing in between matters.
pub(super) fn knight_move_is_legal(from: Square, to: Square) -> bool {
    matches!(
        (from.row_distance(to), from.col_distance(to)),
        (2, 1) | (1, 2)
    )
}

#[cfg(test)]
mod tests {
    use super::knight_move_is_legal;
    use crate::square::Square;

    #[test]
    fn all_eight_jumps_from_the_center() {
        let count = Square::all()
            .filter(|&to| knight_move_is_legal(Square::D4, to))
            .count();
        assert_eq!(count, 8);
    }

    #[test]
    fn corner_has_two_jumps() {
        let targets: Vec<Square> = Square::all()
            .filter(|&to| knight_move_is_legal(Square::A8, to))
            .collect();
        assert_eq!(targets, vec![Square::C7, Square::B6]);
    }

    #[test]
    fn straight_and_diagonal_rejected() {
        assert!(!knight_move_is_legal(Square::D4, Square::D6));
        assert!(!knight_move_is_legal(Square::D4, Square::F6));
    }
}
