//! Integration tests for the rules engine.
//!
//! Covers the board round-trip, the make/unmake discipline of
//! `valid_moves`, and the check-related positions from real play.

use scacco_core::rules::{is_in_check, is_legal_move, path_is_clear, valid_moves};
use scacco_core::{Board, Color, Piece, PieceKind, Square, SquareSet};

fn set_of(squares: &[Square]) -> SquareSet {
    squares.iter().copied().collect()
}

// ── Board state ───────────────────────────────────────────────────────────────

#[test]
fn set_then_get_for_every_square_and_piece() {
    let mut board = Board::empty();
    for sq in Square::all() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Some(Piece::new(color, kind));
                board.set(sq, piece);
                assert_eq!(board.get(sq), piece);
            }
        }
        board.set(sq, None);
        assert_eq!(board.get(sq), None);
    }
}

// ── Make/unmake discipline ────────────────────────────────────────────────────

#[test]
fn valid_moves_leaves_start_position_untouched() {
    let mut board = Board::starting_position();
    let before = board;
    for from in Square::all() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                valid_moves(Piece::new(color, kind), from, &mut board);
                assert_eq!(board, before, "{color:?} {kind:?} from {from}");
            }
        }
    }
}

#[test]
fn valid_moves_leaves_board_untouched_when_nothing_is_legal() {
    // The queen on b2 is undefended, so taking it is the one way out.
    let mut board: Board = "k7/8/8/8/8/8/1q6/K7".parse().unwrap();
    let before = board;
    let moves = valid_moves(Piece::WHITE_KING, Square::A1, &mut board);
    assert_eq!(moves, Square::B2.set());
    assert_eq!(board, before);

    // a2, b1 and b2 are all king steps, but every one lands on a rook line.
    let mut board: Board = "kr6/8/8/8/8/8/7r/K7".parse().unwrap();
    let before = board;
    for to in [Square::A2, Square::B1, Square::B2] {
        assert!(is_legal_move(Piece::WHITE_KING, Square::A1, to, &board));
    }
    let moves = valid_moves(Piece::WHITE_KING, Square::A1, &mut board);
    assert!(moves.is_empty());
    assert_eq!(board, before);
}

// ── Start position ────────────────────────────────────────────────────────────

#[test]
fn rook_in_the_corner_is_boxed_in() {
    let board = Board::starting_position();
    let from = Square::new(7, 0);
    for to in Square::all() {
        assert!(
            !is_legal_move(Piece::WHITE_ROOK, from, to, &board),
            "rook should not reach {to}"
        );
    }
}

#[test]
fn king_pawn_single_and_double_step() {
    let mut board = Board::starting_position();
    let from = Square::new(6, 4);
    let moves = valid_moves(Piece::WHITE_PAWN, from, &mut board);
    assert_eq!(moves, set_of(&[Square::new(5, 4), Square::new(4, 4)]));

    board.set(Square::new(4, 4), Some(Piece::BLACK_PAWN));
    let moves = valid_moves(Piece::WHITE_PAWN, from, &mut board);
    assert_eq!(moves, set_of(&[Square::new(5, 4)]));

    board.set(Square::new(4, 4), Some(Piece::WHITE_KNIGHT));
    let moves = valid_moves(Piece::WHITE_PAWN, from, &mut board);
    assert_eq!(moves, set_of(&[Square::new(5, 4)]));
}

#[test]
fn destinations_come_out_in_scan_order() {
    let mut board = Board::starting_position();
    let moves: Vec<Square> = valid_moves(Piece::WHITE_PAWN, Square::E2, &mut board).collect();
    assert_eq!(moves, vec![Square::E4, Square::E3]);
}

// ── Check ─────────────────────────────────────────────────────────────────────

#[test]
fn rook_check_and_block() {
    assert!(!is_in_check(Color::White, &Board::starting_position()));

    let mut board = Board::empty();
    board.set(Square::new(4, 4), Some(Piece::WHITE_KING));
    board.set(Square::new(4, 0), Some(Piece::BLACK_ROOK));
    assert!(is_in_check(Color::White, &board));

    board.set(Square::new(4, 2), Some(Piece::BLACK_KNIGHT));
    assert!(!is_in_check(Color::White, &board));
}

#[test]
fn king_avoids_squares_on_the_rook_line() {
    // White king d4, black rook a5 sweeps the fifth rank.
    let mut board: Board = "7k/8/8/r7/3K4/8/8/8".parse().unwrap();
    let before = board;
    let moves = valid_moves(Piece::WHITE_KING, Square::D4, &mut board);
    let expected = set_of(&[Square::C4, Square::E4, Square::C3, Square::D3, Square::E3]);
    assert_eq!(moves, expected);
    assert_eq!(board, before);

    for excluded in [Square::C5, Square::D5, Square::E5] {
        assert!(is_legal_move(Piece::WHITE_KING, Square::D4, excluded, &board));
        assert!(!moves.contains(excluded));
    }
}

#[test]
fn path_check_on_start_position() {
    let board = Board::starting_position();
    assert!(path_is_clear(Square::D1, Square::D2, &board));
    assert!(!path_is_clear(Square::D1, Square::D3, &board));
    assert!(path_is_clear(Square::D3, Square::D6, &board));
}

// ── Purity ────────────────────────────────────────────────────────────────────

#[test]
fn is_legal_move_is_repeatable() {
    let board: Board = "r3k2r/ppp2ppp/2n5/3qp3/3P4/2N2N2/PPP2PPP/R2QK2R".parse().unwrap();
    for from in Square::all() {
        let Some(piece) = board.get(from) else {
            continue;
        };
        for to in Square::all() {
            let first = is_legal_move(piece, from, to, &board);
            let second = is_legal_move(piece, from, to, &board);
            assert_eq!(first, second, "{piece:?} {from} -> {to}");
        }
    }
}
