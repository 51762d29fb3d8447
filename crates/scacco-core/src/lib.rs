//! Core chess types: board state, move legality and check detection.

mod board;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
mod piece;
mod square;
mod square_set;

pub mod rules;

pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_PLACEMENT;
pub use make_move::Speculation;
pub use piece::{Piece, PieceKind};
pub use square::Square;
pub use square_set::SquareSet;
