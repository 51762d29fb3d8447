//! Text rendering of the board with the current selection highlighted.

use std::fmt;

use scacco_core::{Board, Piece, Square, SquareSet};

use crate::config::Glyphs;
use crate::session::Session;

fn glyph(piece: Option<Piece>, glyphs: Glyphs) -> char {
    match (piece, glyphs) {
        (None, _) => '.',
        (Some(piece), Glyphs::Ascii) => piece.fen_char(),
        (Some(piece), Glyphs::Unicode) => piece.symbol(),
    }
}

/// Wrapper that draws a board row 0 first. The selected square is wrapped
/// in parentheses and every highlighted square in brackets.
pub struct BoardView<'a> {
    board: &'a Board,
    selected: Option<Square>,
    highlighted: SquareSet,
    glyphs: Glyphs,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0u8..8 {
                let sq = Square::new(row, col);
                let c = glyph(self.board.get(sq), self.glyphs);
                if self.selected == Some(sq) {
                    write!(f, "({c})")?;
                } else if self.highlighted.contains(sq) {
                    write!(f, "[{c}]")?;
                } else {
                    write!(f, " {c} ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a  b  c  d  e  f  g  h")
    }
}

pub fn render_board(
    board: &Board,
    selected: Option<Square>,
    highlighted: SquareSet,
    glyphs: Glyphs,
) -> BoardView<'_> {
    BoardView {
        board,
        selected,
        highlighted,
        glyphs,
    }
}

/// Draw the session's board with its selection.
pub fn render(session: &Session, glyphs: Glyphs) -> BoardView<'_> {
    let selected = session.selection().map(|selection| selection.square);
    render_board(session.board(), selected, session.highlighted(), glyphs)
}
