//! Turn state: whose move it is, the current selection and its legal
//! destinations, and the board they apply to.

use std::fmt;

use tracing::{debug, trace, warn};

use scacco_core::rules::{is_in_check, leaves_king_in_check, valid_moves};
use scacco_core::{Board, Color, Move, Piece, Square, SquareSet};

/// A selected piece and where it may go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    pub piece: Piece,
    pub destinations: SquareSet,
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was picked up.
    Selected(Selection),
    /// The selected piece moved; the turn passed to the other side.
    Moved {
        mv: Move,
        piece: Piece,
        captured: Option<Piece>,
    },
    /// The move would have left the mover's king attacked; nothing changed.
    Rejected { mv: Move },
    /// A click away from the legal destinations dropped the selection.
    Deselected { square: Square },
    /// With nothing selected, the click hit an empty square or an enemy piece.
    Ignored { square: Square },
}

/// One game in progress.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    turn: Color,
    selection: Option<Selection>,
}

impl Session {
    /// Start from the standard position with White to move.
    pub fn new() -> Self {
        Self::from_position(Board::starting_position(), Color::White)
    }

    /// Start from an arbitrary position.
    pub fn from_position(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            selection: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Legal destinations of the current selection, empty without one.
    pub fn highlighted(&self) -> SquareSet {
        self.selection
            .map_or(SquareSet::EMPTY, |selection| selection.destinations)
    }

    /// Legal destinations for whatever stands on `sq`, regardless of turn.
    pub fn destinations_from(&mut self, sq: Square) -> SquareSet {
        match self.board.get(sq) {
            Some(piece) => valid_moves(piece, sq, &mut self.board),
            None => SquareSet::EMPTY,
        }
    }

    /// Return `true` if `color`'s king is attacked on the current board.
    pub fn in_check(&self, color: Color) -> bool {
        is_in_check(color, &self.board)
    }

    /// Drop the current selection, if any.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// Handle a click on `sq`.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        match self.selection.take() {
            Some(selection) if selection.destinations.contains(sq) => self.commit(selection, sq),
            Some(selection) => {
                debug!(square = %selection.square, "selection dropped");
                ClickOutcome::Deselected {
                    square: selection.square,
                }
            }
            None => self.select(sq),
        }
    }

    fn select(&mut self, sq: Square) -> ClickOutcome {
        let piece = match self.board.get(sq) {
            Some(piece) if piece.color == self.turn => piece,
            _ => return ClickOutcome::Ignored { square: sq },
        };

        let destinations = valid_moves(piece, sq, &mut self.board);
        let selection = Selection {
            square: sq,
            piece,
            destinations,
        };
        debug!(square = %sq, ?piece, count = destinations.count(), "selected");
        self.selection = Some(selection);
        ClickOutcome::Selected(selection)
    }

    fn commit(&mut self, selection: Selection, to: Square) -> ClickOutcome {
        let Selection { square: from, piece, .. } = selection;
        let mv = Move::new(from, to);

        if leaves_king_in_check(piece, from, to, &mut self.board) {
            warn!(%mv, "move leaves own king in check");
            return ClickOutcome::Rejected { mv };
        }

        let captured = self.board.make_move(piece, from, to);
        self.turn = !self.turn;
        debug!(%mv, ?piece, ?captured, "moved");
        trace!("board after {mv}:\n{}", self.board.pretty());
        ClickOutcome::Moved { mv, piece, captured }
    }
}

impl fmt::Display for ClickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickOutcome::Selected(selection) if selection.destinations.is_empty() => write!(
                f,
                "selected {} {}: no legal moves",
                selection.square, selection.piece
            ),
            ClickOutcome::Selected(selection) => write!(
                f,
                "selected {} {}: {}",
                selection.square, selection.piece, selection.destinations
            ),
            ClickOutcome::Moved {
                mv,
                captured: Some(captured),
                ..
            } => write!(f, "moved {mv} captures {captured}"),
            ClickOutcome::Moved { mv, .. } => write!(f, "moved {mv}"),
            ClickOutcome::Rejected { mv } => write!(f, "rejected {mv}: king would be in check"),
            ClickOutcome::Deselected { square } => write!(f, "deselected {square}"),
            ClickOutcome::Ignored { square } => write!(f, "ignored {square}"),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
