//! Mapping pointer positions in the virtual window onto board squares.

use scacco_core::Square;

use crate::error::ShellError;

/// Pixel layout of the board inside the window.
///
/// Squares are `width / 8` pixels on each side and row 0 is drawn at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    square_size: u32,
}

impl BoardGeometry {
    /// Build the layout for a `width` x `height` window.
    pub fn new(width: u32, height: u32) -> Result<BoardGeometry, ShellError> {
        let square_size = width / 8;
        if square_size == 0 || height < square_size * 8 {
            return Err(ShellError::WindowTooSmall { width, height });
        }
        Ok(BoardGeometry { square_size })
    }

    /// Side length of one square in pixels.
    #[inline]
    pub fn square_size(&self) -> u32 {
        self.square_size
    }

    /// Return the square under the pixel `(x, y)`, or `None` off the board.
    pub fn square_at(&self, x: u32, y: u32) -> Option<Square> {
        let row = y / self.square_size;
        let col = x / self.square_size;
        if row >= 8 || col >= 8 {
            return None;
        }
        Square::from_coords(row as u8, col as u8)
    }
}
