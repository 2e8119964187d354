//! Move application.
//!
//! Application is a pure function from a board and a validated move to
//! a new board value. The caller's board is never mutated; the session
//! layer swaps in the returned value only after validation succeeded.

use crate::board::{Board, row_col};
use crate::types::{Cell, Piece, Rank};
use tracing::instrument;

/// Applies a validated move, returning the new board and whether the
/// moved piece was promoted.
///
/// Clears the captured cells, relocates the piece from `from` to `to`,
/// and crowns a man that lands on its crowning row in the same
/// transition. Indices are assumed validated; an empty source leaves
/// the board unchanged.
#[instrument(skip(board))]
pub fn apply(board: &Board, from: u8, to: u8, captures: &[u8]) -> (Board, bool) {
    let mut cells = *board.cells();

    let Cell::Occupied(piece) = cells[from as usize] else {
        return (board.clone(), false);
    };

    for &captured in captures {
        cells[captured as usize] = Cell::Empty;
    }

    let (row, _) = row_col(to);
    let promoted = piece.rank == Rank::Man && row == piece.color.crowning_row();
    let piece = if promoted {
        Piece::king(piece.color)
    } else {
        piece
    };

    cells[from as usize] = Cell::Empty;
    cells[to as usize] = Cell::Occupied(piece);

    (Board::from_cells(cells), promoted)
}
