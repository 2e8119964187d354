//! Dark-square invariant: pieces live on dark squares only.

use super::Invariant;
use crate::board::{CELL_COUNT, is_dark_square, row_col};
use crate::typestate::GameInProgress;

/// Invariant: every occupied cell is a dark square.
///
/// Light squares are permanently empty; no rule can ever place a piece
/// on one.
pub struct DarkSquaresInvariant;

impl Invariant<GameInProgress> for DarkSquaresInvariant {
    fn holds(game: &GameInProgress) -> bool {
        (0..CELL_COUNT).all(|index| {
            let (row, col) = row_col(index);
            is_dark_square(row, col) || game.board().cells()[index as usize].is_empty()
        })
    }

    fn description() -> &'static str {
        "Every occupied cell is a dark square"
    }
}
