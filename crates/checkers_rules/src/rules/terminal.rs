//! Terminal state detection.
//!
//! A player loses when they have no pieces, or when none of their
//! pieces has a legal move. A stalemate is scored as a win for the
//! side that caused it, never a draw.

use super::movegen::legal_moves;
use crate::board::Board;
use crate::types::Color;
use tracing::instrument;

/// Checks whether any piece of `color` has at least one legal move.
pub fn has_any_move(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|(index, _)| !legal_moves(board, index, color).is_empty())
}

/// Checks whether the match is over for the player about to move.
///
/// True when `turn` owns zero pieces or owns pieces with no legal move
/// anywhere; the opponent is then the winner.
#[instrument(skip(board))]
pub fn is_game_over(board: &Board, turn: Color) -> bool {
    board.piece_count(turn) == 0 || !has_any_move(board, turn)
}
