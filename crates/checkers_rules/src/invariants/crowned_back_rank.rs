//! Crowning invariant: no man ever rests on its crowning row.

use super::Invariant;
use crate::board::row_col;
use crate::types::Rank;
use crate::typestate::GameInProgress;

/// Invariant: a man reaching its crowning row is a king in the same
/// transition.
///
/// There is no intermediate state in which a man sits on the opponent's
/// back rank; promotion happens inside the move that lands it there.
pub struct CrownedBackRankInvariant;

impl Invariant<GameInProgress> for CrownedBackRankInvariant {
    fn holds(game: &GameInProgress) -> bool {
        use strum::IntoEnumIterator;
        crate::types::Color::iter().all(|color| {
            game.board().pieces(color).all(|(index, piece)| {
                piece.rank == Rank::King || row_col(index).0 != color.crowning_row()
            })
        })
    }

    fn description() -> &'static str {
        "No man rests on its crowning row"
    }
}
