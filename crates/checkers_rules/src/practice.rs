//! Random move picker for offline practice.
//!
//! Picks uniformly among the moves the current player may actually
//! submit. No search and no evaluation; practice strength only.

use crate::action::Move;
use crate::typestate::GameInProgress;
use rand::Rng;
use tracing::{debug, instrument};

/// Picks a uniformly random legal move for the current player.
///
/// Honors the mandatory-capture rule and a pending multi-jump. Returns
/// `None` only for a state with no legal move, which the engine
/// normally converts to `GameFinished` before it is ever observed.
#[instrument(skip(game, rng))]
pub fn random_move<R: Rng>(game: &GameInProgress, rng: &mut R) -> Option<Move> {
    let moves = game.valid_moves();
    if moves.is_empty() {
        return None;
    }
    let mov = moves[rng.random_range(0..moves.len())];
    debug!(%mov, "Practice move picked");
    Some(mov)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, index};
    use crate::types::{Cell, Color, Piece};
    use crate::typestate::GameSetup;

    #[test]
    fn test_picks_a_legal_opening_move() {
        let game = GameSetup::new().start(Color::Black);
        let mut rng = rand::rng();

        for _ in 0..50 {
            let mov = random_move(&game, &mut rng).unwrap();
            assert!(game.legal_moves(mov.from).contains(&mov.to));
        }
    }

    #[test]
    fn test_picks_only_captures_when_one_exists() {
        let mut board = Board::empty();
        board
            .set(index(4, 3), Cell::Occupied(Piece::man(Color::Red)))
            .unwrap();
        board
            .set(index(3, 2), Cell::Occupied(Piece::man(Color::Black)))
            .unwrap();
        board
            .set(index(6, 5), Cell::Occupied(Piece::man(Color::Red)))
            .unwrap();
        let game = GameInProgress::from_parts(board, Color::Red, None);
        let mut rng = rand::rng();

        for _ in 0..50 {
            let mov = random_move(&game, &mut rng).unwrap();
            assert_eq!(mov, Move::new(index(4, 3), index(2, 1)));
        }
    }

    #[test]
    fn test_no_moves_yields_none() {
        let game = GameInProgress::from_parts(Board::empty(), Color::Red, None);
        let mut rng = rand::rng();
        assert_eq!(random_move(&game, &mut rng), None);
    }
}
