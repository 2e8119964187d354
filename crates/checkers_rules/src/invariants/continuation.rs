//! Continuation invariant: a pending multi-jump is always live.

use super::Invariant;
use crate::rules::capture_moves;
use crate::typestate::GameInProgress;

/// Invariant: `must_continue_from`, when set, names a piece of the
/// player to move that has at least one capture available.
pub struct ContinuationInvariant;

impl Invariant<GameInProgress> for ContinuationInvariant {
    fn holds(game: &GameInProgress) -> bool {
        match game.must_continue_from() {
            None => true,
            Some(index) => {
                let owns = game
                    .board()
                    .get(index)
                    .is_some_and(|cell| cell.holds(game.to_move()));
                owns && !capture_moves(game.board(), index).is_empty()
            }
        }
    }

    fn description() -> &'static str {
        "A pending continuation points at a piece of the mover with a capture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::board::index;
    use crate::typestate::{GameResult, GameSetup};
    use crate::types::{Cell, Color, Piece};

    fn place(game: &mut GameInProgress, row: u8, col: u8, piece: Piece) {
        game.board.set(index(row, col), Cell::Occupied(piece)).unwrap();
    }

    #[test]
    fn test_no_pending_continuation_holds() {
        let game = GameSetup::new().start(Color::Black);
        assert!(ContinuationInvariant::holds(&game));
    }

    #[test]
    fn test_pending_continuation_after_double_jump_setup() {
        // Black jumps (2,1) -> (4,3); a second Red man at (5,4) leaves
        // a follow-up capture, so the continuation must be recorded.
        let mut game = GameInProgress::from_parts(crate::board::Board::empty(), Color::Black, None);
        place(&mut game, 2, 1, Piece::man(Color::Black));
        place(&mut game, 3, 2, Piece::man(Color::Red));
        place(&mut game, 5, 4, Piece::man(Color::Red));
        place(&mut game, 7, 0, Piece::man(Color::Red));

        let result = game.make_move(Move::new(index(2, 1), index(4, 3))).unwrap();
        let game = match result {
            GameResult::InProgress(game) => game,
            GameResult::Finished(_) => panic!("Expected in-progress game"),
        };

        assert_eq!(game.must_continue_from(), Some(index(4, 3)));
        assert!(ContinuationInvariant::holds(&game));
    }

    #[test]
    fn test_stale_continuation_violates() {
        let mut game = GameSetup::new().start(Color::Black);
        game.must_continue_from = Some(index(2, 1));
        assert!(!ContinuationInvariant::holds(&game));
    }
}
