//! Contract-based validation for checkers moves.
//!
//! Contracts define correctness through preconditions and
//! postconditions, formalizing Hoare-style reasoning: {P} action {Q}.
//! The precondition ladder mirrors the order in which the rules reject
//! a move; the first failure wins and nothing is mutated.

use crate::action::{Move, MoveError};
use crate::board::{CELL_COUNT, offset, row_col};
use crate::invariants::{CheckersInvariants, InvariantSet};
use crate::rules::movegen;
use crate::types::{Cell, Piece, Rank};
use crate::typestate::GameInProgress;
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state
/// transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Outcome of a successful validation: the cells captured by the move
/// (zero or one element; a king captures at most one piece per move).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    /// Indices of captured pieces, in path order.
    pub captures: Vec<u8>,
}

impl Validated {
    /// Whether the validated move is a capture.
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: both indices lie on the board.
pub struct InBounds;

impl InBounds {
    /// Checks the precondition.
    pub fn check(mov: &Move) -> Result<(), MoveError> {
        if mov.from >= CELL_COUNT || mov.to >= CELL_COUNT {
            Err(MoveError::InvalidPosition)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the source cell holds a piece of the player to move.
pub struct OwnPiece;

impl OwnPiece {
    /// Checks the precondition, returning the moving piece.
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<Piece, MoveError> {
        match game.board().get(mov.from).and_then(Cell::piece) {
            Some(piece) if piece.color == game.to_move() => Ok(piece),
            _ => Err(MoveError::NotYourPiece),
        }
    }
}

/// Precondition: a pending multi-jump binds the source square.
pub struct ContinuationBound;

impl ContinuationBound {
    /// Checks the precondition.
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        match game.must_continue_from() {
            Some(index) if mov.from != index => Err(MoveError::WrongContinuation(index)),
            _ => Ok(()),
        }
    }
}

/// Precondition: the destination cell is empty.
pub struct DestinationEmpty;

impl DestinationEmpty {
    /// Checks the precondition.
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        match game.board().get(mov.to) {
            Some(Cell::Empty) => Ok(()),
            _ => Err(MoveError::OccupiedDestination),
        }
    }
}

/// Precondition: source and destination share a diagonal.
///
/// Returns the (row, col) deltas for the path checks.
pub struct DiagonalMove;

impl DiagonalMove {
    /// Checks the precondition, returning the (row, col) deltas.
    pub fn check(mov: &Move) -> Result<(i8, i8), MoveError> {
        let (from_row, from_col) = row_col(mov.from);
        let (to_row, to_col) = row_col(mov.to);
        let dr = to_row as i8 - from_row as i8;
        let dc = to_col as i8 - from_col as i8;
        if dr != 0 && dr.abs() == dc.abs() {
            Ok((dr, dc))
        } else {
            Err(MoveError::NonDiagonalMove)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Path and capture resolution
// ─────────────────────────────────────────────────────────────

/// Geometric shape of a proposed move, before occupancy of the jumped
/// cells is resolved.
enum Shape {
    Quiet,
    Jump,
}

/// Step 6 of the ladder: does the distance match a regular move or a
/// capture for this rank and direction, with a clear path for kings?
fn classify(mov: &Move, piece: Piece, game: &GameInProgress, dr: i8, dc: i8) -> Result<Shape, MoveError> {
    match piece.rank {
        Rank::Man => {
            let forward = piece.color.forward();
            match dr.abs() {
                1 if dr == forward => Ok(Shape::Quiet),
                2 if dr == 2 * forward => Ok(Shape::Jump),
                _ => Err(MoveError::InvalidDistance),
            }
        }
        Rank::King => {
            let step = (dr.signum(), dc.signum());
            let mut blocked = false;
            let mut square = offset(mov.from, step.0, step.1);
            while let Some(current) = square
                && current != mov.to
            {
                match game.board().cells()[current as usize] {
                    Cell::Empty => {}
                    Cell::Occupied(blocker) if blocker.color == piece.color => {
                        return Err(MoveError::PathBlocked);
                    }
                    Cell::Occupied(_) => blocked = true,
                }
                square = offset(current, step.0, step.1);
            }
            if !blocked {
                return Ok(Shape::Quiet);
            }
            // A king capture lands immediately beyond the jumped piece:
            // the square before the destination must be the blocker.
            let before_to = offset(mov.to, -step.0, -step.1);
            match before_to {
                Some(index) if !game.board().cells()[index as usize].is_empty() => Ok(Shape::Jump),
                _ => Err(MoveError::InvalidDistance),
            }
        }
    }
}

/// Step 8 of the ladder: recompute the exact captured cell(s) along the
/// path of a capture-shaped move.
fn resolve_captures(
    mov: &Move,
    piece: Piece,
    game: &GameInProgress,
    dr: i8,
    dc: i8,
) -> Result<Vec<u8>, MoveError> {
    let step = (dr.signum(), dc.signum());
    let opponent = piece.color.opponent();
    let mut captures = Vec::new();

    let mut square = offset(mov.from, step.0, step.1);
    while let Some(current) = square
        && current != mov.to
    {
        if game.board().cells()[current as usize].holds(opponent) {
            captures.push(current);
        }
        square = offset(current, step.0, step.1);
    }

    match captures.len() {
        0 => Err(MoveError::NoCaptureTarget),
        1 => Ok(captures),
        _ => Err(MoveError::AmbiguousCapture),
    }
}

// ─────────────────────────────────────────────────────────────
//  Composite precondition
// ─────────────────────────────────────────────────────────────

/// Composite precondition: the full rejection ladder for a proposed
/// move, in rule order, short-circuiting on the first failure.
pub struct LegalMove;

impl LegalMove {
    /// Validates a move against the current state, returning the
    /// captured cells on success.
    #[instrument(skip(game), fields(mov = %mov, player = ?game.to_move()))]
    pub fn check(game: &GameInProgress, mov: &Move) -> Result<Validated, MoveError> {
        InBounds::check(mov)?;
        let piece = OwnPiece::check(mov, game)?;
        ContinuationBound::check(mov, game)?;
        DestinationEmpty::check(mov, game)?;
        let (dr, dc) = DiagonalMove::check(mov)?;

        match classify(mov, piece, game, dr, dc)? {
            Shape::Quiet => {
                // A continuation must keep jumping, and an available
                // capture anywhere on the board is mandatory.
                if game.must_continue_from().is_some()
                    || movegen::has_any_capture(game.board(), piece.color)
                {
                    return Err(MoveError::MandatoryCaptureViolation);
                }
                Ok(Validated { captures: Vec::new() })
            }
            Shape::Jump => {
                let captures = resolve_captures(mov, piece, game, dr, dc)?;
                Ok(Validated { captures })
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: the full `LegalMove` ladder.
/// Postconditions: the invariant set holds and piece counts never
/// increase.
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(game, action).map(|_| ())
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        CheckersInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        for color in crate::types::Color::iter() {
            if after.board().piece_count(color) > before.board().piece_count(color) {
                warn!(?color, "Piece count increased");
                return Err(MoveError::InvariantViolation(format!(
                    "Piece count increased for {:?}",
                    color
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, index};
    use crate::types::Color;
    use crate::typestate::GameSetup;

    fn custom(to_move: Color) -> GameInProgress {
        GameInProgress::from_parts(Board::empty(), to_move, None)
    }

    fn place(game: &mut GameInProgress, row: u8, col: u8, piece: Piece) {
        game.board.set(index(row, col), Cell::Occupied(piece)).unwrap();
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let game = GameSetup::new().start(Color::Red);
        assert_eq!(
            LegalMove::check(&game, &Move::new(64, 0)),
            Err(MoveError::InvalidPosition)
        );
        assert_eq!(
            LegalMove::check(&game, &Move::new(0, 200)),
            Err(MoveError::InvalidPosition)
        );
    }

    #[test]
    fn test_empty_source_rejected() {
        let game = GameSetup::new().start(Color::Red);
        assert_eq!(
            LegalMove::check(&game, &Move::new(index(4, 3), index(3, 2))),
            Err(MoveError::NotYourPiece)
        );
    }

    #[test]
    fn test_opponent_piece_rejected() {
        let game = GameSetup::new().start(Color::Red);
        // (2, 1) holds a Black man in the initial layout.
        assert_eq!(
            LegalMove::check(&game, &Move::new(index(2, 1), index(3, 2))),
            Err(MoveError::NotYourPiece)
        );
    }

    #[test]
    fn test_occupied_destination_rejected() {
        let game = GameSetup::new().start(Color::Red);
        assert_eq!(
            LegalMove::check(&game, &Move::new(index(6, 1), index(5, 0))),
            Err(MoveError::OccupiedDestination)
        );
    }

    #[test]
    fn test_non_diagonal_rejected() {
        let mut game = custom(Color::Red);
        place(&mut game, 4, 3, Piece::man(Color::Red));
        assert_eq!(
            LegalMove::check(&game, &Move::new(index(4, 3), index(3, 3))),
            Err(MoveError::NonDiagonalMove)
        );
    }

    #[test]
    fn test_backward_man_move_rejected() {
        let mut game = custom(Color::Red);
        place(&mut game, 4, 3, Piece::man(Color::Red));
        assert_eq!(
            LegalMove::check(&game, &Move::new(index(4, 3), index(5, 4))),
            Err(MoveError::InvalidDistance)
        );
    }

    #[test]
    fn test_man_long_move_rejected() {
        let mut game = custom(Color::Red);
        place(&mut game, 5, 4, Piece::man(Color::Red));
        assert_eq!(
            LegalMove::check(&game, &Move::new(index(5, 4), index(2, 1))),
            Err(MoveError::InvalidDistance)
        );
    }

    #[test]
    fn test_jump_over_empty_square_rejected() {
        let mut game = custom(Color::Red);
        place(&mut game, 4, 3, Piece::man(Color::Red));
        assert_eq!(
            LegalMove::check(&game, &Move::new(index(4, 3), index(2, 1))),
            Err(MoveError::NoCaptureTarget)
        );
    }

    #[test]
    fn test_jump_over_own_piece_rejected() {
        let mut game = custom(Color::Red);
        place(&mut game, 4, 3, Piece::man(Color::Red));
        place(&mut game, 3, 2, Piece::man(Color::Red));
        assert_eq!(
            LegalMove::check(&game, &Move::new(index(4, 3), index(2, 1))),
            Err(MoveError::NoCaptureTarget)
        );
    }

    #[test]
    fn test_king_path_blocked_by_own_piece() {
        let mut game = custom(Color::Red);
        place(&mut game, 7, 0, Piece::king(Color::Red));
        place(&mut game, 5, 2, Piece::man(Color::Red));
        assert_eq!(
            LegalMove::check(&game, &Move::new(index(7, 0), index(4, 3))),
            Err(MoveError::PathBlocked)
        );
    }

    #[test]
    fn test_king_landing_beyond_gap_rejected() {
        let mut game = custom(Color::Red);
        place(&mut game, 7, 0, Piece::king(Color::Red));
        place(&mut game, 5, 2, Piece::man(Color::Black));
        // Landing two squares beyond the captured piece.
        assert_eq!(
            LegalMove::check(&game, &Move::new(index(7, 0), index(3, 4))),
            Err(MoveError::InvalidDistance)
        );
    }

    #[test]
    fn test_king_double_capture_on_one_ray_rejected() {
        let mut game = custom(Color::Red);
        place(&mut game, 7, 0, Piece::king(Color::Red));
        place(&mut game, 5, 2, Piece::man(Color::Black));
        place(&mut game, 4, 3, Piece::man(Color::Black));
        assert_eq!(
            LegalMove::check(&game, &Move::new(index(7, 0), index(3, 4))),
            Err(MoveError::AmbiguousCapture)
        );
    }

    #[test]
    fn test_mandatory_capture_rejects_quiet_move() {
        let mut game = custom(Color::Red);
        place(&mut game, 4, 3, Piece::man(Color::Red));
        place(&mut game, 3, 2, Piece::man(Color::Black));
        place(&mut game, 6, 5, Piece::man(Color::Red));
        assert_eq!(
            LegalMove::check(&game, &Move::new(index(6, 5), index(5, 6))),
            Err(MoveError::MandatoryCaptureViolation)
        );
    }

    #[test]
    fn test_continuation_binds_source() {
        let mut game = GameInProgress::from_parts(Board::empty(), Color::Red, Some(index(4, 3)));
        place(&mut game, 4, 3, Piece::man(Color::Red));
        place(&mut game, 3, 2, Piece::man(Color::Black));
        place(&mut game, 6, 5, Piece::man(Color::Red));
        assert_eq!(
            LegalMove::check(&game, &Move::new(index(6, 5), index(5, 6))),
            Err(MoveError::WrongContinuation(index(4, 3)))
        );
    }

    #[test]
    fn test_valid_capture_reports_captured_cell() {
        let mut game = custom(Color::Red);
        place(&mut game, 4, 3, Piece::man(Color::Red));
        place(&mut game, 3, 2, Piece::man(Color::Black));
        let validated = LegalMove::check(&game, &Move::new(index(4, 3), index(2, 1))).unwrap();
        assert!(validated.is_capture());
        assert_eq!(validated.captures, vec![index(3, 2)]);
    }

    #[test]
    fn test_valid_quiet_move_has_no_captures() {
        let mut game = custom(Color::Red);
        place(&mut game, 4, 3, Piece::man(Color::Red));
        let validated = LegalMove::check(&game, &Move::new(index(4, 3), index(3, 2))).unwrap();
        assert!(!validated.is_capture());
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameSetup::new().start(Color::Red);
        let mov = Move::new(index(5, 0), index(4, 1));
        let before = game.clone();
        if let Ok(crate::typestate::GameResult::InProgress(after)) = game.make_move(mov) {
            assert!(MoveContract::post(&before, &after).is_ok());
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_postcondition_detects_added_piece() {
        let before = GameSetup::new().start(Color::Red);
        let mut after = before.clone();
        after
            .board
            .set(index(4, 1), Cell::Occupied(Piece::man(Color::Red)))
            .unwrap();
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
