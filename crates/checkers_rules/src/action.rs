//! First-class move actions and rejection reasons.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated independently of execution.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A proposed move: relocate the piece at `from` to `to`.
///
/// The moving player is implied by the game state; ownership of the
/// piece at `from` is part of validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Source index (0-63).
    pub from: u8,
    /// Destination index (0-63).
    pub to: u8,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(from: u8, to: u8) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Reasons a proposed move is rejected.
///
/// All variants are expected rule violations, returned as values and
/// relayed to the offending client. The game state is never changed by
/// a rejected move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// An index is outside the board.
    #[display("Position must be in 0-63")]
    InvalidPosition,

    /// The source cell is empty or holds an opponent piece.
    #[display("No piece of yours at the source square")]
    NotYourPiece,

    /// A multi-jump is in progress and the move does not continue it.
    #[display("A capture continuation is pending from square {}", _0)]
    WrongContinuation(u8),

    /// The destination cell is occupied.
    #[display("Destination square is occupied")]
    OccupiedDestination,

    /// Source and destination do not share a diagonal.
    #[display("Moves must be diagonal")]
    NonDiagonalMove,

    /// The distance does not match any move for the piece's rank and
    /// direction.
    #[display("Distance does not match a legal move for this piece")]
    InvalidDistance,

    /// A piece blocks the path of a king.
    #[display("Path is blocked")]
    PathBlocked,

    /// A capture is available and the move does not capture.
    #[display("A capture is available and must be taken")]
    MandatoryCaptureViolation,

    /// The move has capture shape but no opponent piece is on the path.
    #[display("No piece to capture on the path")]
    NoCaptureTarget,

    /// More than one opponent piece lies on a king's capture path.
    #[display("More than one piece on the capture path")]
    AmbiguousCapture,

    /// The match has already ended; no further moves are accepted.
    #[display("Match is already over")]
    MatchAlreadyOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
