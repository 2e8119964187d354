//! Serializable match wrapper for typestate phases.

use crate::action::{Move, MoveError};
use crate::board::Board;
use crate::types::Color;
use crate::typestate::{GameFinished, GameInProgress, GameResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Serializable wrapper for a match in any phase.
///
/// Typestate phases can't be directly serialized, so the session layer
/// stores and transmits this enum. The `InProgress` fields fully
/// determine the engine state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnyGame {
    /// Match awaiting a move.
    InProgress {
        /// The board state.
        board: Board,
        /// Current player to move.
        to_move: Color,
        /// Pending multi-jump source, if any.
        must_continue_from: Option<u8>,
    },
    /// Match over; no further moves are accepted.
    Finished {
        /// The final board state.
        board: Board,
        /// The winner.
        winner: Color,
    },
}

/// Result payload broadcast after an accepted move.
///
/// `next_turn` is the player about to move; when `game_over` is set it
/// is the player left without a move and `winner` holds their opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    /// Board after the move.
    pub board: Board,
    /// Player about to move.
    pub next_turn: Color,
    /// Pending multi-jump source, if any.
    pub must_continue_from: Option<u8>,
    /// Whether the match ended with this move.
    pub game_over: bool,
    /// Winner, once the match is over.
    pub winner: Option<Color>,
}

// ─────────────────────────────────────────────────────────────
//  Typestate conversions
// ─────────────────────────────────────────────────────────────

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress {
            to_move: game.to_move(),
            must_continue_from: game.must_continue_from(),
            board: game.board().clone(),
        }
    }
}

impl From<GameFinished> for AnyGame {
    fn from(game: GameFinished) -> Self {
        AnyGame::Finished {
            winner: game.winner(),
            board: game.board().clone(),
        }
    }
}

impl From<GameResult> for AnyGame {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => g.into(),
            GameResult::Finished(g) => g.into(),
        }
    }
}

impl AnyGame {
    /// A fresh match from the standard starting position.
    pub fn new(first_player: Color) -> Self {
        crate::typestate::GameSetup::new().start(first_player).into()
    }

    /// Returns the board for any phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::InProgress { board, .. } => board,
            AnyGame::Finished { board, .. } => board,
        }
    }

    /// Returns true if the match is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Finished { .. })
    }

    /// Returns the player to move, if the match is in progress.
    pub fn to_move(&self) -> Option<Color> {
        match self {
            AnyGame::InProgress { to_move, .. } => Some(*to_move),
            AnyGame::Finished { .. } => None,
        }
    }

    /// Returns the winner, once the match is over.
    pub fn winner(&self) -> Option<Color> {
        match self {
            AnyGame::InProgress { .. } => None,
            AnyGame::Finished { winner, .. } => Some(*winner),
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyGame::InProgress {
                to_move,
                must_continue_from: Some(index),
                ..
            } => format!(
                "In progress. {:?} must continue jumping from square {}.",
                to_move, index
            ),
            AnyGame::InProgress { to_move, .. } => {
                format!("In progress. {:?} to move.", to_move)
            }
            AnyGame::Finished { winner, .. } => {
                format!("Match over. {:?} wins!", winner)
            }
        }
    }

    /// Makes a move, returning the next phase.
    ///
    /// Rejections leave `self` untouched: a finished match rejects
    /// every move with `MatchAlreadyOver`, and an illegal move fails
    /// validation before anything is applied.
    #[instrument(skip(self), fields(mov = %mov))]
    pub fn make_move(&self, mov: Move) -> Result<AnyGame, MoveError> {
        match self {
            AnyGame::InProgress {
                board,
                to_move,
                must_continue_from,
            } => {
                let game =
                    GameInProgress::from_parts(board.clone(), *to_move, *must_continue_from);
                match game.make_move(mov) {
                    Ok(result) => {
                        debug!("Move accepted");
                        Ok(result.into())
                    }
                    Err(reason) => {
                        warn!(%reason, "Move rejected");
                        Err(reason)
                    }
                }
            }
            AnyGame::Finished { .. } => {
                warn!("Move submitted to a finished match");
                Err(MoveError::MatchAlreadyOver)
            }
        }
    }

    /// Builds the broadcast payload for the current phase.
    pub fn summary(&self) -> MoveOutcome {
        match self {
            AnyGame::InProgress {
                board,
                to_move,
                must_continue_from,
            } => MoveOutcome {
                board: board.clone(),
                next_turn: *to_move,
                must_continue_from: *must_continue_from,
                game_over: false,
                winner: None,
            },
            AnyGame::Finished { board, winner } => MoveOutcome {
                board: board.clone(),
                next_turn: winner.opponent(),
                must_continue_from: None,
                game_over: true,
                winner: Some(*winner),
            },
        }
    }
}
