//! Phase-specific typestate structs for a checkers match.
//!
//! Each phase is its own distinct type. A `GameFinished` ALWAYS has a
//! winner, not `Option<Color>`, and has no way to accept a move;
//! invalid operations are impossible at compile time.

use crate::action::{Move, MoveError};
use crate::apply::apply;
use crate::board::Board;
use crate::contracts::LegalMove;
#[cfg(debug_assertions)]
use crate::contracts::{Contract, MoveContract};
use crate::rules::{all_capturing_pieces, capture_moves, has_any_capture, is_game_over, legal_moves};
use crate::types::Color;
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Match in setup phase: the board is in the standard starting layout
/// and the lobby has not yet assigned the first mover.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new match in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the match with the given first mover (consumes setup,
    /// returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self, first_player: Color) -> GameInProgress {
        GameInProgress {
            board: self.board,
            to_move: first_player,
            must_continue_from: None,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Match in progress: can accept moves.
///
/// `must_continue_from` marks a multi-jump in progress: the next move
/// must keep jumping with the piece at that index.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) to_move: Color,
    pub(crate) must_continue_from: Option<u8>,
}

impl GameInProgress {
    /// Reconstructs an in-progress match from its parts.
    ///
    /// Used by the session layer to resume a serialized match; the
    /// parts fully determine the state (the engine stores no history).
    pub fn from_parts(board: Board, to_move: Color, must_continue_from: Option<u8>) -> Self {
        Self {
            board,
            to_move,
            must_continue_from,
        }
    }

    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// On success the result is either a new `InProgress` (turn passed,
    /// or the same player bound to continue a multi-jump) or `Finished`
    /// when the opponent is left without pieces or moves.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (`LegalMove`)
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(mov = %mov, player = ?self.to_move))]
    pub fn make_move(self, mov: Move) -> Result<GameResult, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        let validated = LegalMove::check(&self, &mov)?;
        let (board, promoted) = apply(&self.board, mov.from, mov.to, &validated.captures);

        if promoted {
            debug!(position = mov.to, "Man crowned");
        }

        // A capture that leaves the landed piece with a further capture
        // keeps the turn: the piece must keep jumping.
        if validated.is_capture() && !capture_moves(&board, mov.to).is_empty() {
            let game = GameInProgress {
                board,
                to_move: self.to_move,
                must_continue_from: Some(mov.to),
            };

            #[cfg(debug_assertions)]
            MoveContract::post(&before, &game)?;

            return Ok(GameResult::InProgress(game));
        }

        let opponent = self.to_move.opponent();
        if is_game_over(&board, opponent) {
            debug!(winner = ?self.to_move, "Match over");
            return Ok(GameResult::Finished(GameFinished {
                board,
                winner: self.to_move,
            }));
        }

        let game = GameInProgress {
            board,
            to_move: opponent,
            must_continue_from: None,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        Ok(GameResult::InProgress(game))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the pending multi-jump source, if any.
    pub fn must_continue_from(&self) -> Option<u8> {
        self.must_continue_from
    }

    /// Returns the legal destinations for the piece at `position`,
    /// for UI highlighting.
    pub fn legal_moves(&self, position: u8) -> Vec<u8> {
        legal_moves(&self.board, position, self.to_move)
    }

    /// Returns every move the current player may actually submit,
    /// honoring the mandatory-capture rule and a pending continuation.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Move> {
        let sources: Vec<u8> = if let Some(index) = self.must_continue_from {
            vec![index]
        } else if has_any_capture(&self.board, self.to_move) {
            all_capturing_pieces(&self.board, self.to_move)
        } else {
            self.board.pieces(self.to_move).map(|(index, _)| index).collect()
        };

        sources
            .into_iter()
            .flat_map(|from| {
                legal_moves(&self.board, from, self.to_move)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Replays moves from the standard starting position, Black first.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start(Color::Black);

        for mov in moves {
            match game.make_move(*mov)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Match finished: the winner is determined.
///
/// The winner is ALWAYS present, and the type has no `make_move`; a
/// finished match cannot accept another move.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    winner: Color,
}

impl GameFinished {
    /// Returns the winner.
    pub fn winner(&self) -> Color {
        self.winner
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Match continues (possibly with the same player, mid multi-jump).
    InProgress(GameInProgress),
    /// Match finished.
    Finished(GameFinished),
}
