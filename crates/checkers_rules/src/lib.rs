//! Checkers rules engine - the authoritative move arbiter for a
//! two-player match.
//!
//! The engine is a pure, synchronous state transformer: validate a
//! proposed move, apply it to a fresh board value, and advance the
//! turn. It owns no I/O, no clock, and no locking; the session layer
//! serializes submissions per match before calling in.
//!
//! # Architecture
//!
//! - **Board**: 64-cell row-major grid; only dark squares are occupied
//! - **Rules**: per-piece move generation and terminal detection
//! - **Contracts**: the rejection ladder plus transition postconditions
//! - **Typestate**: `GameSetup` -> `GameInProgress` -> `GameFinished`
//! - **Wrapper**: serializable phase enum for the session layer
//!
//! # Example
//!
//! ```
//! use checkers_rules::{AnyGame, Color, Move, board};
//!
//! let game = AnyGame::new(Color::Red);
//! // Red opens (5, 0) -> (4, 1).
//! let game = game.make_move(Move::new(board::index(5, 0), board::index(4, 1)))?;
//! assert_eq!(game.to_move(), Some(Color::Black));
//! # Ok::<(), checkers_rules::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod apply;
mod practice;
mod typestate;
mod wrapper;

// Public module declarations
pub mod board;
pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod types;

// Crate-level exports - actions and rejections
pub use action::{Move, MoveError};

// Crate-level exports - move application
pub use apply::apply;

// Crate-level exports - typestate engine
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};

// Crate-level exports - session-facing wrapper
pub use wrapper::{AnyGame, MoveOutcome};

// Crate-level exports - practice picker
pub use practice::random_move;

// Crate-level exports - core types
pub use board::Board;
pub use types::{Cell, Color, Piece, Rank};
