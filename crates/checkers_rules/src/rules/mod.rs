//! Game rules for checkers.
//!
//! Pure functions over board state: per-piece move generation and
//! terminal detection. Rules are separated from board storage so they
//! can be composed into the contract system.

pub mod movegen;
pub mod terminal;

pub use movegen::{all_capturing_pieces, capture_moves, has_any_capture, legal_moves};
pub use terminal::{has_any_move, is_game_over};
