//! Core domain types for checkers.

use serde::{Deserialize, Serialize};

/// Color of a player and their pieces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Red starts on rows 5-7 and advances toward row 0.
    Red,
    /// Black starts on rows 0-2 and advances toward row 7.
    Black,
}

impl Color {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row delta for this color's forward direction.
    pub fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// The row on which this color's men are crowned.
    pub fn crowning_row(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Black => 7,
        }
    }
}

/// Rank of a piece: a man moves forward only, a king moves along any
/// clear diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    /// Unpromoted piece.
    Man,
    /// Promoted piece.
    King,
}

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Owning color.
    pub color: Color,
    /// Current rank.
    pub rank: Rank,
}

impl Piece {
    /// Creates a new piece.
    pub fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// A man of the given color.
    pub fn man(color: Color) -> Self {
        Self::new(color, Rank::Man)
    }

    /// A king of the given color.
    pub fn king(color: Color) -> Self {
        Self::new(color, Rank::King)
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a piece.
    Occupied(Piece),
}

impl Cell {
    /// Returns the occupying piece, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Checks whether the cell holds a piece of the given color.
    pub fn holds(self, color: Color) -> bool {
        matches!(self, Cell::Occupied(piece) if piece.color == color)
    }
}

impl From<Option<Piece>> for Cell {
    fn from(piece: Option<Piece>) -> Self {
        match piece {
            None => Cell::Empty,
            Some(piece) => Cell::Occupied(piece),
        }
    }
}

impl From<Cell> for Option<Piece> {
    fn from(cell: Cell) -> Self {
        cell.piece()
    }
}
