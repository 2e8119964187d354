//! Board storage and coordinate arithmetic.
//!
//! The board is a fixed 64-cell, row-major grid. Only dark squares
//! (`(row + col) % 2 == 1`) are ever occupied; light squares stay empty
//! for the lifetime of a match.

use crate::types::{Cell, Color, Piece, Rank};
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: u8 = 64;

/// Number of rows (and columns).
pub const SIDE: u8 = 8;

/// Converts row and column to a linear index (0-63).
#[inline]
pub fn index(row: u8, col: u8) -> u8 {
    row * SIDE + col
}

/// Converts a linear index to (row, col).
#[inline]
pub fn row_col(index: u8) -> (u8, u8) {
    (index / SIDE, index % SIDE)
}

/// Checks whether the square at (row, col) is a dark square.
#[inline]
pub fn is_dark_square(row: u8, col: u8) -> bool {
    (row + col) % 2 == 1
}

/// Steps from an index by row and column deltas.
///
/// Returns `None` when the step leaves the board.
#[inline]
pub fn offset(index: u8, dr: i8, dc: i8) -> Option<u8> {
    let (row, col) = row_col(index);
    let row = row as i8 + dr;
    let col = col as i8 + dc;
    if (0..SIDE as i8).contains(&row) && (0..SIDE as i8).contains(&col) {
        Some(self::index(row as u8, col as u8))
    } else {
        None
    }
}

/// 8x8 checkers board.
///
/// Serializes as a 64-element, row-major array of nullable pieces, the
/// representation shared with the storage and transport layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Option<Piece>>", try_from = "Vec<Option<Piece>>")]
pub struct Board {
    /// Cells in row-major order, row 0 at the top.
    cells: [Cell; CELL_COUNT as usize],
}

impl Board {
    /// Creates a board in the standard starting position: rows 0-2 hold
    /// Black men on dark squares, rows 5-7 hold Red men on dark squares,
    /// rows 3-4 are empty.
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT as usize];
        for row in 0..SIDE {
            for col in 0..SIDE {
                if !is_dark_square(row, col) {
                    continue;
                }
                let piece = match row {
                    0..=2 => Some(Piece::man(Color::Black)),
                    5..=7 => Some(Piece::man(Color::Red)),
                    _ => None,
                };
                if let Some(piece) = piece {
                    cells[index(row, col) as usize] = Cell::Occupied(piece);
                }
            }
        }
        Self { cells }
    }

    /// Creates an empty board.
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT as usize],
        }
    }

    /// Gets the cell at the given index (0-63).
    pub fn get(&self, index: u8) -> Option<Cell> {
        self.cells.get(index as usize).copied()
    }

    /// Sets the cell at the given index.
    pub fn set(&mut self, index: u8, cell: Cell) -> Result<(), &'static str> {
        if index >= CELL_COUNT {
            return Err("Index out of bounds");
        }
        self.cells[index as usize] = cell;
        Ok(())
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT as usize] {
        &self.cells
    }

    /// Iterates over the pieces of the given color with their indices.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.piece()
                .filter(|piece| piece.color == color)
                .map(|piece| (i as u8, piece))
        })
    }

    /// Counts the pieces of the given color.
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..SIDE {
            for col in 0..SIDE {
                let symbol = match self.cells[index(row, col) as usize] {
                    Cell::Empty if is_dark_square(row, col) => '.',
                    Cell::Empty => ' ',
                    Cell::Occupied(piece) => match (piece.color, piece.rank) {
                        (Color::Red, Rank::Man) => 'r',
                        (Color::Red, Rank::King) => 'R',
                        (Color::Black, Rank::Man) => 'b',
                        (Color::Black, Rank::King) => 'B',
                    },
                };
                result.push(symbol);
            }
            if row < SIDE - 1 {
                result.push('\n');
            }
        }
        result
    }

    pub(crate) fn from_cells(cells: [Cell; CELL_COUNT as usize]) -> Self {
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Board> for Vec<Option<Piece>> {
    fn from(board: Board) -> Self {
        board.cells.iter().map(|cell| cell.piece()).collect()
    }
}

impl TryFrom<Vec<Option<Piece>>> for Board {
    type Error = String;

    fn try_from(cells: Vec<Option<Piece>>) -> Result<Self, Self::Error> {
        if cells.len() != CELL_COUNT as usize {
            return Err(format!(
                "Expected {} cells, got {}",
                CELL_COUNT,
                cells.len()
            ));
        }
        let mut board = Self::empty();
        for (i, piece) in cells.into_iter().enumerate() {
            board.cells[i] = Cell::from(piece);
        }
        Ok(board)
    }
}
