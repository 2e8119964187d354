//! Legal destination generation for a single piece.
//!
//! Captures take priority: when a piece has any capture available, only
//! its captures are legal. The full-board queries rescan on demand; with
//! at most 24 pieces there is nothing worth caching.

use crate::board::{Board, offset};
use crate::types::{Cell, Color, Piece, Rank};
use tracing::instrument;

/// The four diagonal directions as (row, col) deltas.
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Returns the legal destinations for the piece at `position`.
///
/// Empty when the cell is empty or holds a piece of the other color.
/// When the piece has at least one capture, only captures are returned.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board, position: u8, turn: Color) -> Vec<u8> {
    let piece = match board.get(position).and_then(Cell::piece) {
        Some(piece) if piece.color == turn => piece,
        _ => return Vec::new(),
    };
    let captures = captures_from(board, position, piece);
    if !captures.is_empty() {
        return captures;
    }
    quiet_from(board, position, piece)
}

/// Returns the capture destinations for the piece at `position`,
/// regardless of whose turn it is.
pub fn capture_moves(board: &Board, position: u8) -> Vec<u8> {
    match board.get(position).and_then(Cell::piece) {
        Some(piece) => captures_from(board, position, piece),
        None => Vec::new(),
    }
}

/// Checks whether any piece of `color` has a capture available.
#[instrument(skip(board))]
pub fn has_any_capture(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|(index, piece)| !captures_from(board, index, piece).is_empty())
}

/// Returns the positions of every piece of `color` with a capture
/// available.
pub fn all_capturing_pieces(board: &Board, color: Color) -> Vec<u8> {
    board
        .pieces(color)
        .filter(|&(index, piece)| !captures_from(board, index, piece).is_empty())
        .map(|(index, _)| index)
        .collect()
}

fn captures_from(board: &Board, position: u8, piece: Piece) -> Vec<u8> {
    match piece.rank {
        Rank::Man => man_captures(board, position, piece),
        Rank::King => king_captures(board, position, piece),
    }
}

/// Men jump exactly two squares along a forward diagonal, over an
/// opponent piece, onto an empty landing square. Backward captures are
/// not part of this rule set.
fn man_captures(board: &Board, position: u8, piece: Piece) -> Vec<u8> {
    let mut moves = Vec::new();
    let forward = piece.color.forward();
    for dc in [-1i8, 1] {
        let Some(over) = offset(position, forward, dc) else {
            continue;
        };
        let Some(landing) = offset(position, 2 * forward, 2 * dc) else {
            continue;
        };
        if board.cells()[over as usize].holds(piece.color.opponent())
            && board.cells()[landing as usize].is_empty()
        {
            moves.push(landing);
        }
    }
    moves
}

/// Kings scan each diagonal ray outward, skipping empty squares. The
/// first occupied square stops the ray; when it holds an opponent piece
/// and the square immediately beyond is empty, that landing is the
/// ray's single capture candidate.
fn king_captures(board: &Board, position: u8, piece: Piece) -> Vec<u8> {
    let mut moves = Vec::new();
    for (dr, dc) in DIAGONALS {
        let mut square = offset(position, dr, dc);
        while let Some(current) = square {
            match board.cells()[current as usize] {
                Cell::Empty => square = offset(current, dr, dc),
                Cell::Occupied(blocker) => {
                    if blocker.color != piece.color
                        && let Some(landing) = offset(current, dr, dc)
                        && board.cells()[landing as usize].is_empty()
                    {
                        moves.push(landing);
                    }
                    break;
                }
            }
        }
    }
    moves
}

fn quiet_from(board: &Board, position: u8, piece: Piece) -> Vec<u8> {
    let mut moves = Vec::new();
    match piece.rank {
        Rank::Man => {
            for dc in [-1i8, 1] {
                if let Some(dest) = offset(position, piece.color.forward(), dc)
                    && board.cells()[dest as usize].is_empty()
                {
                    moves.push(dest);
                }
            }
        }
        Rank::King => {
            for (dr, dc) in DIAGONALS {
                let mut square = offset(position, dr, dc);
                while let Some(current) = square {
                    if !board.cells()[current as usize].is_empty() {
                        break;
                    }
                    moves.push(current);
                    square = offset(current, dr, dc);
                }
            }
        }
    }
    moves
}
