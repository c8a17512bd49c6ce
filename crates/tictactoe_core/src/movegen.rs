//! Legal move generation

use crate::board::Board;
use crate::types::{Mark, NUM_CELLS};

/// Collects every legal move on `board` into `moves`, lowest cell index
/// first. A full or already decided board has no legal moves.
pub fn legal_moves_into(board: &Board, moves: &mut Vec<usize>) {
    moves.clear();

    if board.winner() != Mark::Empty {
        return;
    }

    for cell in 0..NUM_CELLS {
        if board.mark_at(cell) == Ok(Mark::Empty) {
            moves.push(cell);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
