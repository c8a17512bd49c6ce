//! Board representation for tic-tac-toe
//!
//! The board is a small `Copy` value: [`Board::play`] returns a new board
//! and never mutates its receiver, so speculative search lines can never
//! alias a live game state.

use std::fmt;

use crate::error::MoveError;
use crate::types::{Mark, NUM_CELLS};

/// The eight winning lines, scanned in order: rows, columns, diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A tic-tac-toe position. X always goes first.
///
/// Cells are indexed with a zero-based index starting at the top-left,
/// proceeding right, then down. The turn counter equals the number of
/// non-empty cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; NUM_CELLS],
    turn: u8,
}

impl Board {
    /// Creates a new, empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; NUM_CELLS],
            turn: 0,
        }
    }

    /// Builds a board from its `Display` notation.
    ///
    /// Accepts `X`, `O` and `_` (or `.`) characters, nine in total;
    /// whitespace is ignored. Tests use this to set up mid-game positions.
    ///
    /// # Panics
    /// Panics if the notation does not describe exactly nine cells.
    pub fn from_notation(notation: &str) -> Self {
        let mut cells = [Mark::Empty; NUM_CELLS];
        let mut idx = 0;
        for ch in notation.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let mark = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '_' | '.' => Mark::Empty,
                _ => panic!("invalid cell char in notation: {ch}"),
            };
            assert!(idx < NUM_CELLS, "too many cells in notation");
            cells[idx] = mark;
            idx += 1;
        }
        assert!(idx == NUM_CELLS, "expected {NUM_CELLS} cells, got {idx}");

        let turn = cells.iter().filter(|&&m| m != Mark::Empty).count() as u8;
        Self { cells, turn }
    }

    /// Number of marks placed so far.
    #[inline]
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// True once every cell holds a mark.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.turn as usize == NUM_CELLS
    }

    /// The mark whose turn it is to move: X on even turns, O on odd.
    #[inline]
    pub fn current_player(&self) -> Mark {
        if self.turn % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Returns the mark at `cell`.
    pub fn mark_at(&self, cell: usize) -> Result<Mark, MoveError> {
        self.cells
            .get(cell)
            .copied()
            .ok_or(MoveError::OutOfRange(cell))
    }

    /// Plays the current player's mark at `cell` and returns the resulting
    /// board. The receiver is left untouched.
    pub fn play(&self, cell: usize) -> Result<Board, MoveError> {
        if self.mark_at(cell)? != Mark::Empty {
            return Err(MoveError::OccupiedCell(cell));
        }

        let mut next = *self;
        next.cells[cell] = self.current_player();
        next.turn += 1;
        Ok(next)
    }

    /// Finds the winner of this board. Assumes the board is reachable by
    /// legal play; two simultaneous lines report whichever comes first in
    /// scan order.
    ///
    /// Returns `X` or `O` for a completed line, `Draw` for a full board
    /// with no line, and `Empty` while the game is still open.
    pub fn winner(&self) -> Mark {
        for [a, b, c] in LINES {
            let m = self.cells[a];
            if m != Mark::Empty && m == self.cells[b] && m == self.cells[c] {
                return m;
            }
        }

        if self.is_full() {
            Mark::Draw
        } else {
            Mark::Empty
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mark) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                writeln!(f)?;
            }
            write!(f, "{mark}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
