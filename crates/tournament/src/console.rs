//! Human player reading moves from standard input

use std::io::{self, BufRead, Write};

use tictactoe_core::{legal_moves_into, Board, Engine, SearchError, SearchResult, NUM_CELLS};

/// An [`Engine`] driven by a human typing cell indices on stdin.
///
/// Prompts until the input parses as an empty cell index in `0..9`;
/// printing the board between moves is the driver's job. Closing stdin
/// aborts the game with `NoLegalMove`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEngine;

impl ConsoleEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for ConsoleEngine {
    fn select_move(&mut self, board: &Board) -> Result<SearchResult, SearchError> {
        let mut moves = Vec::with_capacity(NUM_CELLS);
        legal_moves_into(board, &mut moves);
        if moves.is_empty() {
            return Err(SearchError::NoLegalMove);
        }

        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            print!("{} to move, cell (0-8): ", board.current_player());
            stdout.flush().ok();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                // Input closed: nobody can supply a move anymore.
                Ok(0) | Err(_) => return Err(SearchError::NoLegalMove),
                Ok(_) => {}
            }

            match line.trim().parse::<usize>() {
                Ok(cell) if moves.contains(&cell) => {
                    return Ok(SearchResult {
                        best_move: cell,
                        score: 0,
                        depth: 0,
                        nodes: 0,
                    });
                }
                _ => println!("enter the index of an empty cell (0-8)"),
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
