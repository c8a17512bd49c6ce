//! Exhaustive Minimax Engine
//!
//! Searches the full move tree to a fixed depth with no pruning. This is
//! the reference answer for the alpha-beta engine, which must agree with
//! it move for move, and the baseline for node-count comparisons.

pub mod search;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use tictactoe_core::{Board, Engine, SearchError, SearchResult};

/// Tic-tac-toe engine using exhaustive minimax.
///
/// The engine optimizes for whichever mark is to move on the board it is
/// handed, so one instance can play either side. Ties between equally
/// good root moves are broken uniformly at random with the injected
/// generator.
#[derive(Debug, Clone)]
pub struct MinimaxEngine<R: Rng = StdRng> {
    depth: u8,
    rng: R,
}

impl MinimaxEngine<StdRng> {
    /// Creates an engine searching to `depth` plies, seeded from entropy.
    ///
    /// Depths below 2 are clamped up to 2.
    pub fn new(depth: u8) -> Self {
        Self::with_rng(depth, StdRng::from_entropy())
    }
}

impl<R: Rng> MinimaxEngine<R> {
    /// Creates an engine with a caller-supplied tie-break generator, for
    /// reproducible play in tests.
    pub fn with_rng(depth: u8, rng: R) -> Self {
        Self {
            depth: depth.max(2),
            rng,
        }
    }

    /// The clamped search depth.
    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for MinimaxEngine<StdRng> {
    fn default() -> Self {
        Self::new(9)
    }
}

impl<R: Rng + Send> Engine for MinimaxEngine<R> {
    fn select_move(&mut self, board: &Board) -> Result<SearchResult, SearchError> {
        // Fixed opening: the first move of a game is not worth a search.
        if board.turn() == 0 {
            return Ok(SearchResult {
                best_move: 0,
                score: 0,
                depth: self.depth,
                nodes: 0,
            });
        }

        let mut nodes = 0;
        let outcome = search::best_moves(board, self.depth, board.current_player(), &mut nodes);

        match outcome.moves.choose(&mut self.rng) {
            Some(&cell) => Ok(SearchResult {
                best_move: cell,
                score: outcome.score,
                depth: self.depth,
                nodes,
            }),
            None => Err(SearchError::NoLegalMove),
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
