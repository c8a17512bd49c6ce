//! Baseline Tic-Tac-Toe Engines
//!
//! Engines with no lookahead at all. Useful for:
//! - Testing the match runner and driver plumbing
//! - Baseline comparisons (a search engine should never lose to these)
//! - Opponents in the no-loss tests of the search engines

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use tictactoe_core::{legal_moves_into, Board, Engine, SearchError, SearchResult, NUM_CELLS};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;

/// An engine that plays a uniformly random legal move.
///
/// Provides no evaluation whatsoever; it exists as the weakest sensible
/// opponent.
#[derive(Debug, Clone)]
pub struct RandomEngine<R: Rng = StdRng> {
    rng: R,
}

impl RandomEngine<StdRng> {
    /// Creates an engine seeded from entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomEngine<R> {
    /// Creates an engine with a caller-supplied generator, for
    /// reproducible games in tests.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> Engine for RandomEngine<R> {
    fn select_move(&mut self, board: &Board) -> Result<SearchResult, SearchError> {
        let mut moves = Vec::with_capacity(NUM_CELLS);
        legal_moves_into(board, &mut moves);

        match moves.choose(&mut self.rng) {
            Some(&cell) => Ok(SearchResult {
                best_move: cell,
                score: 0,
                depth: 1,
                nodes: 1,
            }),
            None => Err(SearchError::NoLegalMove),
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// An engine that plays the lowest-index empty cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialEngine;

impl SequentialEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for SequentialEngine {
    fn select_move(&mut self, board: &Board) -> Result<SearchResult, SearchError> {
        let mut moves = Vec::with_capacity(NUM_CELLS);
        legal_moves_into(board, &mut moves);

        match moves.first() {
            Some(&cell) => Ok(SearchResult {
                best_move: cell,
                score: 0,
                depth: 1,
                nodes: 1,
            }),
            None => Err(SearchError::NoLegalMove),
        }
    }

    fn name(&self) -> &str {
        "Sequential"
    }
}
