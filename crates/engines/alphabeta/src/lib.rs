//! Alpha-Beta Pruned Minimax Engine
//!
//! Same contract and same answers as the exhaustive minimax engine, but
//! sibling branches stop being explored once one of them proves the node
//! irrelevant. Pruning only reduces the nodes visited; the tie set of
//! best moves is identical to unpruned search.

pub mod search;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use tictactoe_core::{Board, Engine, SearchError, SearchResult};

/// Tic-tac-toe engine using minimax with alpha-beta pruning.
///
/// The engine optimizes for whichever mark is to move on the board it is
/// handed. Ties between equally good root moves are broken uniformly at
/// random with the injected generator.
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine<R: Rng = StdRng> {
    depth: u8,
    rng: R,
}

impl AlphaBetaEngine<StdRng> {
    /// Creates an engine searching to `depth` plies, seeded from entropy.
    ///
    /// Depths below 2 are clamped up to 2.
    pub fn new(depth: u8) -> Self {
        Self::with_rng(depth, StdRng::from_entropy())
    }
}

impl<R: Rng> AlphaBetaEngine<R> {
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

impl Default for AlphaBetaEngine<StdRng> {
    fn default() -> Self {
        Self::new(9)
    }
}

impl<R: Rng + Send> Engine for AlphaBetaEngine<R> {
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
        "AlphaBeta"
    }
}
