//! Exhaustive minimax search

use tictactoe_core::eval::{evaluate, LOSS_SCORE, WIN_SCORE};
use tictactoe_core::{legal_moves_into, Board, Mark, NUM_CELLS};

/// Root evaluation: the set of moves tied on the best score.
///
/// The tie set is kept whole rather than broken by index so the caller
/// can draw from it uniformly. It is also what the cross-engine tests
/// compare against the alpha-beta variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootOutcome {
    /// Tied best moves in ascending cell order (empty if no legal moves)
    pub moves: Vec<usize>,
    /// Score shared by every move in the tie set
    pub score: i32,
}

/// Evaluates every root move to `depth` plies and collects the tie set.
///
/// `perspective` is the mark being optimized for; `nodes` counts every
/// position expanded, for comparison with the pruned variant.
pub fn best_moves(board: &Board, depth: u8, perspective: Mark, nodes: &mut u64) -> RootOutcome {
    let mut moves = Vec::with_capacity(NUM_CELLS);
    legal_moves_into(board, &mut moves);

    let mut best = RootOutcome {
        moves: Vec::new(),
        score: LOSS_SCORE,
    };

    for cell in moves {
        let child = board
            .play(cell)
            .expect("generated move targets an empty cell");
        *nodes += 1;

        let score = minimax(&child, depth.saturating_sub(1), perspective, nodes);
        if score > best.score {
            best.moves.clear();
            best.moves.push(cell);
            best.score = score;
        } else if score == best.score {
            best.moves.push(cell);
        }
    }

    best
}

/// Recursive evaluator: maximizes on plies where `perspective` moves,
/// minimizes on the opponent's plies.
fn minimax(board: &Board, depth: u8, perspective: Mark, nodes: &mut u64) -> i32 {
    // Terminal node: the game is decided or the depth is exhausted.
    if depth == 0 || board.winner() != Mark::Empty {
        return evaluate(board, perspective);
    }

    let mut moves = Vec::with_capacity(NUM_CELLS);
    legal_moves_into(board, &mut moves);

    let maximizing = board.current_player() == perspective;
    let mut result = if maximizing { LOSS_SCORE } else { WIN_SCORE };

    for cell in moves {
        let child = board
            .play(cell)
            .expect("generated move targets an empty cell");
        *nodes += 1;

        let score = minimax(&child, depth - 1, perspective, nodes);
        result = if maximizing {
            result.max(score)
        } else {
            result.min(score)
        };
    }

    result
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
