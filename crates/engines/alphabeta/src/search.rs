//! Minimax search with alpha-beta pruning
//!
//! `alpha` is the best score the maximizing side can already guarantee,
//! `beta` the best the minimizing side can. Once `beta <= alpha` at a
//! node, the remaining siblings cannot influence the root choice and are
//! skipped.

use tictactoe_core::eval::{evaluate, LOSS_SCORE, WIN_SCORE};
use tictactoe_core::{legal_moves_into, Board, Mark, NUM_CELLS};

/// Root evaluation: the set of moves tied on the best score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootOutcome {
    /// Tied best moves in ascending cell order (empty if no legal moves)
    pub moves: Vec<usize>,
    /// Score shared by every move in the tie set
    pub score: i32,
}

/// Evaluates every root move to `depth` plies and collects the tie set.
///
/// Every root child is searched with the full window: narrowing it with
/// results from earlier siblings would turn later tied moves into bound
/// values and shrink the tie set relative to exhaustive minimax.
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

        let score = alphabeta(
            &child,
            depth.saturating_sub(1),
            LOSS_SCORE - 1,
            WIN_SCORE + 1,
            perspective,
            nodes,
        );
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

/// Recursive evaluator with pruning bounds threaded through.
fn alphabeta(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    perspective: Mark,
    nodes: &mut u64,
) -> i32 {
    // Terminal node: the game is decided or the depth is exhausted.
    if depth == 0 || board.winner() != Mark::Empty {
        return evaluate(board, perspective);
    }

    let mut moves = Vec::with_capacity(NUM_CELLS);
    legal_moves_into(board, &mut moves);

    if board.current_player() == perspective {
        for cell in moves {
            let child = board
                .play(cell)
                .expect("generated move targets an empty cell");
            *nodes += 1;

            alpha = alpha.max(alphabeta(&child, depth - 1, alpha, beta, perspective, nodes));
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        alpha
    } else {
        for cell in moves {
            let child = board
                .play(cell)
                .expect("generated move targets an empty cell");
            *nodes += 1;

            beta = beta.min(alphabeta(&child, depth - 1, alpha, beta, perspective, nodes));
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        beta
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
