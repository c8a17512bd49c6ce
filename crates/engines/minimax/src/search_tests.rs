use super::*;
use crate::MinimaxEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tictactoe_core::{Engine, SearchError};

#[test]
fn test_opening_move_is_cell_zero() {
    let mut engine = MinimaxEngine::with_rng(9, StdRng::seed_from_u64(1));
    let result = engine.select_move(&Board::new()).unwrap();
    assert_eq!(result.best_move, 0);
    assert_eq!(result.nodes, 0, "the opening move is not searched");
}

#[test]
fn test_takes_the_winning_cell() {
    // X X _        X completes the top row instead of blocking O.
    // O O _
    // _ _ _
    let board = Board::from_notation("XX_ OO_ ___");

    for depth in [2, 5, 9] {
        let mut nodes = 0;
        let outcome = best_moves(&board, depth, Mark::X, &mut nodes);
        assert_eq!(outcome.moves, vec![2], "depth {depth}");
        assert_eq!(outcome.score, WIN_SCORE, "depth {depth}");
    }
}

#[test]
fn test_blocks_the_only_losing_cell() {
    // X _ _        O threatens the bottom row at 8; X has no
    // _ _ X        immediate win and must block.
    // O O _
    let board = Board::from_notation("X__ __X OO_");

    let mut nodes = 0;
    let outcome = best_moves(&board, 9, Mark::X, &mut nodes);
    assert_eq!(outcome.moves, vec![8]);
}

#[test]
fn test_only_corner_replies_survive_a_center_opening() {
    let board = Board::from_notation("___ _X_ ___");

    let mut nodes = 0;
    let outcome = best_moves(&board, 9, Mark::O, &mut nodes);
    assert_eq!(outcome.moves, vec![0, 2, 6, 8]);
    assert_eq!(outcome.score, 0, "a corner reply holds the draw");
}

#[test]
fn test_full_search_from_the_empty_board_ties_everywhere() {
    // Tic-tac-toe is a draw; at full depth every opening scores 0.
    let mut nodes = 0;
    let outcome = best_moves(&Board::new(), 9, Mark::X, &mut nodes);
    assert_eq!(outcome.moves, (0..9).collect::<Vec<_>>());
    assert_eq!(outcome.score, 0);
}

#[test]
fn test_shallow_search_returns_neutral_scores() {
    // At depth 2 nothing is decided yet from the second move of the game,
    // so the undecided cutoff scores 0 like a draw would.
    let board = Board::from_notation("X__ ___ ___");

    let mut nodes = 0;
    let outcome = best_moves(&board, 2, Mark::O, &mut nodes);
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.moves.len(), 8, "no reply is distinguishable yet");
}

#[test]
fn test_decided_board_yields_no_move() {
    let won = Board::from_notation("XXX OO_ ___");
    let mut engine = MinimaxEngine::with_rng(9, StdRng::seed_from_u64(2));
    assert_eq!(engine.select_move(&won), Err(SearchError::NoLegalMove));

    let drawn = Board::from_notation("XXO OOX XOX");
    assert_eq!(engine.select_move(&drawn), Err(SearchError::NoLegalMove));
}

#[test]
fn test_depth_is_clamped_to_at_least_two() {
    assert_eq!(MinimaxEngine::new(0).depth(), 2);
    assert_eq!(MinimaxEngine::new(1).depth(), 2);
    assert_eq!(MinimaxEngine::new(7).depth(), 7);
}

#[test]
fn test_seeded_engines_are_reproducible() {
    // O to move with four tied corner replies; the same seed must draw
    // the same corner every time.
    let board = Board::from_notation("___ _X_ ___");

    let mut first = MinimaxEngine::with_rng(9, StdRng::seed_from_u64(42));
    let mut second = MinimaxEngine::with_rng(9, StdRng::seed_from_u64(42));

    let a = first.select_move(&board).unwrap();
    let b = second.select_move(&board).unwrap();
    assert_eq!(a, b);
    assert!([0, 2, 6, 8].contains(&a.best_move));
}

#[test]
fn test_engine_plays_either_side_across_calls() {
    let mut engine = MinimaxEngine::with_rng(9, StdRng::seed_from_u64(3));

    // As X: take the win.
    let as_x = Board::from_notation("XX_ OO_ ___");
    assert_eq!(engine.select_move(&as_x).unwrap().best_move, 2);

    // As O on the next call: complete the middle row.
    let as_o = Board::from_notation("XX_ OO_ X__");
    assert_eq!(engine.select_move(&as_o).unwrap().best_move, 5);
}
