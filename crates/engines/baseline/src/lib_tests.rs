use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tictactoe_core::Mark;

#[test]
fn test_random_engine_plays_a_legal_move() {
    let board = Board::from_notation("XO_ _X_ __O");
    let mut engine = RandomEngine::with_rng(StdRng::seed_from_u64(7));

    for _ in 0..20 {
        let result = engine.select_move(&board).unwrap();
        assert_eq!(board.mark_at(result.best_move), Ok(Mark::Empty));
    }
}

#[test]
fn test_random_engine_is_reproducible_with_a_seed() {
    let board = Board::new();
    let mut a = RandomEngine::with_rng(StdRng::seed_from_u64(11));
    let mut b = RandomEngine::with_rng(StdRng::seed_from_u64(11));

    for _ in 0..5 {
        assert_eq!(a.select_move(&board), b.select_move(&board));
    }
}

#[test]
fn test_random_engine_fails_on_a_decided_board() {
    let board = Board::from_notation("XXX OO_ ___");
    let mut engine = RandomEngine::with_rng(StdRng::seed_from_u64(0));
    assert_eq!(engine.select_move(&board), Err(SearchError::NoLegalMove));
}

#[test]
fn test_sequential_engine_picks_the_first_empty_cell() {
    let mut engine = SequentialEngine::new();

    assert_eq!(engine.select_move(&Board::new()).unwrap().best_move, 0);

    let board = Board::from_notation("XO_ _X_ ___");
    assert_eq!(engine.select_move(&board).unwrap().best_move, 2);
}

#[test]
fn test_sequential_engine_fails_on_a_full_board() {
    let board = Board::from_notation("XXO OOX XOX");
    let mut engine = SequentialEngine::new();
    assert_eq!(engine.select_move(&board), Err(SearchError::NoLegalMove));
}
