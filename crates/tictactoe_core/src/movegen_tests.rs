use super::*;

#[test]
fn test_empty_board_has_nine_moves() {
    let mut moves = Vec::new();
    legal_moves_into(&Board::new(), &mut moves);
    assert_eq!(moves, (0..NUM_CELLS).collect::<Vec<_>>());
}

#[test]
fn test_moves_are_ascending_and_skip_occupied_cells() {
    let board = Board::from_notation("X_O _X_ ___");
    let mut moves = Vec::new();
    legal_moves_into(&board, &mut moves);
    assert_eq!(moves, vec![1, 3, 5, 6, 7, 8]);
}

#[test]
fn test_decided_board_has_no_moves() {
    let board = Board::from_notation("XXX OO_ ___");
    let mut moves = vec![42];
    legal_moves_into(&board, &mut moves);
    assert!(moves.is_empty(), "a won board must yield no legal moves");
}

#[test]
fn test_full_board_has_no_moves() {
    let board = Board::from_notation("XXO OOX XOX");
    let mut moves = Vec::new();
    legal_moves_into(&board, &mut moves);
    assert!(moves.is_empty());
}
