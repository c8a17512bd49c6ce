//! Search benchmark comparing exhaustive minimax with alpha-beta pruning.
//!
//! Usage:
//!   cargo run --release --example search_bench -p tournament -- [depth]
//!
//! Prints nodes visited and wall time for both variants over a handful of
//! positions, which makes the effect of pruning visible at a glance.

use std::env;
use std::time::Instant;

use tictactoe_core::Board;

/// Positions of increasing emptiness; the emptier the board, the bigger
/// the tree.
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Won in one", "XX_ OO_ ___"),
    ("Forced block", "X__ __X OO_"),
    ("Center opening", "___ _X_ ___"),
    ("Corner opening", "X__ ___ ___"),
    ("Empty board", "___ ___ ___"),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(9);

    println!("=== Search Benchmark ===");
    println!("Depth: {depth}");
    println!();
    println!(
        "{:<16} {:>12} {:>10} {:>12} {:>10} {:>8}",
        "Position", "mm nodes", "mm time", "ab nodes", "ab time", "saved"
    );

    for (name, notation) in TEST_POSITIONS {
        let board = Board::from_notation(notation);
        let perspective = board.current_player();

        let start = Instant::now();
        let mut minimax_nodes = 0;
        let exhaustive =
            minimax_engine::search::best_moves(&board, depth, perspective, &mut minimax_nodes);
        let minimax_time = start.elapsed();

        let start = Instant::now();
        let mut alphabeta_nodes = 0;
        let pruned =
            alphabeta_engine::search::best_moves(&board, depth, perspective, &mut alphabeta_nodes);
        let alphabeta_time = start.elapsed();

        assert_eq!(exhaustive.moves, pruned.moves, "engines disagree on {name}");

        let saved = if minimax_nodes > 0 {
            100.0 * (minimax_nodes - alphabeta_nodes) as f64 / minimax_nodes as f64
        } else {
            0.0
        };

        println!(
            "{:<16} {:>12} {:>10.3?} {:>12} {:>10.3?} {:>7.1}%",
            name, minimax_nodes, minimax_time, alphabeta_nodes, alphabeta_time, saved
        );
    }
}
