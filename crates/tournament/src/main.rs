//! Tournament CLI
//!
//! Play single games (including against a human) or run matches between
//! engines.

use std::env;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use alphabeta_engine::AlphaBetaEngine;
use baseline_engine::{RandomEngine, SequentialEngine};
use minimax_engine::MinimaxEngine;
use tictactoe_core::Engine;
use tournament::{ConsoleEngine, GameResult, MatchConfig, MatchReport, MatchRunner};

fn print_usage() {
    println!("Tic-tac-toe tournament runner");
    println!();
    println!("Usage:");
    println!("  tournament play <engine1> <engine2> [--depth D] [--seed S]");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D] [--seed S] [--out FILE]");
    println!();
    println!("Engines:");
    println!("  minimax       - Exhaustive minimax search");
    println!("  alphabeta     - Minimax with alpha-beta pruning");
    println!("  random        - Uniform random legal move");
    println!("  sequential    - First empty cell");
    println!("  human         - Moves typed on stdin (play only)");
    println!();
    println!("Examples:");
    println!("  tournament play human alphabeta");
    println!("  tournament match minimax alphabeta --games 20 --depth 9 --seed 7");
}

fn create_engine(spec: &str, depth: u8, seed: Option<u64>) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "minimax" | "mm" => match seed {
            Some(s) => Box::new(MinimaxEngine::with_rng(depth, StdRng::seed_from_u64(s))),
            None => Box::new(MinimaxEngine::new(depth)),
        },
        "alphabeta" | "ab" => match seed {
            Some(s) => Box::new(AlphaBetaEngine::with_rng(depth, StdRng::seed_from_u64(s))),
            None => Box::new(AlphaBetaEngine::new(depth)),
        },
        "random" => match seed {
            Some(s) => Box::new(RandomEngine::with_rng(StdRng::seed_from_u64(s))),
            None => Box::new(RandomEngine::new()),
        },
        "sequential" | "seq" => Box::new(SequentialEngine::new()),
        "human" => Box::new(ConsoleEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}", spec);
            Box::new(AlphaBetaEngine::new(depth))
        }
    }
}

/// Parsed `--flag value` options shared by both commands.
struct Options {
    num_games: u32,
    depth: u8,
    seed: Option<u64>,
    out: Option<String>,
}

fn parse_options(args: &[String]) -> Options {
    let mut options = Options {
        num_games: 10,
        depth: 9,
        seed: None,
        out: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    options.num_games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    options.depth = args[i + 1].parse().unwrap_or(9);
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    options.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    options.out = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    options
}

fn run_play(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: play requires two engine specifications");
        print_usage();
        return;
    }

    let options = parse_options(&args[2..]);
    let mut engine_x = create_engine(&args[0], options.depth, options.seed);
    let mut engine_o = create_engine(&args[1], options.depth, options.seed.map(|s| s.wrapping_add(1)));

    let config = MatchConfig {
        num_games: 1,
        alternate_marks: false,
        verbose: false,
        show_boards: true,
    };
    let runner = MatchRunner::new(config);
    let result = runner.play_game(engine_x.as_mut(), engine_o.as_mut());

    match result {
        GameResult::Win => println!("Winner is X ({})", engine_x.name()),
        GameResult::Loss => println!("Winner is O ({})", engine_o.name()),
        GameResult::Draw => println!("Draw"),
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];
    let options = parse_options(&args[2..]);

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, Depth: {}", options.num_games, options.depth);
    println!();

    let mut engine1 = create_engine(engine1_spec, options.depth, options.seed);
    let mut engine2 = create_engine(
        engine2_spec,
        options.depth,
        options.seed.map(|s| s.wrapping_add(1)),
    );

    let config = MatchConfig {
        num_games: options.num_games,
        alternate_marks: true,
        verbose: true,
        show_boards: false,
    };
    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    let report = MatchReport::new(engine1_spec, engine2_spec, result);
    report.print_report();

    if let Some(path) = options.out {
        if let Err(e) = report.save(Path::new(&path)) {
            eprintln!("Warning: Failed to save report: {}", e);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "play" => run_play(&args[2..]),
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
