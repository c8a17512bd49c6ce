//! Match runner for playing games between engines

use tictactoe_core::{Board, Engine, Mark};
use tracing::{debug, error};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Whether to swap which engine plays X each game
    pub alternate_marks: bool,
    /// Print a result line after every game
    pub verbose: bool,
    /// Print the board after every move
    pub show_boards: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            alternate_marks: true,
            verbose: false,
            show_boards: false,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate marks if configured
            let engine1_is_x = !self.config.alternate_marks || game_num % 2 == 0;

            let game_result = if engine1_is_x {
                self.play_game(engine1, engine2)
            } else {
                // Flip the result since engine1 played O
                self.play_game(engine2, engine1).flipped()
            };

            result.record(game_result);

            if self.config.verbose {
                let mark = if engine1_is_x { "X" } else { "O" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    mark,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns the result from X's perspective.
    ///
    /// An engine that errors or hands back an illegal move is defective;
    /// the game is logged and abandoned as a draw rather than crashing
    /// the whole match.
    pub fn play_game(&self, x: &mut dyn Engine, o: &mut dyn Engine) -> GameResult {
        let mut board = Board::new();
        x.new_game();
        o.new_game();

        while board.winner() == Mark::Empty {
            let mover = board.current_player();
            let selected = if mover == Mark::X {
                x.select_move(&board)
            } else {
                o.select_move(&board)
            };

            let choice = match selected {
                Ok(choice) => choice,
                Err(e) => {
                    error!(player = %mover, "engine failed to select a move: {e}");
                    return GameResult::Draw;
                }
            };

            board = match board.play(choice.best_move) {
                Ok(next) => next,
                Err(e) => {
                    error!(player = %mover, "engine played an illegal move: {e}");
                    return GameResult::Draw;
                }
            };

            debug!(
                player = %mover,
                cell = choice.best_move,
                score = choice.score,
                nodes = choice.nodes,
                "move played"
            );

            if self.config.show_boards {
                println!("{board}\n");
            }
        }

        match board.winner() {
            Mark::X => GameResult::Win,
            Mark::O => GameResult::Loss,
            _ => GameResult::Draw,
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
