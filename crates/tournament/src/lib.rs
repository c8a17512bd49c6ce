//! Tic-tac-toe match driver
//!
//! Plays games between [`tictactoe_core::Engine`] implementations and
//! reports the results. The core crates never perform I/O; everything
//! user-facing lives here.

pub mod console;
pub mod match_runner;
pub mod results;

pub use console::ConsoleEngine;
pub use match_runner::{quick_match, MatchConfig, MatchRunner};
pub use results::{GameResult, MatchReport, MatchResult};
