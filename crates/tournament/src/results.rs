//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result of a single game, from the first engine's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Flips the perspective (first engine ↔ second engine).
    pub fn flipped(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// Tallies one game.
    pub fn record(&mut self, game: GameResult) {
        match game {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first engine's perspective (1 for win, 0.5 for draw)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// A completed match with its participants, for JSON reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str, result: MatchResult) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        }
    }

    /// Save the report to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load a report from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        format!(
            "{} vs {}: {}-{}-{} (score {:.1}%)",
            self.engine1,
            self.engine2,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        )
    }

    /// Print the report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_counts_draws_as_half() {
        let result = MatchResult {
            wins: 2,
            losses: 1,
            draws: 1,
        };
        assert!((result.score() - 0.625).abs() < 1e-9);
    }

    #[test]
    fn test_record_tallies_each_outcome() {
        let mut result = MatchResult::new();
        result.record(GameResult::Win);
        result.record(GameResult::Draw);
        result.record(GameResult::Draw);
        result.record(GameResult::Loss);

        assert_eq!(result.wins, 1);
        assert_eq!(result.losses, 1);
        assert_eq!(result.draws, 2);
        assert_eq!(result.total_games(), 4);
    }

    #[test]
    fn test_flipped_swaps_win_and_loss() {
        assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
        assert_eq!(GameResult::Loss.flipped(), GameResult::Win);
        assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
    }
}
