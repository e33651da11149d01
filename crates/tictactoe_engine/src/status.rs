//! Session status and game outcomes.

use super::Player;
use super::rules::Line;
use serde::{Deserialize, Serialize};

/// Current status of a session.
///
/// Exactly one variant holds at any time; the winning line travels with
/// the winner so renderers never recompute it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no line completed.
    Drawn,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Outcome of a finished game, `None` while in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won { winner, .. } => Some(Outcome::Winner(*winner)),
            GameStatus::Drawn => Some(Outcome::Draw),
        }
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
